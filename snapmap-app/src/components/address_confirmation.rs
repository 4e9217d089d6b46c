use leptos::{ev, *};

use snapmap_core::{
    dialog::{AddressConfirmation, Command, ConfirmOutcome, ConfirmRequest, Mode, UserAction},
    DestinationRegistry, Error,
};
use snapmap_frontend_api::GeocodeApi;

const SECONDARY_BUTTON_CLASS: &str = "px-4 py-2 text-gray-600 hover:bg-gray-100 rounded dark:text-gray-300 dark:hover:bg-gray-700";

/// Modal dialog to review, edit and confirm an address extracted from a photo.
///
/// A confirmed address is geocoded and added to `map`.
#[component]
pub fn AddressConfirmationDialog<R>(
    #[prop(into)] address: Signal<String>,
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    on_retake: Callback<()>,
    #[prop(into)] is_processing: Signal<bool>,
    map: R,
    api: GeocodeApi,
    #[prop(optional, into)] on_error: Option<Callback<Error>>,
) -> impl IntoView
where
    R: DestinationRegistry + Clone + 'static,
{
    // -- signals -- //

    let state = create_rw_signal(AddressConfirmation::default());
    let mode = Signal::derive(move || state.with(|s| s.mode(is_processing.get())));
    let disabled = move || !mode.get().actions_enabled();

    // -- actions -- //

    let confirm_action = create_action(move |request: &ConfirmRequest| {
        let request = request.clone();
        let api = api.clone();
        let map = map.clone();
        async move {
            log::info!("Geocoding address '{}'", request.address());
            let result = api
                .geocode(request.body())
                .await
                .map_err(|err| Error::Geocode(err.to_string()));
            let Some(outcome) =
                state.try_update(|s| s.complete_confirm(request.generation(), result, &map))
            else {
                log::debug!("Address confirmation dialog is gone: ignore geocoding result");
                return;
            };
            match outcome {
                ConfirmOutcome::Confirmed(_) => on_close.call(()),
                ConfirmOutcome::Failed(err) => {
                    if let Some(on_error) = on_error {
                        on_error.call(err);
                    }
                }
                ConfirmOutcome::Stale => {}
            }
        }
    });

    // -- callbacks -- //

    let dispatch = move |action: UserAction| {
        let command = state
            .try_update(|s| s.handle(action, is_processing.get_untracked()))
            .flatten();
        match command {
            Some(Command::Close) => on_close.call(()),
            Some(Command::Retake) => on_retake.call(()),
            Some(Command::Geocode(request)) => confirm_action.dispatch(request),
            None => {}
        }
    };

    // -- effects -- //

    create_effect(move |_| {
        let address = address.get();
        log::debug!("Address changed: reset edited address");
        state.update(|s| s.sync_address(&address));
    });

    create_effect(move |was_open: Option<bool>| {
        let open = is_open.get();
        if was_open == Some(true) && !open {
            log::debug!("Address confirmation dialog closed");
            state.update(AddressConfirmation::abandon);
        }
        open
    });

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && is_open.get_untracked() {
            dispatch(UserAction::Dismiss);
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
      <Show when=move || is_open.get()>
        <div
          class="fixed inset-0 bg-black/50 backdrop-blur-sm"
          on:click=move |_| dispatch(UserAction::Dismiss)
        ></div>
        <div
          role="dialog"
          aria-modal="true"
          class="fixed z-50 top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 bg-white dark:bg-gray-800 p-6 rounded-lg shadow-xl w-[90vw] max-w-md"
        >
          <h2 class="text-lg font-bold mb-4">{ move || mode.get().title() }</h2>
          <Show
            when=move || mode.get().shows_form()
            fallback=|| view! {
              <div class="flex items-center justify-center p-4">
                <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-500"></div>
              </div>
            }
          >
            {move || state.with(|s| s.last_error().map(ToString::to_string)).map(|msg| view! {
              <p class="mb-4 text-red-700">{ msg }</p>
            })}
            <div class="mb-4">
              <textarea
                rows="3"
                class="w-full p-2 border rounded dark:bg-gray-700 dark:border-gray-600"
                prop:value=move || state.with(|s| s.edited_address().to_owned())
                on:input=move |ev| {
                  let text = event_target_value(&ev);
                  state.update(|s| s.edit(text));
                }
              ></textarea>
            </div>
            <div class="flex justify-end gap-2">
              <button
                class=SECONDARY_BUTTON_CLASS
                prop:disabled=disabled
                on:click=move |_| dispatch(UserAction::Retake)
              >
                "Retake Photo"
              </button>
              <button
                class=SECONDARY_BUTTON_CLASS
                prop:disabled=disabled
                on:click=move |_| dispatch(UserAction::Cancel)
              >
                "Cancel"
              </button>
              <button
                class=move || confirm_button_class(mode.get())
                prop:disabled=disabled
                on:click=move |_| dispatch(UserAction::Confirm)
              >
                <Show when=move || mode.get() == Mode::Confirming>
                  <div class="animate-spin rounded-full h-4 w-4 border-b-2 border-white"></div>
                </Show>
                { move || mode.get().confirm_label() }
              </button>
            </div>
          </Show>
        </div>
      </Show>
    }
}

fn confirm_button_class(mode: Mode) -> &'static str {
    match mode {
        Mode::Confirming => "px-4 py-2 bg-gray-400 text-white rounded flex items-center gap-2",
        Mode::Editing | Mode::Processing => {
            "px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded flex items-center gap-2"
        }
    }
}
