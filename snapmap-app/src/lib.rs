use leptos::{ev, *};

use snapmap_boundary::MapPoint;
use snapmap_core::Error;
use snapmap_frontend_api::GeocodeApi;

mod components;
mod config;
mod map_state;

use self::{components::*, config::*};

pub use self::map_state::MapState;

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- signals -- //

    let map_state = MapState::new();
    let address = create_rw_signal(String::new());
    let dialog_open = create_rw_signal(false);
    // Photo-to-address extraction happens upstream.
    let is_processing = Signal::derive(|| false);
    let center = Signal::derive(move || {
        map_state
            .last_destination()
            .as_ref()
            .map_or(DEFAULT_MAP_CENTER, MapPoint::from)
    });

    // -- callbacks -- //

    let on_close = Callback::new(move |()| {
        dialog_open.set(false);
    });

    let on_retake = Callback::new(move |()| {
        log::info!("Retake photo");
        dialog_open.set(false);
        address.set(String::new());
    });

    let on_error = Callback::new(move |err: Error| {
        log::warn!("Address not confirmed: {err}");
    });

    let open_dialog = move |_: ev::MouseEvent| {
        dialog_open.set(true);
    };

    // -- init API -- //

    let api = GeocodeApi::new(API_URL.to_string());

    view! {
      <div class="h-full flex flex-col">
        <header class="flex items-center justify-between p-4 shadow">
          <h1 class="text-xl font-bold">"SnapMap"</h1>
          <button
            class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded"
            on:click=open_dialog
          >
            "Add destination"
          </button>
        </header>
        <main class="flex-1">
          <Map center destinations=map_state.destinations() />
        </main>
        <DestinationList destinations=map_state.destinations() />
        <AddressConfirmationDialog
          address
          is_open=dialog_open
          on_close
          on_retake
          is_processing
          map=map_state
          api
          on_error
        />
      </div>
    }
}
