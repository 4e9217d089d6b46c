use leptos::*;

use snapmap_boundary::Destination;

#[component]
pub fn DestinationList(destinations: Signal<Vec<Destination>>) -> impl IntoView {
    view! {
      <section class="p-4">
        <h3 class="font-bold mb-2">"Destinations"</h3>
        <Show
          when=move || destinations.with(|d| !d.is_empty())
          fallback=|| view! { <p class="text-gray-500">"No destinations yet"</p> }
        >
          <ul>
            <For
              each=move || destinations.get().into_iter().enumerate()
              key=|(index, _)| *index
              let:item
            >
              <li class="mb-1">
                <span>{item.1.address}</span>
                <span class="ml-2 text-xs text-gray-500">
                  { format!("{:.5}, {:.5}", item.1.lat, item.1.lng) }
                </span>
              </li>
            </For>
          </ul>
        </Show>
      </section>
    }
}
