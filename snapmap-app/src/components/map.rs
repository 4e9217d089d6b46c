use leaflet::LatLng;
use leptos::*;
use leptos_leaflet::{position, MapContainer, Marker, Popup, Position, TileLayer};

use snapmap_boundary::{Destination, MapPoint};

const TILE_LAYER_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
const MAP_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[component]
pub fn Map(center: Signal<MapPoint>, destinations: Signal<Vec<Destination>>) -> impl IntoView {
    let map = RwSignal::<Option<leaflet::Map>>::new(None);

    Effect::new(move |_| {
        let MapPoint { lat, lng } = center.get();
        let Some(map) = map.get() else {
            log::debug!("No leaflet map found");
            return;
        };
        let zoom = map.get_zoom();
        map.set_view(&LatLng::new(lat, lng), zoom);
    });

    let MapPoint { lat, lng } = center.get_untracked();
    let center = Position::new(lat, lng);

    view! {
      <MapContainer
        class="h-full"
        center
        zoom=13.0
        zoom_control=false
        map=map.write_only()
        set_view=true
      >
        <TileLayer url=TILE_LAYER_URL attribution=MAP_ATTRIBUTION />
        <For
          each=move || destinations.get().into_iter().enumerate()
          key=|(index, _)| *index
          let:item
        >
          <Marker position=position!(item.1.lat, item.1.lng)>
            <Popup>
              <strong>{item.1.address}</strong>
            </Popup>
          </Marker>
        </For>
      </MapContainer>
    }
}
