use leptos::*;

use snapmap_boundary::Destination;
use snapmap_core::DestinationRegistry;

/// Shared destinations of the map.
#[derive(Clone, Copy)]
pub struct MapState {
    destinations: RwSignal<Vec<Destination>>,
}

impl MapState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            destinations: create_rw_signal(Vec::new()),
        }
    }

    #[must_use]
    pub fn destinations(&self) -> Signal<Vec<Destination>> {
        self.destinations.into()
    }

    #[must_use]
    pub fn last_destination(&self) -> Option<Destination> {
        self.destinations.with(|d| d.last().cloned())
    }
}

impl Default for MapState {
    fn default() -> Self {
        Self::new()
    }
}

impl DestinationRegistry for MapState {
    fn add_destination(&self, destination: Destination) {
        log::debug!(
            "Add destination at ({}, {})",
            destination.lat,
            destination.lng
        );
        self.destinations.update(|d| d.push(destination));
    }
}
