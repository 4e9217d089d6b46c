use snapmap_boundary::Destination;

pub mod dialog;
mod error;

pub use self::error::Error;

/// The map's working set of destinations.
///
/// The dialog only ever appends to it and never reads it back.
pub trait DestinationRegistry {
    fn add_destination(&self, destination: Destination);
}
