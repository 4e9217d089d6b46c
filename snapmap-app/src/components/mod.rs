mod address_confirmation;
mod destinations;
mod map;

pub use self::{address_confirmation::*, destinations::*, map::*};
