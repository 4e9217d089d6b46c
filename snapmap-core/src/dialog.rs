//! State of the address confirmation dialog.
//!
//! The dialog itself is rendered by the frontend. Everything that decides
//! *what* happens on a user action or a geocoding response lives here, so
//! it can be tested without a browser.

use snapmap_boundary::{Destination, GeocodeRequest, GeocodeResponse};

use crate::{DestinationRegistry, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// An upstream photo-to-address extraction is still running.
    Processing,
    Editing,
    /// A geocoding request is outstanding.
    Confirming,
}

impl Mode {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Processing => "Processing Image...",
            Self::Editing | Self::Confirming => "Confirm Address",
        }
    }

    #[must_use]
    pub const fn confirm_label(self) -> &'static str {
        match self {
            Self::Confirming => "Processing...",
            Self::Processing | Self::Editing => "Confirm",
        }
    }

    #[must_use]
    pub const fn shows_form(self) -> bool {
        !matches!(self, Self::Processing)
    }

    #[must_use]
    pub const fn actions_enabled(self) -> bool {
        matches!(self, Self::Editing)
    }
}

/// Something the user did inside (or around) the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Confirm,
    Cancel,
    Retake,
    /// Overlay click or Escape.
    Dismiss,
}

/// What the frontend has to do in response to a [`UserAction`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Close,
    Retake,
    Geocode(ConfirmRequest),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmRequest {
    generation: u64,
    body: GeocodeRequest,
}

impl ConfirmRequest {
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn body(&self) -> &GeocodeRequest {
        &self.body
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.body.address
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmOutcome {
    /// The destination has been added to the map; the dialog should close.
    Confirmed(Destination),
    /// Nothing has been added; the dialog stays open.
    Failed(Error),
    /// The dialog moved on while the request was in flight.
    Stale,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressConfirmation {
    edited_address: String,
    confirming: bool,
    generation: u64,
    last_error: Option<Error>,
}

impl AddressConfirmation {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            edited_address: address.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn edited_address(&self) -> &str {
        &self.edited_address
    }

    #[must_use]
    pub const fn is_confirming(&self) -> bool {
        self.confirming
    }

    #[must_use]
    pub const fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    #[must_use]
    pub const fn mode(&self, is_processing: bool) -> Mode {
        if is_processing {
            Mode::Processing
        } else if self.confirming {
            Mode::Confirming
        } else {
            Mode::Editing
        }
    }

    /// Replace the edited text with a new address from the outside.
    ///
    /// Unsaved edits are discarded.
    pub fn sync_address(&mut self, address: &str) {
        address.clone_into(&mut self.edited_address);
        self.last_error = None;
    }

    pub fn edit(&mut self, text: String) {
        self.edited_address = text;
    }

    pub fn handle(&mut self, action: UserAction, is_processing: bool) -> Option<Command> {
        let mode = self.mode(is_processing);
        match action {
            UserAction::Dismiss => {
                if self.confirming {
                    log::debug!("Abandon pending confirmation on dismissal");
                }
                self.abandon();
                Some(Command::Close)
            }
            _ if !mode.actions_enabled() => {
                log::debug!("Ignore {action:?} in mode {mode:?}");
                None
            }
            UserAction::Cancel => Some(Command::Close),
            UserAction::Retake => Some(Command::Retake),
            UserAction::Confirm => self.begin_confirm().map(Command::Geocode),
        }
    }

    fn begin_confirm(&mut self) -> Option<ConfirmRequest> {
        if self.confirming {
            return None;
        }
        self.confirming = true;
        self.generation = self.generation.wrapping_add(1);
        self.last_error = None;
        Some(ConfirmRequest {
            generation: self.generation,
            body: GeocodeRequest {
                address: self.edited_address.clone(),
            },
        })
    }

    /// Apply the result of the request started with `generation`.
    pub fn complete_confirm<R>(
        &mut self,
        generation: u64,
        result: Result<GeocodeResponse, Error>,
        registry: &R,
    ) -> ConfirmOutcome
    where
        R: DestinationRegistry + ?Sized,
    {
        if !self.confirming || generation != self.generation {
            log::debug!(
                "Drop stale geocoding result (generation {generation}, current {})",
                self.generation
            );
            return ConfirmOutcome::Stale;
        }
        self.confirming = false;
        match result {
            Ok(res) => {
                let destination = Destination::from(res);
                log::info!("Add destination '{}'", destination.address);
                registry.add_destination(destination.clone());
                ConfirmOutcome::Confirmed(destination)
            }
            Err(err) => {
                log::error!("Error confirming address: {err}");
                self.last_error = Some(err.clone());
                ConfirmOutcome::Failed(err)
            }
        }
    }

    /// Forget about any outstanding request.
    ///
    /// Called whenever the dialog is closed or torn down.
    pub fn abandon(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.confirming = false;
        self.last_error = None;
    }
}
