use bookstore_core::{DomainError, DomainResult};

use crate::fulfillment::{Dispatch, Fulfillment};

use super::{Item, ItemDetails};

/// Narrated audio edition, delivered as a download link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBook {
    details: ItemDetails,
    narrator: String,
    duration_minutes: u32,
}

impl AudioBook {
    pub fn new(
        details: ItemDetails,
        narrator: impl Into<String>,
        duration_minutes: u32,
    ) -> DomainResult<Self> {
        let narrator = narrator.into();
        if narrator.trim().is_empty() {
            return Err(DomainError::validation("narrator cannot be empty"));
        }
        Ok(Self {
            details,
            narrator,
            duration_minutes,
        })
    }

    pub fn narrator(&self) -> &str {
        &self.narrator
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }
}

impl Item for AudioBook {
    fn details(&self) -> &ItemDetails {
        &self.details
    }

    fn kind(&self) -> &'static str {
        "audio"
    }

    fn is_available(&self, _quantity: u32) -> bool {
        true
    }

    fn fulfill(
        &self,
        _quantity: u32,
        email: &str,
        _address: &str,
        services: &Fulfillment,
    ) -> Dispatch {
        services.delivery().deliver_digital(&self.details, email);
        tracing::info!(isbn = %self.details.isbn(), email, "audio book download link sent");

        Dispatch::Delivered {
            email: email.to_string(),
        }
    }
}

impl core::fmt::Display for AudioBook {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}, Narrator: {}, Duration: {} min",
            self.details, self.narrator, self.duration_minutes
        )
    }
}
