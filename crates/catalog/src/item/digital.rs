use bookstore_core::{DomainError, DomainResult};

use crate::fulfillment::{Dispatch, Fulfillment};

use super::{Item, ItemDetails};

/// Downloadable book; never runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitalBook {
    details: ItemDetails,
    format: String,
}

impl DigitalBook {
    pub fn new(details: ItemDetails, format: impl Into<String>) -> DomainResult<Self> {
        let format = format.into();
        if format.trim().is_empty() {
            return Err(DomainError::validation("format cannot be empty"));
        }
        Ok(Self { details, format })
    }

    /// File type tag (e.g. "PDF", "EPUB").
    pub fn format(&self) -> &str {
        &self.format
    }
}

impl Item for DigitalBook {
    fn details(&self) -> &ItemDetails {
        &self.details
    }

    fn kind(&self) -> &'static str {
        "digital"
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
        tracing::info!(isbn = %self.details.isbn(), format = %self.format, email, "ebook sent");

        Dispatch::Delivered {
            email: email.to_string(),
        }
    }
}

impl core::fmt::Display for DigitalBook {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, File Type: {}", self.details, self.format)
    }
}
