//! Catalog items and their per-variant purchase behavior.
//!
//! The variant set is open: anything implementing [`Item`] can be stored in a
//! [`Catalog`](crate::Catalog). The catalog never inspects concrete types; it
//! only drives the availability check, inventory reduction and fulfillment
//! dispatch through the trait.

mod audio;
mod digital;
mod display;
mod physical;

pub use audio::AudioBook;
pub use digital::DigitalBook;
pub use display::DisplayBook;
pub use physical::PhysicalBook;

use serde::{Deserialize, Serialize};

use bookstore_core::{DomainError, DomainResult, Isbn, Money};

use crate::fulfillment::{Dispatch, Fulfillment};

/// Attributes shared by every catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetails {
    isbn: Isbn,
    title: String,
    author: String,
    year_published: i32,
    unit_price: Money,
}

impl ItemDetails {
    pub fn new(
        isbn: &str,
        title: impl Into<String>,
        author: impl Into<String>,
        year_published: i32,
        unit_price: Money,
    ) -> DomainResult<Self> {
        let isbn = Isbn::new(isbn)?;
        let title = title.into();
        let author = author.into();

        if title.trim().is_empty() {
            return Err(DomainError::validation("title cannot be empty"));
        }
        if author.trim().is_empty() {
            return Err(DomainError::validation("author cannot be empty"));
        }

        Ok(Self {
            isbn,
            title,
            author,
            year_published,
            unit_price,
        })
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year_published(&self) -> i32 {
        self.year_published
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Years elapsed between publication and `current_year` (negative for
    /// future publication dates).
    pub fn age_in(&self, current_year: i32) -> i64 {
        i64::from(current_year) - i64::from(self.year_published)
    }

    /// Strictly older than `max_age` years as of `current_year`.
    pub fn is_outdated(&self, current_year: i32, max_age: u32) -> bool {
        self.age_in(current_year) > i64::from(max_age)
    }
}

impl core::fmt::Display for ItemDetails {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ISBN: {}, Title: {}, Author: {}, Year: {}, Price: {}",
            self.isbn, self.title, self.author, self.year_published, self.unit_price
        )
    }
}

/// One catalog entry: shared details plus variant-specific purchase behavior.
pub trait Item: core::fmt::Debug + core::fmt::Display + Send + Sync {
    fn details(&self) -> &ItemDetails;

    /// Stable lowercase variant tag used in notifications and logs.
    fn kind(&self) -> &'static str;

    /// Whether `quantity` units can be sold right now.
    fn is_available(&self, quantity: u32) -> bool;

    /// Deliver a sold quantity through the matching collaborator.
    ///
    /// Only called after `is_available` passed and inventory was reduced.
    fn fulfill(
        &self,
        quantity: u32,
        email: &str,
        address: &str,
        services: &Fulfillment,
    ) -> Dispatch;

    /// Remove sold units from stock. Non-stocked variants keep the default no-op.
    fn reduce_inventory(&mut self, _quantity: u32) {}

    /// Remaining stock, for variants that track it.
    fn stock(&self) -> Option<u32> {
        None
    }

    fn isbn(&self) -> &Isbn {
        self.details().isbn()
    }

    fn title(&self) -> &str {
        self.details().title()
    }

    fn year_published(&self) -> i32 {
        self.details().year_published()
    }

    fn unit_price(&self) -> Money {
        self.details().unit_price()
    }
}

#[cfg(test)]
pub(crate) fn test_details(isbn: &str, year_published: i32, cents: u64) -> ItemDetails {
    ItemDetails::new(isbn, "Test Title", "Test Author", year_published, Money::from_cents(cents))
        .unwrap()
}
