use crate::fulfillment::{Dispatch, Fulfillment};

use super::{Item, ItemDetails};

/// Printed book shipped from stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalBook {
    details: ItemDetails,
    stock: u32,
}

impl PhysicalBook {
    pub fn new(details: ItemDetails, stock: u32) -> Self {
        Self { details, stock }
    }
}

impl Item for PhysicalBook {
    fn details(&self) -> &ItemDetails {
        &self.details
    }

    fn kind(&self) -> &'static str {
        "physical"
    }

    fn is_available(&self, quantity: u32) -> bool {
        self.stock >= quantity
    }

    fn fulfill(
        &self,
        quantity: u32,
        _email: &str,
        address: &str,
        services: &Fulfillment,
    ) -> Dispatch {
        services.shipping().ship(&self.details, quantity, address);
        tracing::info!(isbn = %self.details.isbn(), quantity, address, "paper book shipped");

        Dispatch::Shipped {
            quantity,
            address: address.to_string(),
        }
    }

    fn reduce_inventory(&mut self, quantity: u32) {
        // Callers check availability first; saturate rather than wrap if not.
        self.stock = self.stock.saturating_sub(quantity);
    }

    fn stock(&self) -> Option<u32> {
        Some(self.stock)
    }
}

impl core::fmt::Display for PhysicalBook {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, Stock: {}", self.details, self.stock)
    }
}
