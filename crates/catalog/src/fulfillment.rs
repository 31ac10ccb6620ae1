//! External fulfillment collaborators (shipping and digital delivery).
//!
//! The catalog never talks to a carrier or a mail server itself. It is handed
//! a [`Fulfillment`] bundle at construction time and items dispatch through
//! it, so tests can substitute recording fakes.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::item::ItemDetails;

/// Ships physical stock to a postal address.
pub trait ShippingService: Send + Sync {
    fn ship(&self, item: &ItemDetails, quantity: u32, address: &str);
}

/// Delivers a digital item to an email address.
pub trait DeliveryService: Send + Sync {
    fn deliver_digital(&self, item: &ItemDetails, email: &str);
}

/// Collaborators available to [`Item::fulfill`](crate::Item::fulfill).
#[derive(Clone)]
pub struct Fulfillment {
    shipping: Arc<dyn ShippingService>,
    delivery: Arc<dyn DeliveryService>,
}

impl Fulfillment {
    pub fn new(shipping: Arc<dyn ShippingService>, delivery: Arc<dyn DeliveryService>) -> Self {
        Self { shipping, delivery }
    }

    /// Collaborators that only record the dispatch in the log.
    pub fn logging() -> Self {
        Self::new(Arc::new(LoggingShippingService), Arc::new(LoggingDeliveryService))
    }

    pub fn shipping(&self) -> &dyn ShippingService {
        self.shipping.as_ref()
    }

    pub fn delivery(&self) -> &dyn DeliveryService {
        self.delivery.as_ref()
    }
}

impl core::fmt::Debug for Fulfillment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Fulfillment").finish_non_exhaustive()
    }
}

/// What a fulfillment call dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Dispatch {
    /// Handed to the shipping collaborator.
    Shipped { quantity: u32, address: String },
    /// Handed to the delivery collaborator.
    Delivered { email: String },
    /// Nothing was dispatched.
    Withheld,
}

/// Shipping collaborator that only logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingShippingService;

impl ShippingService for LoggingShippingService {
    fn ship(&self, item: &ItemDetails, quantity: u32, address: &str) {
        tracing::info!(isbn = %item.isbn(), title = item.title(), quantity, address, "shipping service called");
    }
}

/// Delivery collaborator that only logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingDeliveryService;

impl DeliveryService for LoggingDeliveryService {
    fn deliver_digital(&self, item: &ItemDetails, email: &str) {
        tracing::info!(isbn = %item.isbn(), title = item.title(), email, "mail service called");
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Records every collaborator call for later assertions.
    #[derive(Debug, Default)]
    pub struct RecordingServices {
        pub shipments: Mutex<Vec<(String, u32, String)>>,
        pub deliveries: Mutex<Vec<(String, String)>>,
    }

    impl RecordingServices {
        pub fn shipments(&self) -> Vec<(String, u32, String)> {
            self.shipments.lock().unwrap().clone()
        }

        pub fn deliveries(&self) -> Vec<(String, String)> {
            self.deliveries.lock().unwrap().clone()
        }
    }

    impl ShippingService for RecordingServices {
        fn ship(&self, item: &ItemDetails, quantity: u32, address: &str) {
            self.shipments
                .lock()
                .unwrap()
                .push((item.isbn().to_string(), quantity, address.to_string()));
        }
    }

    impl DeliveryService for RecordingServices {
        fn deliver_digital(&self, item: &ItemDetails, email: &str) {
            self.deliveries
                .lock()
                .unwrap()
                .push((item.isbn().to_string(), email.to_string()));
        }
    }

    pub fn recording() -> (Arc<RecordingServices>, Fulfillment) {
        let rec = Arc::new(RecordingServices::default());
        let fulfillment = Fulfillment::new(rec.clone(), rec.clone());
        (rec, fulfillment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_serializes_with_method_tag() {
        let shipped = Dispatch::Shipped {
            quantity: 2,
            address: "123 Main St".to_string(),
        };
        let json = serde_json::to_value(&shipped).unwrap();
        assert_eq!(json["method"], "shipped");
        assert_eq!(json["quantity"], 2);

        let withheld = serde_json::to_value(Dispatch::Withheld).unwrap();
        assert_eq!(withheld["method"], "withheld");
    }

    #[test]
    fn logging_services_still_report_dispatch() {
        use crate::item::{DigitalBook, Item, PhysicalBook, test_details};

        let services = Fulfillment::logging();

        let paper = PhysicalBook::new(test_details("978-1", 2020, 100), 3);
        assert_eq!(
            paper.fulfill(1, "a@b.c", "somewhere", &services),
            Dispatch::Shipped {
                quantity: 1,
                address: "somewhere".to_string(),
            }
        );

        let ebook = DigitalBook::new(test_details("978-2", 2020, 100), "PDF").unwrap();
        assert_eq!(
            ebook.fulfill(1, "a@b.c", "somewhere", &services),
            Dispatch::Delivered {
                email: "a@b.c".to_string(),
            }
        );
    }
}
