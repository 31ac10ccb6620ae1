//! Bookstore catalog domain module.
//!
//! Items of different fulfillment kinds (shipped paper stock, digital
//! downloads, showcase copies, audio editions) held in a [`Catalog`] keyed by
//! ISBN, plus the purchase transaction that checks availability, reduces
//! inventory and dispatches fulfillment through injected collaborators.
//!
//! No IO here beyond the collaborators the caller hands in.

pub mod catalog;
pub mod event;
pub mod fulfillment;
pub mod item;
pub mod shared;

pub use catalog::Catalog;
pub use event::{CatalogEvent, ItemAdded, ItemRemoved, PurchaseCompleted};
pub use fulfillment::{
    DeliveryService, Dispatch, Fulfillment, LoggingDeliveryService, LoggingShippingService,
    ShippingService,
};
pub use item::{AudioBook, DigitalBook, DisplayBook, Item, ItemDetails, PhysicalBook};
pub use shared::SharedCatalog;
