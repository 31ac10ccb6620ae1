//! The catalog store and its purchase transaction.

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use bookstore_core::{DomainError, DomainResult, Isbn, Money};
use bookstore_events::{EventBus, InMemoryEventBus, Subscription};

use crate::event::{CatalogEvent, ItemAdded, ItemRemoved, PurchaseCompleted};
use crate::fulfillment::Fulfillment;
use crate::item::Item;

/// Owning collection of catalog items, keyed by ISBN.
///
/// Every mutation publishes a [`CatalogEvent`] on the bus `B`. Publishing is
/// fire-and-forget: a failed publish is logged and never fails the operation.
#[derive(Debug)]
pub struct Catalog<B = InMemoryEventBus<CatalogEvent>>
where
    B: EventBus<CatalogEvent>,
{
    items: HashMap<Isbn, Box<dyn Item>>,
    fulfillment: Fulfillment,
    bus: B,
}

impl Catalog<InMemoryEventBus<CatalogEvent>> {
    /// Catalog publishing to a fresh in-process bus.
    pub fn in_memory(fulfillment: Fulfillment) -> Self {
        Self::new(fulfillment, InMemoryEventBus::new())
    }
}

impl<B> Catalog<B>
where
    B: EventBus<CatalogEvent>,
{
    pub fn new(fulfillment: Fulfillment, bus: B) -> Self {
        Self {
            items: HashMap::new(),
            fulfillment,
            bus,
        }
    }

    /// Insert an item, replacing any entry with the same ISBN.
    pub fn add<I>(&mut self, item: I)
    where
        I: Item + 'static,
    {
        self.add_boxed(Box::new(item));
    }

    pub fn add_boxed(&mut self, item: Box<dyn Item>) {
        let isbn = item.isbn().clone();
        let title = item.title().to_string();
        let kind = item.kind();

        let replaced = self.items.insert(isbn.clone(), item).is_some();
        if replaced {
            tracing::warn!(%isbn, %title, kind, "replaced existing catalog entry");
        } else {
            tracing::info!(%isbn, %title, kind, "added book");
        }

        self.notify(CatalogEvent::ItemAdded(ItemAdded {
            isbn,
            title,
            kind: kind.to_string(),
            replaced,
            occurred_at: Utc::now(),
        }));
    }

    pub fn get(&self, isbn: &str) -> Option<&dyn Item> {
        self.items.get(isbn).map(|item| &**item)
    }

    pub fn contains(&self, isbn: &str) -> bool {
        self.items.contains_key(isbn)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over every item (no ordering guarantee).
    pub fn items(&self) -> impl Iterator<Item = &dyn Item> {
        self.items.values().map(|item| &**item)
    }

    /// Log one line per item, sorted by ISBN.
    pub fn log_inventory(&self) {
        let mut items: Vec<&dyn Item> = self.items().collect();
        items.sort_by(|a, b| a.isbn().cmp(b.isbn()));

        tracing::info!(count = items.len(), "current inventory");
        for item in items {
            tracing::info!(kind = item.kind(), "{item}");
        }
    }

    /// Remove and return every item older than `max_age` years as of
    /// `current_year`.
    pub fn remove_outdated(&mut self, current_year: i32, max_age: u32) -> Vec<Box<dyn Item>> {
        let outdated: Vec<Isbn> = self
            .items
            .iter()
            .filter(|(_, item)| item.details().is_outdated(current_year, max_age))
            .map(|(isbn, _)| isbn.clone())
            .collect();

        let mut removed = Vec::with_capacity(outdated.len());
        for isbn in outdated {
            let Some(item) = self.items.remove(&isbn) else {
                continue;
            };

            tracing::info!(%isbn, title = item.title(), year = item.year_published(), "removed outdated book");
            self.notify(CatalogEvent::ItemRemoved(ItemRemoved {
                isbn,
                title: item.title().to_string(),
                year_published: item.year_published(),
                occurred_at: Utc::now(),
            }));
            removed.push(item);
        }

        removed
    }

    /// Buy `quantity` units of `isbn` and return the amount charged.
    ///
    /// Lookup, availability check, total, inventory reduction, fulfillment.
    /// Nothing is mutated when an error is returned.
    pub fn purchase(
        &mut self,
        isbn: &str,
        quantity: u32,
        email: &str,
        address: &str,
    ) -> DomainResult<Money> {
        let Some(item) = self.items.get_mut(isbn) else {
            tracing::warn!(isbn, "purchase rejected: book not found");
            return Err(DomainError::not_found(isbn));
        };

        if !item.is_available(quantity) {
            tracing::warn!(isbn, quantity, kind = item.kind(), "purchase rejected: not available");
            return Err(DomainError::unavailable(isbn, quantity));
        }

        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        let total = item
            .unit_price()
            .checked_mul(quantity)
            .ok_or_else(|| DomainError::validation("order total overflows"))?;

        item.reduce_inventory(quantity);
        let dispatch = item.fulfill(quantity, email, address, &self.fulfillment);
        let isbn = item.isbn().clone();

        tracing::info!(%isbn, quantity, %total, "purchase successful");
        self.notify(CatalogEvent::PurchaseCompleted(PurchaseCompleted {
            purchase_id: Uuid::now_v7(),
            isbn,
            quantity,
            total,
            dispatch,
            occurred_at: Utc::now(),
        }));

        Ok(total)
    }

    /// Subscribe to catalog notifications published from now on.
    pub fn subscribe(&self) -> Subscription<CatalogEvent> {
        self.bus.subscribe()
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    fn notify(&self, event: CatalogEvent) {
        let event_type = bookstore_events::Event::event_type(&event);
        if let Err(err) = self.bus.publish(event) {
            tracing::warn!(event_type, error = ?err, "failed to publish catalog event");
        }
    }
}
