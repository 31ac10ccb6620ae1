//! Thread-safe handle onto a [`Catalog`].

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use bookstore_core::{DomainError, DomainResult, Money};
use bookstore_events::{EventBus, InMemoryEventBus, Subscription};

use crate::catalog::Catalog;
use crate::event::CatalogEvent;
use crate::item::{Item, ItemDetails};

/// Cloneable, lock-guarded catalog for concurrent callers.
///
/// Every mutating operation holds the write lock for its whole duration, so a
/// purchase's availability check, stock reduction and fulfillment happen as
/// one unit and concurrent buyers can never oversell.
#[derive(Debug)]
pub struct SharedCatalog<B = InMemoryEventBus<CatalogEvent>>
where
    B: EventBus<CatalogEvent>,
{
    inner: Arc<RwLock<Catalog<B>>>,
}

impl<B> Clone for SharedCatalog<B>
where
    B: EventBus<CatalogEvent>,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B> SharedCatalog<B>
where
    B: EventBus<CatalogEvent>,
{
    pub fn new(catalog: Catalog<B>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    pub fn add<I>(&self, item: I) -> DomainResult<()>
    where
        I: Item + 'static,
    {
        self.write()?.add(item);
        Ok(())
    }

    pub fn purchase(
        &self,
        isbn: &str,
        quantity: u32,
        email: &str,
        address: &str,
    ) -> DomainResult<Money> {
        self.write()?.purchase(isbn, quantity, email, address)
    }

    pub fn remove_outdated(&self, current_year: i32, max_age: u32) -> DomainResult<Vec<Box<dyn Item>>> {
        Ok(self.write()?.remove_outdated(current_year, max_age))
    }

    /// Remaining stock of `isbn`; `None` for unstocked variants.
    pub fn stock(&self, isbn: &str) -> DomainResult<Option<u32>> {
        let catalog = self.read()?;
        let item = catalog.get(isbn).ok_or_else(|| DomainError::not_found(isbn))?;
        Ok(item.stock())
    }

    /// Snapshot of the shared attributes of `isbn`.
    pub fn details(&self, isbn: &str) -> DomainResult<ItemDetails> {
        let catalog = self.read()?;
        catalog
            .get(isbn)
            .map(|item| item.details().clone())
            .ok_or_else(|| DomainError::not_found(isbn))
    }

    pub fn len(&self) -> DomainResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.read()?.is_empty())
    }

    pub fn subscribe(&self) -> DomainResult<Subscription<CatalogEvent>> {
        Ok(self.read()?.subscribe())
    }

    /// Run `f` with read access to the underlying catalog.
    pub fn with_catalog<R>(&self, f: impl FnOnce(&Catalog<B>) -> R) -> DomainResult<R> {
        Ok(f(&*self.read()?))
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, Catalog<B>>> {
        self.inner
            .read()
            .map_err(|_| DomainError::invariant("catalog lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Catalog<B>>> {
        self.inner
            .write()
            .map_err(|_| DomainError::invariant("catalog lock poisoned"))
    }
}

impl<B> From<Catalog<B>> for SharedCatalog<B>
where
    B: EventBus<CatalogEvent>,
{
    fn from(catalog: Catalog<B>) -> Self {
        Self::new(catalog)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::thread;

    use super::*;
    use crate::fulfillment::fakes::recording;
    use crate::item::{DigitalBook, PhysicalBook};

    fn stocked(stock: u32) -> PhysicalBook {
        let details =
            ItemDetails::new("978-1", "Title", "Author", 2020, Money::from_cents(1000)).unwrap();
        PhysicalBook::new(details, stock)
    }

    #[test]
    fn concurrent_buyers_never_oversell() {
        let (rec, services) = recording();
        let shared = SharedCatalog::new(Catalog::in_memory(services));
        shared.add(stocked(10)).unwrap();

        let successes = AtomicU32::new(0);
        thread::scope(|s| {
            for _ in 0..25 {
                let shared = shared.clone();
                let successes = &successes;
                s.spawn(move || {
                    if shared.purchase("978-1", 1, "a@b.c", "addr").is_ok() {
                        successes.fetch_add(1, Ordering::SeqCst);
                    }
                });
            }
        });

        assert_eq!(successes.load(Ordering::SeqCst), 10);
        assert_eq!(shared.stock("978-1").unwrap(), Some(0));
        assert_eq!(rec.shipments().len(), 10);
    }

    #[test]
    fn stock_of_unknown_isbn_is_not_found() {
        let (_, services) = recording();
        let shared = SharedCatalog::new(Catalog::in_memory(services));

        assert_eq!(shared.stock("978-9"), Err(DomainError::not_found("978-9")));
        assert!(shared.details("978-9").is_err());
    }

    #[test]
    fn unstocked_items_report_no_stock() {
        let (_, services) = recording();
        let shared: SharedCatalog = Catalog::in_memory(services).into();
        let details =
            ItemDetails::new("978-2", "Title", "Author", 2020, Money::from_cents(1000)).unwrap();
        shared.add(DigitalBook::new(details, "EPUB").unwrap()).unwrap();

        assert_eq!(shared.stock("978-2").unwrap(), None);
        assert_eq!(shared.details("978-2").unwrap().title(), "Title");
        assert_eq!(shared.len().unwrap(), 1);
    }

    #[test]
    fn clones_share_state_and_notifications() {
        let (_, services) = recording();
        let shared = SharedCatalog::new(Catalog::in_memory(services));
        let events = shared.subscribe().unwrap();

        shared.clone().add(stocked(2)).unwrap();
        shared.purchase("978-1", 2, "a@b.c", "addr").unwrap();
        let removed = shared.remove_outdated(2100, 10).unwrap();

        assert_eq!(removed.len(), 1);
        assert!(shared.is_empty().unwrap());
        assert_eq!(events.drain().len(), 3);
        assert_eq!(shared.with_catalog(|c| c.len()).unwrap(), 0);
    }
}
