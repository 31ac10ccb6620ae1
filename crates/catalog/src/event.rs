use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bookstore_core::{Isbn, Money};
use bookstore_events::Event;

use crate::fulfillment::Dispatch;

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub isbn: Isbn,
    pub title: String,
    pub kind: String,
    /// An entry with the same ISBN existed and was overwritten.
    pub replaced: bool,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved (outdated-item pruning).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub isbn: Isbn,
    pub title: String,
    pub year_published: i32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: PurchaseCompleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseCompleted {
    pub purchase_id: Uuid,
    pub isbn: Isbn,
    pub quantity: u32,
    pub total: Money,
    pub dispatch: Dispatch,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogEvent {
    ItemAdded(ItemAdded),
    ItemRemoved(ItemRemoved),
    PurchaseCompleted(PurchaseCompleted),
}

impl CatalogEvent {
    pub fn isbn(&self) -> &Isbn {
        match self {
            CatalogEvent::ItemAdded(e) => &e.isbn,
            CatalogEvent::ItemRemoved(e) => &e.isbn,
            CatalogEvent::PurchaseCompleted(e) => &e.isbn,
        }
    }
}

impl Event for CatalogEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CatalogEvent::ItemAdded(_) => "catalog.item.added",
            CatalogEvent::ItemRemoved(_) => "catalog.item.removed",
            CatalogEvent::PurchaseCompleted(_) => "catalog.purchase.completed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CatalogEvent::ItemAdded(e) => e.occurred_at,
            CatalogEvent::ItemRemoved(e) => e.occurred_at,
            CatalogEvent::PurchaseCompleted(e) => e.occurred_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_completed_serializes_with_cents_and_dispatch() {
        let event = CatalogEvent::PurchaseCompleted(PurchaseCompleted {
            purchase_id: Uuid::now_v7(),
            isbn: Isbn::new("978-0134685991").unwrap(),
            quantity: 2,
            total: Money::from_cents(9198),
            dispatch: Dispatch::Shipped {
                quantity: 2,
                address: "123 Main St".to_string(),
            },
            occurred_at: Utc::now(),
        });

        assert_eq!(event.event_type(), "catalog.purchase.completed");
        assert_eq!(event.version(), 1);

        let json = serde_json::to_value(&event).unwrap();
        let body = &json["PurchaseCompleted"];
        assert_eq!(body["isbn"], "978-0134685991");
        assert_eq!(body["total"], 9198);
        assert_eq!(body["dispatch"]["method"], "shipped");

        let back: CatalogEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
