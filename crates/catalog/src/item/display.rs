use crate::fulfillment::{Dispatch, Fulfillment};

use super::{Item, ItemDetails};

/// Showcase copy kept for display; never for sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBook {
    details: ItemDetails,
}

impl DisplayBook {
    pub fn new(details: ItemDetails) -> Self {
        Self { details }
    }
}

impl Item for DisplayBook {
    fn details(&self) -> &ItemDetails {
        &self.details
    }

    fn kind(&self) -> &'static str {
        "display"
    }

    fn is_available(&self, _quantity: u32) -> bool {
        false
    }

    // Unreachable through the catalog: availability is always false.
    fn fulfill(
        &self,
        _quantity: u32,
        _email: &str,
        _address: &str,
        _services: &Fulfillment,
    ) -> Dispatch {
        Dispatch::Withheld
    }
}

impl core::fmt::Display for DisplayBook {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (Showcase - Not for Sale)", self.details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fulfillment::fakes::recording;
    use crate::item::test_details;

    #[test]
    fn never_available_for_any_quantity() {
        let book = DisplayBook::new(test_details("978-3", 1859, 3995));
        for qty in [0, 1, 2, u32::MAX] {
            assert!(!book.is_available(qty));
        }
    }

    #[test]
    fn reduce_inventory_is_a_no_op() {
        let mut book = DisplayBook::new(test_details("978-3", 1859, 3995));
        let before = book.clone();
        book.reduce_inventory(1);
        assert_eq!(book, before);
    }

    #[test]
    fn fulfill_dispatches_nothing() {
        let (rec, services) = recording();
        let book = DisplayBook::new(test_details("978-3", 1859, 3995));

        assert_eq!(book.fulfill(1, "a@b.c", "addr", &services), Dispatch::Withheld);
        assert!(rec.shipments().is_empty());
        assert!(rec.deliveries().is_empty());
    }

    #[test]
    fn display_marks_not_for_sale() {
        let book = DisplayBook::new(test_details("978-3", 1859, 3995));
        assert!(book.to_string().ends_with("(Showcase - Not for Sale)"));
    }
}
