mod config;

use anyhow::Result;

use bookstore_catalog::{
    AudioBook, Catalog, DigitalBook, DisplayBook, Fulfillment, ItemDetails, PhysicalBook,
};
use bookstore_core::Money;
use bookstore_events::Event;

use crate::config::DemoConfig;

const EMAIL: &str = "customer@email.com";
const ADDRESS: &str = "123 Main St, City, State";

fn main() -> Result<()> {
    let log_format = config::log_format(&config::env_lookup);
    bookstore_observability::init(log_format.as_ref().copied().unwrap_or_default());
    if let Err(raw) = &log_format {
        tracing::warn!(key = config::LOG_FORMAT_VAR, value = %raw, "invalid config value; using default");
    }

    let config = DemoConfig::from_env(log_format.unwrap_or_default());
    tracing::info!(?config, "starting bookstore demo");

    let mut catalog = Catalog::in_memory(Fulfillment::logging());
    let events = catalog.subscribe();

    seed(&mut catalog)?;
    catalog.log_inventory();

    let scenarios: [(&str, &str, u32); 5] = [
        ("buy paper book", "978-0134685991", 2),
        ("buy ebook", "978-0135166307", 1),
        ("buy showcase book", "978-0596009205", 1),
        ("insufficient stock", "978-0134685991", 15),
        ("unknown isbn", "978-INVALID", 1),
    ];

    for (label, isbn, quantity) in scenarios {
        match catalog.purchase(isbn, quantity, EMAIL, ADDRESS) {
            Ok(total) => tracing::info!(scenario = label, %total, "paid"),
            Err(err) => tracing::warn!(scenario = label, error = %err, "purchase failed"),
        }
    }

    let removed = catalog.remove_outdated(config.current_year, config.max_age);
    tracing::info!(
        count = removed.len(),
        current_year = config.current_year,
        max_age = config.max_age,
        "removed outdated books"
    );
    catalog.log_inventory();

    for event in events.drain() {
        let payload = serde_json::to_string(&event)?;
        tracing::debug!(event_type = event.event_type(), %payload, "catalog event");
    }

    tracing::info!("all scenarios completed");
    Ok(())
}

fn seed(catalog: &mut Catalog) -> Result<()> {
    catalog.add(PhysicalBook::new(
        ItemDetails::new(
            "978-0134685991",
            "Programming for Engineers",
            "John Smith",
            2020,
            Money::from_cents(4599),
        )?,
        10,
    ));
    catalog.add(DigitalBook::new(
        ItemDetails::new(
            "978-0135166307",
            "The Seven Habits of Highly Effective People",
            "Stephen Covey",
            1989,
            Money::from_cents(2999),
        )?,
        "PDF",
    )?);
    catalog.add(DisplayBook::new(ItemDetails::new(
        "978-0596009205",
        "A Tale of Two Cities",
        "Charles Dickens",
        1859,
        Money::from_cents(3995),
    )?));
    catalog.add(AudioBook::new(
        ItemDetails::new(
            "978-0743269513",
            "The Seven Habits of Highly Effective People (Audio)",
            "Stephen Covey",
            2004,
            Money::from_cents(1999),
        )?,
        "Stephen Covey",
        825,
    )?);
    Ok(())
}
