use chrono::{DateTime, Utc};

/// A domain-agnostic notification.
///
/// Events are immutable facts describing something that already happened in a
/// catalog operation. They are versioned so consumers can tell schema changes
/// apart.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "catalog.item.added").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
