//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure of a catalog operation is reported through this type. All of
/// them are recoverable; nothing in the domain layer aborts the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. zero quantity, blank title).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was malformed (e.g. ISBN parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// No catalog entry exists for the identifier.
    #[error("item not found: {0}")]
    NotFound(String),

    /// The item cannot satisfy the requested quantity: out of stock, or never
    /// for sale.
    #[error("item {isbn} is not available in quantity {requested}")]
    Unavailable { isbn: String, requested: u32 },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(isbn: impl Into<String>) -> Self {
        Self::NotFound(isbn.into())
    }

    pub fn unavailable(isbn: impl Into<String>, requested: u32) -> Self {
        Self::Unavailable {
            isbn: isbn.into(),
            requested,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_message_names_isbn_and_quantity() {
        let err = DomainError::unavailable("978-0134685991", 15);
        assert_eq!(
            err.to_string(),
            "item 978-0134685991 is not available in quantity 15"
        );
    }

    #[test]
    fn not_found_carries_identifier() {
        match DomainError::not_found("978-INVALID") {
            DomainError::NotFound(isbn) => assert_eq!(isbn, "978-INVALID"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
