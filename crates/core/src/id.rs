//! Strongly-typed identifiers used across the domain.

use core::borrow::Borrow;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog item (International Standard Book Number).
///
/// Accepts ASCII digits, hyphens and the `X` check character. Hyphen placement
/// and check digits are not verified; the identifier only has to be stable and
/// unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isbn(String);

impl Isbn {
    /// Parse and normalize (trim) an identifier.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = raw.as_ref().trim();

        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("Isbn: cannot be empty"));
        }

        if let Some(bad) = trimmed
            .chars()
            .find(|&c| !(c.is_ascii_digit() || matches!(c, '-' | 'X' | 'x')))
        {
            return Err(DomainError::invalid_id(format!(
                "Isbn: unexpected character {bad:?} in {trimmed:?}"
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Isbn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

// Lets `HashMap<Isbn, _>` be queried with a plain `&str`.
impl Borrow<str> for Isbn {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Isbn {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Isbn {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Isbn> for String {
    fn from(value: Isbn) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hyphenated_isbn_and_trims() {
        let isbn = Isbn::new("  978-0134685991 ").unwrap();
        assert_eq!(isbn.as_str(), "978-0134685991");
    }

    #[test]
    fn accepts_check_character_x() {
        assert!(Isbn::new("0-8044-2957-X").is_ok());
    }

    #[test]
    fn rejects_empty_identifier() {
        match Isbn::new("   ").unwrap_err() {
            DomainError::InvalidId(msg) => assert!(msg.contains("empty")),
            other => panic!("expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn rejects_letters() {
        assert!(matches!(
            "978-INVALID".parse::<Isbn>(),
            Err(DomainError::InvalidId(_))
        ));
    }

    #[test]
    fn deserialization_validates() {
        let ok: Isbn = serde_json::from_str("\"978-0135166307\"").unwrap();
        assert_eq!(ok.as_str(), "978-0135166307");
        assert!(serde_json::from_str::<Isbn>("\"not an isbn\"").is_err());
    }
}
