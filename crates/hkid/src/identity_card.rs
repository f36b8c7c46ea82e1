use std::str::FromStr;

use log::trace;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::checksum;
use crate::pattern::{self, Components};
use crate::validation::ValidationError;

/// A Hong Kong Identity Card number, parsed and checked on construction.
///
/// Construction never fails: input that is absent, does not look like an HKID,
/// or carries the wrong check character produces a card whose
/// [`is_valid`](Self::is_valid) is `false`. Formatted output is only available
/// for valid cards.
///
/// Equality and hashing include the raw input, so `A1234563` and `A123456(3)`
/// are different values even though both format as `A123456(3)`. Compare
/// [`as_string`](Self::as_string) to test for the same card number.
///
/// ```rust
/// use hkid::IdentityCard;
///
/// let card = IdentityCard::from("a123456(3)");
/// assert!(card.is_valid());
/// assert_eq!(card.as_string().as_deref(), Some("A123456(3)"));
/// assert_eq!(card.as_string_no_checksum().as_deref(), Some("A123456"));
///
/// assert!(!IdentityCard::from("A123456(4)").is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityCard {
    raw_input: Option<String>,
    components: Option<Components>,
    valid: bool,
}

impl IdentityCard {
    /// Parses and validates `raw`. `None` yields an invalid card.
    pub fn new(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            trace!("rejected HKID candidate: no input");
            return Self {
                raw_input: None,
                components: None,
                valid: false,
            };
        };

        let components = pattern::extract(raw);
        let valid = match &components {
            Some(parts) => {
                let expected = checksum::check_character(&parts.prefix, &parts.digits);
                let matches = expected == Some(parts.check_character);
                if !matches {
                    trace!("rejected HKID candidate ({} chars): checksum mismatch", raw.len());
                }
                matches
            }
            None => {
                trace!("rejected HKID candidate ({} chars): no structural match", raw.len());
                false
            }
        };

        Self {
            raw_input: Some(raw.to_string()),
            components,
            valid,
        }
    }

    /// Parses `raw`, rejecting anything that is not a valid HKID.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let card = Self::new(Some(raw));
        if !card.valid {
            return Err(ValidationError::InvalidIdentityCard {
                value: raw.to_string(),
            });
        }
        Ok(card)
    }

    /// Returns true when the input matched and its check character verified.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Canonical form, e.g. `A123456(3)`. `None` for invalid cards.
    pub fn as_string(&self) -> Option<String> {
        let parts = self.valid_components()?;
        Some(format!(
            "{}{}({})",
            parts.prefix, parts.digits, parts.check_character
        ))
    }

    /// Canonical form without the check character, e.g. `A123456`. `None` for invalid cards.
    pub fn as_string_no_checksum(&self) -> Option<String> {
        let parts = self.valid_components()?;
        Some(format!("{}{}", parts.prefix, parts.digits))
    }

    /// The string the card was constructed from.
    pub fn raw_input(&self) -> Option<&str> {
        self.raw_input.as_deref()
    }

    /// Uppercase prefix, present whenever the input matched structurally.
    pub fn prefix(&self) -> Option<&str> {
        self.components.as_ref().map(|c| c.prefix.as_str())
    }

    /// Six-digit body, present whenever the input matched structurally.
    pub fn digits(&self) -> Option<&str> {
        self.components.as_ref().map(|c| c.digits.as_str())
    }

    /// Uppercase check character as written, present whenever the input matched structurally.
    pub fn check_character(&self) -> Option<char> {
        self.components.as_ref().map(|c| c.check_character)
    }

    fn valid_components(&self) -> Option<&Components> {
        if self.valid {
            self.components.as_ref()
        } else {
            None
        }
    }
}

/// Returns true if `raw` contains a valid HKID.
pub fn is_valid_hkid(raw: &str) -> bool {
    IdentityCard::new(Some(raw)).is_valid()
}

impl From<Option<&str>> for IdentityCard {
    fn from(raw: Option<&str>) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for IdentityCard {
    fn from(raw: &str) -> Self {
        Self::new(Some(raw))
    }
}

impl From<String> for IdentityCard {
    fn from(raw: String) -> Self {
        Self::new(Some(&raw))
    }
}

impl FromStr for IdentityCard {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for IdentityCard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for IdentityCard {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Self::new(raw.as_deref()))
    }
}
