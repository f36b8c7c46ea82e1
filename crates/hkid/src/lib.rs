//! Validation and canonical formatting of Hong Kong Identity Card (HKID) numbers.
//!
//! An HKID is a one- or two-letter prefix, six digits and a check character
//! (`0`-`9`, or `A` for ten), conventionally written `A123456(3)`. Input is
//! matched leniently (any case, optional parentheses, surrounding text) and
//! accepted only when the weighted mod-11 checksum verifies.
//!
#![deny(missing_docs)]

/// Weighted mod-11 checksum over an HKID prefix and digits.
///
/// Components are the prefix letters (`A` = 1 .. `Z` = 26) followed by the six
/// digits. The last component has weight 2 and each earlier one a weight one
/// higher. The check value is `(11 - total % 11) % 11`, written as `A` when it
/// is 10.
pub mod checksum;
/// The `IdentityCard` value object.
pub mod identity_card;
/// Structural extraction of HKID components from free-form input.
///
/// The accepted shape is one or two letters, exactly six decimal digits, then a
/// check character (`0`-`9` or `A`) that may be wrapped in parentheses. Either
/// parenthesis may be missing on its own. The shape is searched for as a
/// substring, so surrounding text is tolerated and the leftmost occurrence wins.
pub mod pattern;
/// Errors returned by strict parsing.
pub mod validation;

pub use identity_card::{is_valid_hkid, IdentityCard};
pub use validation::ValidationError;
