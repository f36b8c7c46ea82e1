use thiserror::Error;

/// Errors returned by the strict parsing surfaces of [`crate::IdentityCard`].
///
/// Malformed input and a checksum mismatch are reported the same way. The
/// message never contains the input; it is carried in `value` for callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// When a value is not a valid HKID.
    #[error("input is not a valid HKID")]
    InvalidIdentityCard {
        /// Offending value.
        value: String,
    },
}
