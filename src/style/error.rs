//! Class-name resolution errors.

use super::map::modifier_key;

/// Error returned when class-name resolution fails.
///
/// Both variants indicate a mismatch between the caller's arguments and the
/// style map: a typo'd block or element name, or a manifest that is missing
/// an expected entry. There is no recovery path; the error carries the
/// offending key so the caller can report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingError {
    /// The base lookup key (a block, or a composed `block__element`) is not
    /// present in the style map.
    MissingStyleKey { key: String },
    /// An active modifier's composed `base--modifier` key is not present in
    /// the style map.
    MissingModifierClass { base: String, modifier: String },
}

impl std::fmt::Display for NamingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NamingError::MissingStyleKey { key } => {
                write!(f, "Missing \"{}\" in styles!", key)
            }
            NamingError::MissingModifierClass { base, modifier } => {
                write!(
                    f,
                    "Missing modifier class \"{}\" in styles!",
                    modifier_key(base, modifier)
                )
            }
        }
    }
}

impl std::error::Error for NamingError {}
