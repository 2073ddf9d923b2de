//! The style map: logical style keys mapped to generated class strings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Separator between a block and one of its elements in a composed key.
pub const ELEMENT_SEPARATOR: &str = "__";

/// Separator between a block or element and one of its modifiers.
pub const MODIFIER_SEPARATOR: &str = "--";

/// Composes the lookup key for an element of a block.
///
/// # Example
///
/// ```rust
/// use blockmod::element_key;
///
/// assert_eq!(element_key("btn", "icon"), "btn__icon");
/// ```
pub fn element_key(base: &str, element: &str) -> String {
    format!("{}{}{}", base, ELEMENT_SEPARATOR, element)
}

/// Composes the lookup key for a modifier of a block or element.
///
/// # Example
///
/// ```rust
/// use blockmod::modifier_key;
///
/// assert_eq!(modifier_key("btn", "primary"), "btn--primary");
/// assert_eq!(modifier_key("btn__icon", "small"), "btn__icon--small");
/// ```
pub fn modifier_key(base: &str, modifier: &str) -> String {
    format!("{}{}{}", base, MODIFIER_SEPARATOR, modifier)
}

/// A mapping from logical style keys to generated class strings.
///
/// This is the manifest a CSS-Modules style build step produces: each block,
/// element, and modifier key maps to the (typically hashed) class string that
/// was emitted for it. The map is read-only once handed to a
/// [`ClassNamer`](crate::ClassNamer); lookups are always by exact key, so
/// entry order never matters.
///
/// The serde representation is transparent, so a JSON manifest like
/// `{"btn": "btn_abc", "btn--primary": "btn_primary_xyz"}` deserializes
/// directly into a `StyleMap`.
///
/// # Example
///
/// ```rust
/// use blockmod::StyleMap;
///
/// let styles = StyleMap::new()
///     .add("btn", "btn_abc")
///     .add("btn--primary", "btn_primary_xyz")
///     .add("btn__icon", "btn_icon_123");
///
/// assert_eq!(styles.get("btn"), Some("btn_abc"));
/// assert!(styles.contains("btn__icon"));
/// assert_eq!(styles.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    classes: HashMap<String, String>,
}

impl StyleMap {
    /// Creates an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a key/class pair, returning an updated map for chaining.
    ///
    /// Adding an existing key replaces its class string.
    pub fn add(mut self, key: impl Into<String>, class: impl Into<String>) -> Self {
        self.classes.insert(key.into(), class.into());
        self
    }

    /// Looks up the class string for an exact key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.classes.get(key).map(|s| s.as_str())
    }

    /// Returns true if the exact key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.classes.contains_key(key)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Returns an iterator over all keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(|s| s.as_str())
    }

    /// Returns an iterator over all key/class pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.classes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            classes: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
