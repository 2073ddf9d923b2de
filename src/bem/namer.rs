//! The namer registry built from a style map.

use std::collections::HashMap;
use std::sync::Arc;

use crate::style::StyleMap;

use super::resolver::Resolver;

/// A registry of one [`Resolver`] per style-map key.
///
/// Construction is infallible: the namer walks the map once and binds a
/// resolver to every key present, sharing one read-only copy of the map
/// between them. An empty map yields an empty namer. The map is never
/// mutated afterwards, so the namer and its resolvers are safe to share
/// across threads without coordination.
///
/// # Example
///
/// ```rust
/// use blockmod::{ClassNamer, StyleMap};
///
/// let namer = ClassNamer::new(
///     StyleMap::new()
///         .add("btn", "btn_abc")
///         .add("card", "card_def"),
/// );
///
/// assert_eq!(namer.len(), 2);
/// assert_eq!(namer.get("card").unwrap().class(), "card_def");
/// assert!(namer.get("missing").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ClassNamer {
    styles: Arc<StyleMap>,
    resolvers: HashMap<String, Resolver>,
}

impl ClassNamer {
    /// Builds a namer from a style map, creating one resolver per key.
    pub fn new(styles: StyleMap) -> Self {
        let styles = Arc::new(styles);
        let resolvers = styles
            .iter()
            .map(|(key, class)| {
                let resolver =
                    Resolver::new(key.to_string(), class.to_string(), Arc::clone(&styles));
                (key.to_string(), resolver)
            })
            .collect();

        Self { styles, resolvers }
    }

    /// Looks up the resolver for a style-map key.
    pub fn get(&self, key: &str) -> Option<&Resolver> {
        self.resolvers.get(key)
    }

    /// Returns an iterator over all keys that have a resolver.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resolvers.keys().map(|s| s.as_str())
    }

    /// Returns the number of resolvers.
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    /// Returns true if the namer holds no resolvers.
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Returns the underlying style map.
    pub fn styles(&self) -> &StyleMap {
        &self.styles
    }
}

impl From<StyleMap> for ClassNamer {
    fn from(styles: StyleMap) -> Self {
        Self::new(styles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namer_one_resolver_per_key() {
        let namer = ClassNamer::new(
            StyleMap::new()
                .add("btn", "btn_abc")
                .add("btn--primary", "btn_primary_xyz")
                .add("btn__icon", "btn_icon_123"),
        );

        assert_eq!(namer.len(), 3);
        for key in ["btn", "btn--primary", "btn__icon"] {
            assert!(namer.get(key).is_some(), "no resolver for {}", key);
        }
    }

    #[test]
    fn test_namer_empty_map() {
        let namer = ClassNamer::new(StyleMap::new());
        assert!(namer.is_empty());
        assert!(namer.get("anything").is_none());
    }

    #[test]
    fn test_namer_unknown_key() {
        let namer = ClassNamer::new(StyleMap::new().add("btn", "btn_abc"));
        assert!(namer.get("card").is_none());
    }

    #[test]
    fn test_namer_names_iterator() {
        let namer = ClassNamer::new(StyleMap::new().add("a", "x").add("b", "y"));
        let names: Vec<&str> = namer.names().collect();
        assert!(names.contains(&"a"));
        assert!(names.contains(&"b"));
    }

    #[test]
    fn test_namer_exposes_styles() {
        let namer = ClassNamer::new(StyleMap::new().add("btn", "btn_abc"));
        assert_eq!(namer.styles().get("btn"), Some("btn_abc"));
    }

    #[test]
    fn test_namer_shared_across_threads() {
        let namer = ClassNamer::new(StyleMap::new().add("btn", "btn_abc"));
        let clone = namer.clone();
        let handle = std::thread::spawn(move || clone.get("btn").unwrap().class().to_string());
        assert_eq!(handle.join().unwrap(), "btn_abc");
        assert_eq!(namer.get("btn").unwrap().class(), "btn_abc");
    }
}
