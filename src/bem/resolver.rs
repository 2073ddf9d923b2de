//! Per-key class resolution.

use std::sync::Arc;

use crate::style::{element_key, modifier_key, NamingError, StyleMap};

use super::modifiers::ModifierSet;
use super::selector::Selector;

/// Composes final class strings for one style-map key.
///
/// A resolver is created by [`ClassNamer`](super::ClassNamer) for every key
/// present in the style map, so its own base class can never be missing: the
/// no-argument [`class`](Resolver::class) accessor is infallible. Element and
/// modifier lookups go back to the shared map and fail with
/// [`NamingError`] when the composed key is absent.
///
/// Resolvers carry no mutable state; they can be cloned and used from
/// multiple threads freely.
///
/// # Example
///
/// ```rust
/// use blockmod::{bem, ModifierSet, StyleMap};
///
/// let styles = StyleMap::new()
///     .add("btn", "btn_abc")
///     .add("btn--primary", "btn_primary_xyz")
///     .add("btn__icon", "btn_icon_123");
/// let namer = bem(styles);
/// let btn = namer.get("btn").unwrap();
///
/// assert_eq!(btn.class(), "btn_abc");
/// assert_eq!(
///     btn.with(&ModifierSet::new().on("primary")).unwrap(),
///     "btn_abc btn_primary_xyz"
/// );
/// assert_eq!(btn.element("icon").unwrap(), "btn_icon_123");
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    key: String,
    class: String,
    styles: Arc<StyleMap>,
}

impl Resolver {
    /// Creates a resolver for a key known to exist in the map.
    pub(crate) fn new(key: String, class: String, styles: Arc<StyleMap>) -> Self {
        Self { key, class, styles }
    }

    /// The style-map key this resolver is bound to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the base class string, verbatim.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Returns the base class followed by the classes of all active
    /// modifiers, space-separated, in modifier-set order.
    ///
    /// # Errors
    ///
    /// Returns [`NamingError::MissingModifierClass`] if an active modifier's
    /// composed `key--modifier` entry is absent from the map. Inactive
    /// modifiers are never looked up.
    pub fn with(&self, modifiers: &ModifierSet) -> Result<String, NamingError> {
        format_modifiers(&self.styles, &self.key, modifiers)
    }

    /// Returns the class string for an element of this block.
    ///
    /// # Errors
    ///
    /// Returns [`NamingError::MissingStyleKey`] if the composed
    /// `key__element` entry is absent from the map.
    pub fn element(&self, name: &str) -> Result<String, NamingError> {
        self.element_with(name, &ModifierSet::new())
    }

    /// Returns the class string for an element of this block, followed by the
    /// classes of all active modifiers.
    ///
    /// # Errors
    ///
    /// Returns [`NamingError::MissingStyleKey`] if the composed element key
    /// is absent, or [`NamingError::MissingModifierClass`] if an active
    /// modifier's class is.
    pub fn element_with(&self, name: &str, modifiers: &ModifierSet) -> Result<String, NamingError> {
        format_modifiers(&self.styles, &element_key(&self.key, name), modifiers)
    }

    /// Resolves a [`Selector`], dispatching to the mode it describes.
    pub fn resolve(&self, selector: Selector<'_>) -> Result<String, NamingError> {
        match selector {
            Selector::Plain => Ok(self.class.clone()),
            Selector::WithModifiers(modifiers) => self.with(modifiers),
            Selector::Element(name, None) => self.element(name),
            Selector::Element(name, Some(modifiers)) => self.element_with(name, modifiers),
        }
    }
}

/// Formats the class string for `base_key` with the active modifiers applied.
fn format_modifiers(
    styles: &StyleMap,
    base_key: &str,
    modifiers: &ModifierSet,
) -> Result<String, NamingError> {
    let base = styles
        .get(base_key)
        .ok_or_else(|| NamingError::MissingStyleKey {
            key: base_key.to_string(),
        })?;

    let mut classes = base.to_string();
    for (name, active) in modifiers.iter() {
        if !active {
            continue;
        }
        let class = styles.get(&modifier_key(base_key, name)).ok_or_else(|| {
            NamingError::MissingModifierClass {
                base: base_key.to_string(),
                modifier: name.to_string(),
            }
        })?;
        classes.push(' ');
        classes.push_str(class);
    }

    Ok(classes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bem::ClassNamer;

    fn fixture() -> ClassNamer {
        ClassNamer::new(
            StyleMap::new()
                .add("btn", "btn_abc")
                .add("btn--primary", "btn_primary_xyz")
                .add("btn--large", "btn_large_456")
                .add("btn__icon", "btn_icon_123")
                .add("btn__icon--small", "btn_icon_small_789"),
        )
    }

    // =========================================================================
    // No-argument mode
    // =========================================================================

    #[test]
    fn test_class_returns_base_verbatim() {
        let namer = fixture();
        assert_eq!(namer.get("btn").unwrap().class(), "btn_abc");
    }

    #[test]
    fn test_every_key_gets_a_resolver() {
        let namer = fixture();
        assert_eq!(namer.get("btn--primary").unwrap().class(), "btn_primary_xyz");
        assert_eq!(namer.get("btn__icon").unwrap().class(), "btn_icon_123");
    }

    // =========================================================================
    // Modifiers mode
    // =========================================================================

    #[test]
    fn test_with_single_modifier() {
        let namer = fixture();
        let out = namer
            .get("btn")
            .unwrap()
            .with(&ModifierSet::new().on("primary"))
            .unwrap();
        assert_eq!(out, "btn_abc btn_primary_xyz");
    }

    #[test]
    fn test_with_modifiers_in_insertion_order() {
        let namer = fixture();
        let out = namer
            .get("btn")
            .unwrap()
            .with(&ModifierSet::new().on("large").on("primary"))
            .unwrap();
        assert_eq!(out, "btn_abc btn_large_456 btn_primary_xyz");
    }

    #[test]
    fn test_with_inactive_modifier_skipped() {
        let namer = fixture();
        let out = namer
            .get("btn")
            .unwrap()
            .with(&ModifierSet::new().off("primary"))
            .unwrap();
        assert_eq!(out, "btn_abc");
    }

    #[test]
    fn test_with_inactive_modifier_never_looked_up() {
        // "btn--ghost" is absent from the map; an off flag must not touch it.
        let namer = fixture();
        let out = namer
            .get("btn")
            .unwrap()
            .with(&ModifierSet::new().off("ghost"))
            .unwrap();
        assert_eq!(out, "btn_abc");
    }

    #[test]
    fn test_with_missing_modifier_class_fails() {
        let namer = fixture();
        let err = namer
            .get("btn")
            .unwrap()
            .with(&ModifierSet::new().on("ghost"))
            .unwrap_err();
        assert_eq!(
            err,
            NamingError::MissingModifierClass {
                base: "btn".to_string(),
                modifier: "ghost".to_string(),
            }
        );
    }

    #[test]
    fn test_with_empty_set_returns_base() {
        let namer = fixture();
        let out = namer.get("btn").unwrap().with(&ModifierSet::new()).unwrap();
        assert_eq!(out, "btn_abc");
    }

    // =========================================================================
    // Element mode
    // =========================================================================

    #[test]
    fn test_element_resolves_composed_key() {
        let namer = fixture();
        let out = namer.get("btn").unwrap().element("icon").unwrap();
        assert_eq!(out, "btn_icon_123");
    }

    #[test]
    fn test_element_with_modifiers() {
        let namer = fixture();
        let out = namer
            .get("btn")
            .unwrap()
            .element_with("icon", &ModifierSet::new().on("small"))
            .unwrap();
        assert_eq!(out, "btn_icon_123 btn_icon_small_789");
    }

    #[test]
    fn test_element_missing_fails_with_composed_key() {
        let namer = fixture();
        let err = namer.get("btn").unwrap().element("missing").unwrap_err();
        assert_eq!(
            err,
            NamingError::MissingStyleKey {
                key: "btn__missing".to_string(),
            }
        );
    }

    // =========================================================================
    // Selector dispatch
    // =========================================================================

    #[test]
    fn test_resolve_plain() {
        let namer = fixture();
        let out = namer.get("btn").unwrap().resolve(Selector::Plain).unwrap();
        assert_eq!(out, "btn_abc");
    }

    #[test]
    fn test_resolve_from_conversions() {
        let namer = fixture();
        let btn = namer.get("btn").unwrap();
        let modifiers = ModifierSet::new().on("primary");

        assert_eq!(btn.resolve("icon".into()).unwrap(), "btn_icon_123");
        assert_eq!(
            btn.resolve((&modifiers).into()).unwrap(),
            "btn_abc btn_primary_xyz"
        );
    }

    #[test]
    fn test_resolve_element_with_modifiers() {
        let namer = fixture();
        let modifiers = ModifierSet::new().on("small");
        let out = namer
            .get("btn")
            .unwrap()
            .resolve(Selector::Element("icon", Some(&modifiers)))
            .unwrap();
        assert_eq!(out, "btn_icon_123 btn_icon_small_789");
    }

    #[test]
    fn test_resolution_is_pure() {
        let namer = fixture();
        let btn = namer.get("btn").unwrap();
        let modifiers = ModifierSet::new().on("primary").off("large");

        assert_eq!(btn.with(&modifiers).unwrap(), btn.with(&modifiers).unwrap());
        assert_eq!(btn.class(), btn.class());
    }
}
