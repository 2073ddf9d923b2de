//! BEM class-name resolution over CSS Modules style maps.
//!
//! A CSS-Modules build step hands application code a manifest mapping logical
//! style keys to generated class strings, keyed by the Block-Element-Modifier
//! convention: `"btn"`, `"btn__icon"`, `"btn--primary"`. This crate resolves
//! composed class strings from such a manifest so callers never concatenate
//! `__`/`--` separators by hand.
//!
//! - [`StyleMap`]: The manifest, deserializable straight from JSON
//! - [`ClassNamer`]: One [`Resolver`] per manifest key
//! - [`ModifierSet`]: Ordered on/off flags applied during resolution
//! - [`Selector`]: Tagged description of a single resolution call
//!
//! # Example
//!
//! ```rust
//! use blockmod::{bem, ModifierSet, StyleMap};
//!
//! let styles = StyleMap::new()
//!     .add("btn", "btn_abc")
//!     .add("btn--primary", "btn_primary_xyz")
//!     .add("btn__icon", "btn_icon_123");
//!
//! let namer = bem(styles);
//! let btn = namer.get("btn").unwrap();
//!
//! assert_eq!(btn.class(), "btn_abc");
//! assert_eq!(
//!     btn.with(&ModifierSet::new().on("primary")).unwrap(),
//!     "btn_abc btn_primary_xyz"
//! );
//! assert_eq!(btn.element("icon").unwrap(), "btn_icon_123");
//! ```
//!
//! Resolution is a pure computation over in-memory strings: the map is never
//! mutated after construction, and every failure is a typo-class programmer
//! error surfaced as a [`NamingError`].
//!
//! With the `minijinja` feature enabled, [`render::register_class_filters`]
//! exposes the same resolution as a template filter.

mod bem;
mod style;

#[cfg(feature = "minijinja")]
pub mod render;

pub use bem::{ClassNamer, ModifierSet, Resolver, Selector};
pub use style::{
    element_key, modifier_key, NamingError, StyleMap, ELEMENT_SEPARATOR, MODIFIER_SEPARATOR,
};

/// Builds a [`ClassNamer`] from a style map.
///
/// Convenience wrapper over [`ClassNamer::new`], named after the convention
/// it resolves.
///
/// # Example
///
/// ```rust
/// use blockmod::{bem, StyleMap};
///
/// let namer = bem(StyleMap::new().add("btn", "btn_abc"));
/// assert_eq!(namer.get("btn").unwrap().class(), "btn_abc");
/// ```
pub fn bem(styles: StyleMap) -> ClassNamer {
    ClassNamer::new(styles)
}
