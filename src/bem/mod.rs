//! Class resolution for blocks, elements, and modifiers.
//!
//! This module provides:
//!
//! - [`ClassNamer`]: A registry of one [`Resolver`] per style-map key
//! - [`Resolver`]: Composes a final class string for its key
//! - [`ModifierSet`]: Ordered set of modifier flags to apply
//! - [`Selector`]: Tagged description of what a resolution call asks for
//!
//! The namer wraps a [`StyleMap`](crate::StyleMap) and provides the
//! higher-level API callers use instead of concatenating `__`/`--` keys by
//! hand.

mod modifiers;
mod namer;
mod resolver;
mod selector;

pub use modifiers::ModifierSet;
pub use namer::ClassNamer;
pub use resolver::Resolver;
pub use selector::Selector;
