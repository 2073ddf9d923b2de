//! Selector for a single resolution call.

use super::modifiers::ModifierSet;

/// What a resolution call is asking for.
///
/// This enum replaces shape-based dispatch on call arguments: a caller either
/// wants the block class as-is, the block with modifiers, or one of the
/// block's elements (optionally with modifiers). Handling is exhaustive at
/// the call site in [`Resolver::resolve`](super::Resolver::resolve).
#[derive(Debug, Clone, Copy)]
pub enum Selector<'a> {
    /// The block's base class, verbatim.
    Plain,
    /// The block's base class plus its active modifier classes.
    WithModifiers(&'a ModifierSet),
    /// An element of the block, with optional modifiers.
    Element(&'a str, Option<&'a ModifierSet>),
}

impl<'a> From<&'a ModifierSet> for Selector<'a> {
    fn from(modifiers: &'a ModifierSet) -> Self {
        Selector::WithModifiers(modifiers)
    }
}

impl<'a> From<&'a str> for Selector<'a> {
    fn from(element: &'a str) -> Self {
        Selector::Element(element, None)
    }
}
