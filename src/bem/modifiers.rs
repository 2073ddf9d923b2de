//! Ordered modifier flags for a resolution call.

/// An insertion-ordered set of modifier flags.
///
/// Each entry pairs a modifier name with an on/off flag. During formatting,
/// only entries whose flag is on contribute a class; off entries are skipped
/// without any lookup, so an absent class for an inactive modifier never
/// causes a failure. Active modifiers are applied in the order they were
/// first inserted.
///
/// # Example
///
/// ```rust
/// use blockmod::ModifierSet;
///
/// let modifiers = ModifierSet::new()
///     .on("primary")
///     .set("disabled", false)
///     .on("large");
///
/// let active: Vec<&str> = modifiers
///     .iter()
///     .filter(|(_, on)| *on)
///     .map(|(name, _)| name)
///     .collect();
/// assert_eq!(active, vec!["primary", "large"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifierSet {
    entries: Vec<(String, bool)>,
}

impl ModifierSet {
    /// Creates an empty modifier set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a modifier flag, returning an updated set for chaining.
    ///
    /// Re-setting an existing name updates its flag in place; the modifier
    /// keeps its original position in the application order.
    pub fn set(mut self, name: impl Into<String>, active: bool) -> Self {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = active,
            None => self.entries.push((name, active)),
        }
        self
    }

    /// Marks a modifier as active. Shorthand for `set(name, true)`.
    pub fn on(self, name: impl Into<String>) -> Self {
        self.set(name, true)
    }

    /// Marks a modifier as inactive. Shorthand for `set(name, false)`.
    pub fn off(self, name: impl Into<String>) -> Self {
        self.set(name, false)
    }

    /// Returns an iterator over `(name, flag)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(name, on)| (name.as_str(), *on))
    }

    /// Returns the number of entries, active or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |set, (name, active)| set.set(name, active))
    }
}
