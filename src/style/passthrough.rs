//! Passthrough prop allow-lists.

use std::collections::HashSet;
use std::fmt;

/// Prop name holding an explicit class name.
pub const CLASS_NAME: &str = "className";

/// Prop name holding a raw inline style object.
pub const STYLE: &str = "style";

/// The set of prop names that are never interpreted as style.
///
/// Every set contains [`CLASS_NAME`] and [`STYLE`]; they cannot be removed.
///
/// # Example
///
/// ```rust
/// use boxstyle::PassthroughSet;
///
/// let set = PassthroughSet::new().with(["href", "target"]);
/// assert!(set.contains("href"));
/// assert!(set.contains("className"));
/// assert!(!set.contains("color"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PassthroughSet {
    names: HashSet<String>,
}

impl PassthroughSet {
    /// Creates a set holding only the universal passthrough props.
    pub fn new() -> Self {
        let mut names = HashSet::with_capacity(2);
        names.insert(CLASS_NAME.to_string());
        names.insert(STYLE.to_string());
        Self { names }
    }

    /// Adds prop names, returning the updated set.
    pub fn with<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`; the universal props are always present.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl fmt::Debug for PassthroughSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.iter().collect();
        names.sort_unstable();
        f.debug_set().entries(names).finish()
    }
}

impl Default for PassthroughSet {
    fn default() -> Self {
        Self::new()
    }
}
