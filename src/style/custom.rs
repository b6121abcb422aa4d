//! Custom prop transforms.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::StyleObject;
use crate::value::Value;

/// A transform expanding one prop value into zero or more style entries.
///
/// Returning `None` contributes nothing. A transform that panics is not
/// caught; the panic propagates to the caller of `render`.
pub type Transform = Arc<dyn Fn(&Value) -> Option<StyleObject> + Send + Sync>;

/// A table of named custom prop transforms.
///
/// When a component receives a prop whose name has an entry here, the prop
/// is never used as a literal style key; only the transform's output
/// reaches the style object.
///
/// Components hold the table behind an `Arc`, so a child component built
/// with [`StyledComponent::make_component`](crate::StyledComponent::make_component)
/// shares its parent's table rather than copying it.
///
/// # Example
///
/// ```rust
/// use boxstyle::{CustomProps, StyleObject, Value};
///
/// let custom = CustomProps::new()
///     .add("paddingH", |v: &Value| {
///         Some(StyleObject::new()
///             .set("paddingLeft", v.clone())
///             .set("paddingRight", v.clone()))
///     });
///
/// let out = custom.get("paddingH").unwrap()(&Value::from(8)).unwrap();
/// assert_eq!(out.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct CustomProps {
    transforms: HashMap<String, Transform>,
}

impl CustomProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named transform, returning the updated table for chaining.
    ///
    /// Adding a name twice keeps the last transform.
    pub fn add<F>(mut self, name: &str, transform: F) -> Self
    where
        F: Fn(&Value) -> Option<StyleObject> + Send + Sync + 'static,
    {
        self.transforms.insert(name.to_string(), Arc::new(transform));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Transform> {
        self.transforms.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.transforms.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Returns the declared prop names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.transforms.keys().map(String::as_str)
    }
}

impl fmt::Debug for CustomProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("CustomProps").field("names", &names).finish()
    }
}
