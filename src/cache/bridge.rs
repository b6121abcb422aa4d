//! Class-name resolution bridge.

use super::StyleCache;
use crate::style::{StyleObject, CLASS_NAME};
use crate::value::ValueMap;

/// Asks `cache` for the class name of `styles`, combined with `explicit`.
///
/// An empty string from the cache is treated the same as no result.
pub fn resolve_class_name(
    cache: &dyn StyleCache,
    styles: &StyleObject,
    explicit: Option<&str>,
) -> Option<String> {
    let resolved = cache
        .class_name(styles, explicit)
        .filter(|name| !name.is_empty());
    tracing::trace!(?resolved, style_keys = styles.len(), "resolved class name");
    resolved
}

/// Stores a resolved class name in `props` under `className`.
///
/// With no class name, `props` is left without a `className` key at all,
/// even if one was copied there earlier; an empty class name is never
/// emitted.
///
/// # Example
///
/// ```rust
/// use boxstyle::{attach_class_name, Value, ValueMap};
///
/// let mut props = ValueMap::new().set("className", "");
/// attach_class_name(&mut props, None);
/// assert!(!props.contains_key("className"));
///
/// attach_class_name(&mut props, Some("_1a2b".to_string()));
/// assert_eq!(props.get("className"), Some(&Value::from("_1a2b")));
/// ```
pub fn attach_class_name(props: &mut ValueMap, class_name: Option<String>) {
    match class_name {
        Some(name) => {
            props.insert(CLASS_NAME, name);
        }
        None => {
            props.remove(CLASS_NAME);
        }
    }
}
