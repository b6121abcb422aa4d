//! Per-key prop classification.
//!
//! Every incoming prop key lands in exactly one bucket:
//!
//! | Order | Condition | Result |
//! |-------|-----------|--------|
//! | 1 | key is in the passthrough set | copied verbatim to the passthrough map |
//! | 2 | key has a custom transform | transform output merged into the style object |
//! | 3 | value is nullish | dropped |
//! | 4 | anything else | assigned to the style object under the key itself |
//!
//! Default styles are seeded into the style object before the pass, so any
//! key touched by the pass overrides its default. Transform outputs and
//! literal keys interleave in prop order: a later prop overwrites whatever
//! an earlier prop set for the same style key.

use super::{CustomProps, PassthroughSet, StyleObject};
use crate::value::ValueMap;

/// The two outputs of a classification pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partitioned {
    /// Props forwarded to the rendered element untouched.
    pub passthrough: ValueMap,
    /// The style object handed to the style cache.
    pub styles: StyleObject,
}

/// Splits incoming props into passthrough props and a style object.
///
/// Never fails: an unrecognized key becomes a style property, or is
/// dropped when its value is nullish.
///
/// # Example
///
/// ```rust
/// use boxstyle::{partition, PassthroughSet, StyleObject, Value, ValueMap};
///
/// let props = ValueMap::new()
///     .set("className", "card")
///     .set("color", "blue")
///     .set("margin", Value::Null);
/// let defaults = StyleObject::new().set("color", "red").set("padding", 4);
///
/// let out = partition(props, &PassthroughSet::new(), None, Some(&defaults));
///
/// assert_eq!(out.passthrough.get("className"), Some(&Value::from("card")));
/// assert_eq!(out.styles.get("color"), Some(&Value::from("blue")));
/// assert_eq!(out.styles.get("padding"), Some(&Value::from(4)));
/// assert!(!out.styles.contains_key("margin"));
/// ```
pub fn partition(
    props: ValueMap,
    passthrough: &PassthroughSet,
    custom: Option<&CustomProps>,
    defaults: Option<&StyleObject>,
) -> Partitioned {
    let mut out = Partitioned {
        passthrough: ValueMap::new(),
        styles: defaults.cloned().unwrap_or_default(),
    };

    for (key, value) in props {
        if passthrough.contains(&key) {
            out.passthrough.insert(key, value);
            continue;
        }

        if let Some(transform) = custom.and_then(|table| table.get(&key)) {
            if let Some(expanded) = transform(&value) {
                out.styles.merge(expanded);
            }
            continue;
        }

        if value.is_nullish() {
            continue;
        }

        out.styles.insert(key, value);
    }

    out
}
