//! In-process style cache.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};
use std::sync::{Mutex, PoisonError};

use super::StyleCache;
use crate::style::StyleObject;
use crate::value::{Value, ValueMap};

/// Default prefix for generated class names.
pub const DEFAULT_CLASS_PREFIX: &str = "_";

/// A style cache that deduplicates style objects by content.
///
/// Each distinct style object (compared with keys sorted, so insertion
/// order does not matter) maps to one stable class name derived from a hash
/// of its canonical form. CSS text is not generated; the cache only records
/// which style objects it has seen.
///
/// # Example
///
/// ```rust
/// use boxstyle::{MemoryStyleCache, StyleCache, StyleObject};
///
/// let cache = MemoryStyleCache::new();
/// let a = StyleObject::new().set("color", "red").set("margin", 1);
/// let b = StyleObject::new().set("margin", 1).set("color", "red");
///
/// let name = cache.class_name(&a, None).unwrap();
/// assert_eq!(cache.class_name(&b, None), Some(name.clone()));
/// assert_eq!(cache.class_name(&a, Some("card")), Some(format!("card {}", name)));
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug)]
pub struct MemoryStyleCache {
    prefix: String,
    /// Canonical style content to generated class name.
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStyleCache {
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_CLASS_PREFIX)
    }

    /// Creates a cache whose generated class names start with `prefix`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of distinct style objects seen since creation or the last reset.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forgets every style object seen so far.
    pub fn reset(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn generate(&self, canonical: &str) -> String {
        let mut hasher = DefaultHasher::new();
        canonical.hash(&mut hasher);
        format!("{}{:x}", self.prefix, hasher.finish())
    }
}

impl Default for MemoryStyleCache {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleCache for MemoryStyleCache {
    fn class_name(&self, styles: &StyleObject, class_name: Option<&str>) -> Option<String> {
        let explicit = class_name.filter(|c| !c.is_empty());
        if styles.is_empty() {
            return explicit.map(str::to_string);
        }

        let canonical = canonical_form(styles)?;
        let generated = {
            let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
            match entries.get(&canonical) {
                Some(existing) => existing.clone(),
                None => {
                    let generated = self.generate(&canonical);
                    tracing::trace!(class_name = %generated, styles = %canonical, "inserted style");
                    entries.insert(canonical, generated.clone());
                    generated
                }
            }
        };

        Some(match explicit {
            Some(explicit) => format!("{} {}", explicit, generated),
            None => generated,
        })
    }
}

/// Encodes a style object with keys sorted at every level.
///
/// Numbers keep their exact spelling, so `NaN` and the infinities stay
/// distinct from `null`.
fn canonical_form(styles: &StyleObject) -> Option<String> {
    let mut out = String::new();
    write_map(styles, &mut out).ok()?;
    Some(out)
}

fn write_map(map: &ValueMap, out: &mut String) -> fmt::Result {
    let mut entries: Vec<(&str, &Value)> = map.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    out.push('{');
    for (i, (key, value)) in entries.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write!(out, "{:?}:", key)?;
        write_value(value, out)?;
    }
    out.push('}');
    Ok(())
}

fn write_value(value: &Value, out: &mut String) -> fmt::Result {
    match value {
        Value::Undefined => out.push_str("undefined"),
        Value::Null => out.push_str("null"),
        Value::Bool(b) => write!(out, "{}", b)?,
        Value::Number(n) => write!(out, "{:?}", n)?,
        Value::String(s) => write!(out, "{:?}", s)?,
        Value::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out)?;
            }
            out.push(']');
        }
        Value::Map(map) => write_map(map, out)?,
    }
    Ok(())
}
