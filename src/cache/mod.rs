//! Style cache contract and class-name resolution.
//!
//! Components never turn style objects into CSS themselves. They hand the
//! style object, plus any explicit class name supplied by the caller, to a
//! [`StyleCache`] and attach whatever class name comes back.
//!
//! - [`StyleCache`]: the contract a cache must satisfy
//! - [`MemoryStyleCache`]: an in-process implementation deduplicating by content
//! - [`cache`]: the process-wide shared cache every component uses by default
//! - [`resolve_class_name`] and [`attach_class_name`]: the bridge between a
//!   render and the cache

mod bridge;
mod memory;

use std::sync::Arc;

use once_cell::sync::Lazy;

pub use bridge::{attach_class_name, resolve_class_name};
pub use memory::{MemoryStyleCache, DEFAULT_CLASS_PREFIX};

use crate::style::StyleObject;

/// Resolves a style object to a class name.
///
/// Implementations must be deterministic in the *content* of the style
/// object, not in its key order, and must accept an empty style object,
/// returning either `None` or the explicit class name verbatim.
pub trait StyleCache: Send + Sync {
    /// Returns the class name for `styles`, combined with `class_name` when given.
    fn class_name(&self, styles: &StyleObject, class_name: Option<&str>) -> Option<String>;
}

impl<C: StyleCache + ?Sized> StyleCache for Arc<C> {
    fn class_name(&self, styles: &StyleObject, class_name: Option<&str>) -> Option<String> {
        (**self).class_name(styles, class_name)
    }
}

static SHARED_CACHE: Lazy<Arc<MemoryStyleCache>> =
    Lazy::new(|| Arc::new(MemoryStyleCache::new()));

/// Returns the process-wide shared style cache.
///
/// Catalog components and built components resolve through this cache
/// unless they are given another one with `with_cache`.
pub fn cache() -> Arc<MemoryStyleCache> {
    Arc::clone(&SHARED_CACHE)
}

pub(crate) fn shared_cache() -> Arc<dyn StyleCache> {
    cache()
}
