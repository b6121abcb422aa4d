//! The fixed component catalog.
//!
//! The catalog exposes one component per [`ComponentName`], each seeded with
//! its default styles:
//!
//! | Component | Default styles |
//! |-----------|----------------|
//! | `Box` | none |
//! | `Block` | `display: block` |
//! | `Inline` | `display: inline` |
//! | `InlineBlock` | `display: inline-block` |
//! | `Row` | `display: flex; flexDirection: row` |
//! | `Col` | `display: flex; flexDirection: column` |
//! | `InlineRow` | `display: inline-flex; flexDirection: row` |
//! | `InlineCol` | `display: inline-flex; flexDirection: column` |
//! | `Grid` | `display: grid` |
//!
//! `Table`, `TableRow`, `TableCell`, `Flex` and `InlineFlex` are deprecated.
//! The [`Mode`] a catalog is built in decides how they are constructed: in
//! development they are [`DeprecatedComponent`]s that warn once per
//! instance; in production they are ordinary catalog components.
//!
//! # Example
//!
//! ```rust
//! use boxstyle::{Catalog, Component, ComponentName, Mode, Props};
//!
//! let catalog = Catalog::new(Mode::Production);
//! let row = catalog.get(ComponentName::Row);
//!
//! let el = row.render(Props::new().set("padding", 8).child("hi"));
//! assert_eq!(el.target.host_name(), Some("div"));
//! assert!(el.class_name().is_some());
//! ```

mod deprecated;
mod factory;
mod name;

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

pub use deprecated::DeprecatedComponent;
pub use factory::CatalogComponent;
pub use name::ComponentName;

use crate::cache::{shared_cache, StyleCache};
use crate::component::Component;
use crate::error::BoxstyleError;
use crate::mode::{current_mode, Mode};

/// Builds one catalog component for `mode`, resolving through `cache`.
///
/// Each call produces an independent instance; a deprecated component built
/// in development mode has its own warning latch.
pub fn build_component(name: ComponentName, mode: Mode, cache: Arc<dyn StyleCache>) -> Arc<dyn Component> {
    if name.is_deprecated() && mode.is_development() {
        let primary = CatalogComponent::new(ComponentName::Box, cache);
        Arc::new(DeprecatedComponent::new(name, primary))
    } else {
        Arc::new(CatalogComponent::new(name, cache))
    }
}

/// The set of catalog components built for one mode.
pub struct Catalog {
    mode: Mode,
    components: HashMap<ComponentName, Arc<dyn Component>>,
}

impl Catalog {
    /// Builds every catalog component for `mode` using the shared cache.
    pub fn new(mode: Mode) -> Self {
        Self::with_cache(mode, shared_cache())
    }

    /// Builds every catalog component for `mode` using `cache`.
    pub fn with_cache(mode: Mode, cache: Arc<dyn StyleCache>) -> Self {
        tracing::debug!(%mode, "building component catalog");
        let components = ComponentName::ALL
            .into_iter()
            .map(|name| (name, build_component(name, mode, Arc::clone(&cache))))
            .collect();
        Self { mode, components }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn get(&self, name: ComponentName) -> Arc<dyn Component> {
        // Every name is inserted by the constructor.
        Arc::clone(&self.components[&name])
    }

    /// Looks a component up by its display name.
    pub fn get_by_name(&self, name: &str) -> Result<Arc<dyn Component>, BoxstyleError> {
        Ok(self.get(name.parse()?))
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("mode", &self.mode)
            .field("components", &self.components.len())
            .finish()
    }
}

static CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog::new(current_mode()));

/// Returns the process-wide catalog.
///
/// It is built on first use in the mode returned by
/// [`current_mode`](crate::current_mode) at that time.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}
