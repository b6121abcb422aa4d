//! Development-mode wrapper for deprecated catalog components.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{CatalogComponent, ComponentName};
use crate::component::{Component, Element, Props};
use crate::style::StyleObject;

/// A deprecated catalog component that warns on its first render.
///
/// Rendering delegates to the `Box` component with this component's
/// default styles as the baseline. The warning latch belongs to this
/// instance: it is set on the first render and never reset, so each
/// independently constructed instance warns once.
///
/// Only built in development mode; in production the catalog hands out a
/// plain [`CatalogComponent`] instead.
pub struct DeprecatedComponent {
    name: ComponentName,
    default_styles: Option<StyleObject>,
    primary: CatalogComponent,
    warned: AtomicBool,
}

impl DeprecatedComponent {
    pub(crate) fn new(name: ComponentName, primary: CatalogComponent) -> Self {
        debug_assert_eq!(primary.name(), ComponentName::Box);
        Self {
            name,
            default_styles: name.default_styles().cloned(),
            primary,
            warned: AtomicBool::new(false),
        }
    }

    /// Whether this instance has already emitted its warning.
    pub fn has_warned(&self) -> bool {
        self.warned.load(Ordering::Relaxed)
    }

    fn warn_once(&self) {
        // Setting an already-set latch is harmless; a race can at worst
        // repeat the warning.
        if !self.warned.swap(true, Ordering::Relaxed) {
            tracing::warn!(
                target: "boxstyle::deprecated",
                component = self.name.as_str(),
                "boxstyle's `{}` component is deprecated and will be removed in a future version",
                self.name
            );
        }
    }
}

impl Component for DeprecatedComponent {
    fn display_name(&self) -> &str {
        self.name.as_str()
    }

    fn default_styles(&self) -> Option<&StyleObject> {
        self.default_styles.as_ref()
    }

    fn render(&self, props: Props) -> Element {
        self.warn_once();
        self.primary
            .render_with_defaults(props, self.default_styles.as_ref())
    }
}

impl fmt::Debug for DeprecatedComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeprecatedComponent")
            .field("name", &self.name)
            .field("warned", &self.has_warned())
            .finish_non_exhaustive()
    }
}
