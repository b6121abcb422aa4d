//! Configurable component builder.
//!
//! [`make_component`] turns a set of [`ComponentOptions`] and an optional
//! [`CustomProps`] table into a [`StyledComponent`]. A styled component can
//! in turn build more specific children with
//! [`StyledComponent::make_component`]; every child shares the parent's
//! transform table, so one vocabulary of custom props holds across a whole
//! family of components.
//!
//! # Example
//!
//! ```rust
//! use boxstyle::{make_component, Component, ComponentOptions, CustomProps, Props, StyleObject};
//!
//! let custom = CustomProps::new().add("gap", |v| {
//!     Some(StyleObject::new().set("gridGap", v.clone()))
//! });
//! let layout = make_component(
//!     ComponentOptions::new("Layout").default_styles(StyleObject::new().set("display", "grid")),
//!     Some(custom),
//! );
//! let nav = layout.make_component(ComponentOptions::new("Nav").target("nav"));
//!
//! assert_eq!(nav.display_name(), "Layout.Nav");
//!
//! let el = nav.render(Props::new().set("gap", 8));
//! assert_eq!(el.target.host_name(), Some("nav"));
//! assert!(el.class_name().is_some());
//! ```

use std::fmt;
use std::sync::Arc;

use super::{create_element, Component, Element, Props, Target};
use crate::cache::{attach_class_name, resolve_class_name, shared_cache, StyleCache};
use crate::style::{partition, CustomProps, Partitioned, PassthroughSet, StyleObject, CLASS_NAME};
use crate::value::Value;

/// Joins a parent's display name to a child's.
pub const NAME_SEPARATOR: &str = ".";

/// Options for building a [`StyledComponent`].
#[derive(Debug, Clone)]
pub struct ComponentOptions {
    display_name: String,
    target: Option<Target>,
    component_props: Vec<String>,
    default_styles: Option<StyleObject>,
}

impl ComponentOptions {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            target: None,
            component_props: Vec::new(),
            default_styles: None,
        }
    }

    /// Sets the render target. Defaults to a `div` host element.
    pub fn target(mut self, target: impl Into<Target>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Adds prop names forwarded to the target instead of being treated as style.
    ///
    /// `className` and `style` are always forwarded.
    pub fn component_props<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.component_props
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn default_styles(mut self, styles: StyleObject) -> Self {
        self.default_styles = Some(styles);
        self
    }
}

/// A component built by [`make_component`].
///
/// Rendering classifies every incoming value against the component's
/// passthrough set and custom props, resolves the style object through the
/// style cache, and describes the configured target with the passthrough
/// props and resolved class name.
///
/// The `component` and `component_props` fields of [`Props`] are catalog
/// features and are not consulted here; a styled component always renders
/// its configured target.
#[derive(Clone)]
pub struct StyledComponent {
    display_name: String,
    target: Target,
    passthrough: PassthroughSet,
    default_styles: Option<StyleObject>,
    custom_props: Option<Arc<CustomProps>>,
    cache: Arc<dyn StyleCache>,
}

/// Builds a component from options and an optional custom prop table.
pub fn make_component(options: ComponentOptions, custom_props: Option<CustomProps>) -> StyledComponent {
    StyledComponent::build(options, custom_props.map(Arc::new), shared_cache())
}

impl StyledComponent {
    fn build(
        options: ComponentOptions,
        custom_props: Option<Arc<CustomProps>>,
        cache: Arc<dyn StyleCache>,
    ) -> Self {
        let ComponentOptions {
            display_name,
            target,
            component_props,
            default_styles,
        } = options;

        Self {
            display_name,
            target: target.unwrap_or_default(),
            passthrough: PassthroughSet::new().with(component_props),
            default_styles,
            custom_props,
            cache,
        }
    }

    /// Builds a child component that inherits this component's custom props.
    ///
    /// The child's display name is this component's name and the child's,
    /// joined by [`NAME_SEPARATOR`]. The custom prop table is shared, not
    /// copied; target, passthrough props and default styles come only from
    /// `options`. The child resolves through the same style cache.
    pub fn make_component(&self, options: ComponentOptions) -> StyledComponent {
        let display_name = format!(
            "{}{}{}",
            self.display_name, NAME_SEPARATOR, options.display_name
        );
        StyledComponent::build(
            ComponentOptions {
                display_name,
                ..options
            },
            self.custom_props.clone(),
            Arc::clone(&self.cache),
        )
    }

    /// Resolves class names through `cache` instead of the shared cache.
    pub fn with_cache<C: StyleCache + 'static>(mut self, cache: C) -> Self {
        self.cache = Arc::new(cache);
        self
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn passthrough(&self) -> &PassthroughSet {
        &self.passthrough
    }

    /// The shared custom prop table, if any.
    pub fn custom_props(&self) -> Option<&Arc<CustomProps>> {
        self.custom_props.as_ref()
    }
}

impl Component for StyledComponent {
    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn default_styles(&self) -> Option<&StyleObject> {
        self.default_styles.as_ref()
    }

    fn render(&self, props: Props) -> Element {
        if props.component.is_some() || props.component_props.is_some() {
            tracing::debug!(
                component = %self.display_name,
                "ignoring element override; built components render their configured target"
            );
        }

        let Partitioned {
            mut passthrough,
            styles,
        } = partition(
            props.values,
            &self.passthrough,
            self.custom_props.as_deref(),
            self.default_styles.as_ref(),
        );

        let explicit = passthrough.get(CLASS_NAME).and_then(Value::as_str);
        let class_name = resolve_class_name(self.cache.as_ref(), &styles, explicit);
        attach_class_name(&mut passthrough, class_name);

        create_element(self.target.clone(), passthrough, props.children)
    }
}

impl fmt::Display for StyledComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "boxstyle({})", self.display_name)
    }
}

impl fmt::Debug for StyledComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyledComponent")
            .field("display_name", &self.display_name)
            .field("target", &self.target)
            .field("passthrough", &self.passthrough)
            .field("default_styles", &self.default_styles)
            .field("custom_props", &self.custom_props)
            .finish_non_exhaustive()
    }
}
