//! Catalog component rendering.

use std::fmt;
use std::sync::Arc;

use super::ComponentName;
use crate::cache::{resolve_class_name, StyleCache};
use crate::component::{create_element, Component, Element, Props, Target};
use crate::style::{partition, Partitioned, PassthroughSet, StyleObject, CLASS_NAME, STYLE};
use crate::value::Value;

/// A catalog component.
///
/// Only `className` and `style` pass through; every other value is a style
/// property. The rendered element gets the `component_props` map first,
/// then the resolved class name, then the `style` prop when it is truthy.
pub struct CatalogComponent {
    name: ComponentName,
    default_styles: Option<StyleObject>,
    passthrough: PassthroughSet,
    cache: Arc<dyn StyleCache>,
}

impl CatalogComponent {
    pub(crate) fn new(name: ComponentName, cache: Arc<dyn StyleCache>) -> Self {
        Self {
            name,
            default_styles: name.default_styles().cloned(),
            passthrough: PassthroughSet::new(),
            cache,
        }
    }

    pub fn name(&self) -> ComponentName {
        self.name
    }

    /// Renders with `defaults` as the baseline instead of this component's own.
    pub(crate) fn render_with_defaults(&self, props: Props, defaults: Option<&StyleObject>) -> Element {
        let Props {
            values,
            component,
            component_props,
            children,
        } = props;

        let Partitioned {
            mut passthrough,
            styles,
        } = partition(values, &self.passthrough, None, defaults);

        let explicit = passthrough.get(CLASS_NAME).and_then(Value::as_str);
        let class_name = resolve_class_name(self.cache.as_ref(), &styles, explicit);

        let mut element_props = component_props.unwrap_or_default();
        if let Some(class_name) = class_name {
            element_props.insert(CLASS_NAME, class_name);
        }
        if let Some(style) = passthrough.remove(STYLE).filter(Value::is_truthy) {
            element_props.insert(STYLE, style);
        }

        create_element(component.unwrap_or_default(), element_props, children)
    }
}

impl Component for CatalogComponent {
    fn display_name(&self) -> &str {
        self.name.as_str()
    }

    fn default_styles(&self) -> Option<&StyleObject> {
        self.default_styles.as_ref()
    }

    fn render(&self, props: Props) -> Element {
        self.render_with_defaults(props, self.default_styles.as_ref())
    }
}

impl fmt::Debug for CatalogComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogComponent")
            .field("name", &self.name)
            .field("default_styles", &self.default_styles)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryStyleCache;
    use crate::value::ValueMap;

    fn component(name: ComponentName) -> (CatalogComponent, Arc<MemoryStyleCache>) {
        let cache = Arc::new(MemoryStyleCache::new());
        (CatalogComponent::new(name, cache.clone()), cache)
    }

    #[test]
    fn test_metadata() {
        let (row, _) = component(ComponentName::Row);
        assert_eq!(row.display_name(), "Row");
        assert_eq!(row.name(), ComponentName::Row);
        assert_eq!(row.default_styles(), ComponentName::Row.default_styles());
    }

    #[test]
    fn test_defaults_resolve_to_class_name() {
        let (row, cache) = component(ComponentName::Row);
        let el = row.render(Props::new());

        let expected = cache.class_name(ComponentName::Row.default_styles().unwrap(), None);
        assert_eq!(el.class_name(), expected.as_deref());
        assert_eq!(el.target, Target::host("div"));
    }

    #[test]
    fn test_incoming_styles_override_defaults() {
        let (row, cache) = component(ComponentName::Row);
        let el = row.render(Props::new().set("flexDirection", "row-reverse"));

        let expected = StyleObject::new()
            .set("display", "flex")
            .set("flexDirection", "row-reverse");
        assert_eq!(el.class_name(), cache.class_name(&expected, None).as_deref());
    }

    #[test]
    fn test_box_without_styles_has_no_class_name() {
        let (bx, _) = component(ComponentName::Box);
        let el = bx.render(Props::new().set("color", Value::Null));
        assert!(el.props.is_empty());
    }

    #[test]
    fn test_component_override_and_component_props() {
        let (bx, _) = component(ComponentName::Box);
        let el = bx.render(
            Props::new()
                .component("a")
                .component_props(ValueMap::new().set("href", "/"))
                .set("color", "red")
                .child("home"),
        );

        assert_eq!(el.target, Target::host("a"));
        assert_eq!(el.props.get("href"), Some(&Value::from("/")));
        assert!(el.class_name().is_some());
        assert!(!el.props.contains_key("color"));
        assert_eq!(el.children.len(), 1);
    }

    #[test]
    fn test_explicit_class_name_is_combined() {
        let (bx, _) = component(ComponentName::Box);

        let el = bx.render(Props::new().class_name("card"));
        assert_eq!(el.class_name(), Some("card"));

        let el = bx.render(Props::new().class_name("card").set("margin", 4));
        let class_name = el.class_name().unwrap();
        assert!(class_name.starts_with("card "));
    }

    #[test]
    fn test_style_forwarded_only_when_truthy() {
        let (bx, _) = component(ComponentName::Box);
        let inline = ValueMap::new().set("opacity", 0.5);

        let el = bx.render(Props::new().style(inline.clone()));
        assert_eq!(el.props.get("style"), Some(&Value::Map(inline)));

        let el = bx.render(Props::new().set("style", Value::Null));
        assert!(!el.props.contains_key("style"));
    }

    #[test]
    fn test_style_and_class_name_never_become_styles() {
        let cache = Arc::new(MemoryStyleCache::new());
        let bx = CatalogComponent::new(ComponentName::Box, cache.clone());

        bx.render(Props::new().class_name("x").style(ValueMap::new().set("a", 1)));
        assert!(cache.is_empty());
    }
}
