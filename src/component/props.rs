//! Incoming component props.

use super::{Node, Target};
use crate::style::{CLASS_NAME, STYLE};
use crate::value::{Value, ValueMap};

/// Prop key for the media query mapping.
///
/// Media queries are not interpreted here; the mapping is an ordinary
/// style value that reaches the style cache with the rest of the styles.
pub const MEDIA_QUERIES: &str = "mediaQueries";

/// The props a component is rendered with.
///
/// Style-like and passthrough props live in `values`, in the order they
/// were supplied. The render target override, the props forwarded to that
/// target, and the children are structural and never classified as style.
///
/// # Example
///
/// ```rust
/// use boxstyle::{Props, ValueMap};
///
/// let props = Props::new()
///     .component("section")
///     .component_props(ValueMap::new().set("id", "main"))
///     .class_name("page")
///     .set("padding", 12)
///     .child("hello");
///
/// assert_eq!(props.values.len(), 2);
/// assert_eq!(props.children.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    /// Every classified prop, in supply order.
    pub values: ValueMap,
    /// Overrides the render target (catalog components only).
    pub component: Option<Target>,
    /// Props passed verbatim to the render target (catalog components only).
    pub component_props: Option<ValueMap>,
    pub children: Vec<Node>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a prop value, returning the updated props for chaining.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key, value);
        self
    }

    pub fn class_name(self, class_name: impl Into<String>) -> Self {
        self.set(CLASS_NAME, class_name.into())
    }

    /// Sets the raw inline style object forwarded to the element.
    pub fn style(self, style: ValueMap) -> Self {
        self.set(STYLE, style)
    }

    pub fn media_queries(self, queries: ValueMap) -> Self {
        self.set(MEDIA_QUERIES, queries)
    }

    pub fn component(mut self, target: impl Into<Target>) -> Self {
        self.component = Some(target.into());
        self
    }

    pub fn component_props(mut self, props: ValueMap) -> Self {
        self.component_props = Some(props);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

impl From<ValueMap> for Props {
    fn from(values: ValueMap) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }
}
