//! Element descriptions produced by a render.

use std::fmt;
use std::sync::Arc;

use super::{Component, Props};
use crate::style::CLASS_NAME;
use crate::value::{Value, ValueMap};

/// Host element rendered when no target is given.
pub const DEFAULT_TAG: &str = "div";

/// What an element renders into: a host element name or another component.
#[derive(Clone)]
pub enum Target {
    Host(String),
    Component(Arc<dyn Component>),
}

impl Target {
    pub fn host(name: impl Into<String>) -> Self {
        Target::Host(name.into())
    }

    /// Wraps a component so it can be used as a render target.
    pub fn component<C: Component + 'static>(component: C) -> Self {
        Target::Component(Arc::new(component))
    }

    /// Returns the host element name, if this is a host target.
    pub fn host_name(&self) -> Option<&str> {
        match self {
            Target::Host(name) => Some(name),
            Target::Component(_) => None,
        }
    }
}

impl Default for Target {
    fn default() -> Self {
        Target::Host(DEFAULT_TAG.to_string())
    }
}

impl From<&str> for Target {
    fn from(name: &str) -> Self {
        Target::host(name)
    }
}

impl From<String> for Target {
    fn from(name: String) -> Self {
        Target::Host(name)
    }
}

impl From<Arc<dyn Component>> for Target {
    fn from(component: Arc<dyn Component>) -> Self {
        Target::Component(component)
    }
}

impl PartialEq for Target {
    /// Host targets compare by name, component targets by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Target::Host(a), Target::Host(b)) => a == b,
            (Target::Component(a), Target::Component(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Host(name) => f.debug_tuple("Host").field(name).finish(),
            Target::Component(c) => f.debug_tuple("Component").field(&c.display_name()).finish(),
        }
    }
}

/// A child of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Element(Element),
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// A minimal element description: a target, its props, and its children.
///
/// Elements are descriptions only. A component target is not rendered
/// until [`Element::expand`] is called.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub target: Target,
    pub props: ValueMap,
    pub children: Vec<Node>,
}

impl Element {
    /// The `className` prop, if set to a string.
    pub fn class_name(&self) -> Option<&str> {
        self.props.get(CLASS_NAME).and_then(Value::as_str)
    }

    /// Renders component targets recursively until only host elements remain.
    ///
    /// Each component target receives this element's props as its incoming
    /// values and this element's children as its children.
    pub fn expand(self) -> Element {
        match self.target {
            Target::Host(name) => Element {
                target: Target::Host(name),
                props: self.props,
                children: self.children.into_iter().map(Node::expand).collect(),
            },
            Target::Component(component) => {
                let props = Props::from(self.props).children(self.children);
                component.render(props).expand()
            }
        }
    }
}

impl Node {
    fn expand(self) -> Node {
        match self {
            Node::Text(text) => Node::Text(text),
            Node::Element(element) => Node::Element(element.expand()),
        }
    }
}

/// Builds an element description.
pub fn create_element(target: Target, props: ValueMap, children: Vec<Node>) -> Element {
    Element {
        target,
        props,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_target_is_div() {
        assert_eq!(Target::default(), Target::host("div"));
        assert_eq!(Target::default().host_name(), Some(DEFAULT_TAG));
    }

    #[test]
    fn test_host_targets_compare_by_name() {
        assert_eq!(Target::from("span"), Target::from(String::from("span")));
        assert_ne!(Target::from("span"), Target::from("a"));
    }

    #[test]
    fn test_expand_host_tree_is_unchanged() {
        let inner = create_element("span".into(), ValueMap::new(), vec!["hi".into()]);
        let outer = create_element(
            "div".into(),
            ValueMap::new().set("id", "root"),
            vec![inner.into()],
        );

        assert_eq!(outer.clone().expand(), outer);
    }

    #[test]
    fn test_class_name_accessor() {
        let el = create_element("div".into(), ValueMap::new().set("className", "_x"), vec![]);
        assert_eq!(el.class_name(), Some("_x"));

        let el = create_element("div".into(), ValueMap::new(), vec![]);
        assert_eq!(el.class_name(), None);
    }
}
