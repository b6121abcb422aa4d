//! Components and the elements they render.
//!
//! - [`Component`]: anything that turns [`Props`] into an [`Element`]
//! - [`StyledComponent`]: a component built from [`ComponentOptions`] and
//!   an optional [`CustomProps`](crate::CustomProps) table
//! - [`Element`], [`Node`], [`Target`]: the minimal element description

mod builder;
mod element;
mod props;

pub use builder::{make_component, ComponentOptions, StyledComponent, NAME_SEPARATOR};
pub use element::{create_element, Element, Node, Target, DEFAULT_TAG};
pub use props::{Props, MEDIA_QUERIES};

use crate::style::StyleObject;

/// A renderable component.
///
/// A render is a pure computation over its props: classify, resolve a
/// class name, describe an element. Implementations are shared across
/// threads and must not mutate shared state while rendering.
pub trait Component: Send + Sync {
    /// Name shown by host tooling.
    fn display_name(&self) -> &str;

    /// The baseline style object applied before incoming props, if any.
    fn default_styles(&self) -> Option<&StyleObject>;

    fn render(&self, props: Props) -> Element;
}
