//! # Boxstyle - prop-driven style components
//!
//! Boxstyle turns "style-like" props on an element description into a
//! single class name. Each render splits the incoming props into values
//! forwarded to the element and values describing its style, resolves the
//! style values through a deduplicating style cache, and emits a minimal
//! element carrying only the forwarded props and the resolved class name.
//!
//! ## Core Concepts
//!
//! - [`partition`]: classifies every prop as passthrough, custom transform or raw style
//! - [`StyleCache`]: turns a style object into a class name ([`MemoryStyleCache`] in-process)
//! - [`Catalog`]: the fixed set of layout primitives (`Box`, `Row`, `Col`, `Grid`, ...)
//! - [`make_component`]: builds components with their own passthrough props,
//!   default styles and [`CustomProps`] transforms
//! - [`Mode`]: development or production construction of deprecated components
//!
//! ## Quick Start
//!
//! ```rust
//! use boxstyle::{catalog, Component, ComponentName, Props};
//!
//! let col = catalog().get(ComponentName::Col);
//! let el = col.render(
//!     Props::new()
//!         .component("main")
//!         .set("gap", 12)
//!         .set("alignItems", "center")
//!         .child("content"),
//! );
//!
//! assert_eq!(el.target.host_name(), Some("main"));
//! assert!(el.class_name().is_some());
//! assert!(!el.props.contains_key("gap"));
//! ```
//!
//! ## Custom Props
//!
//! A built component can expand high-level props into several style entries,
//! and children built from it share the same vocabulary:
//!
//! ```rust
//! use boxstyle::{make_component, Component, ComponentOptions, CustomProps, Props, StyleObject};
//!
//! let spacing = CustomProps::new().add("paddingV", |v| {
//!     Some(StyleObject::new().set("paddingTop", v.clone()).set("paddingBottom", v.clone()))
//! });
//! let card = make_component(ComponentOptions::new("Card").component_props(["id"]), Some(spacing));
//! let header = card.make_component(ComponentOptions::new("Header").target("header"));
//!
//! let el = header.render(Props::new().set("paddingV", 4));
//! assert_eq!(header.display_name(), "Card.Header");
//! assert!(el.class_name().is_some());
//! ```

pub mod cache;
pub mod catalog;
pub mod component;
mod error;
mod mode;
pub mod style;
mod value;

pub use cache::{
    attach_class_name, cache, resolve_class_name, MemoryStyleCache, StyleCache,
    DEFAULT_CLASS_PREFIX,
};
pub use catalog::{
    build_component, catalog, Catalog, CatalogComponent, ComponentName, DeprecatedComponent,
};
pub use component::{
    create_element, make_component, Component, ComponentOptions, Element, Node, Props,
    StyledComponent, Target, DEFAULT_TAG, MEDIA_QUERIES, NAME_SEPARATOR,
};
pub use error::BoxstyleError;
pub use mode::{current_mode, set_mode, Mode, MODE_ENV_VAR};
pub use style::{
    partition, CustomProps, Partitioned, PassthroughSet, StyleObject, Transform, CLASS_NAME,
    STYLE,
};
pub use value::{Value, ValueMap};
