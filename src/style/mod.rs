//! Style classification primitives.
//!
//! This module provides the pieces a component uses to decide what each
//! incoming prop means:
//!
//! - [`StyleObject`]: the resolved style mapping for one render
//! - [`PassthroughSet`]: prop names forwarded to the element untouched
//! - [`CustomProps`]: named transforms expanding one prop into style entries
//! - [`partition`]: the per-key classification pass over incoming props

mod custom;
mod partition;
mod passthrough;

pub use custom::{CustomProps, Transform};
pub use partition::{partition, Partitioned};
pub use passthrough::{PassthroughSet, CLASS_NAME, STYLE};

use crate::value::ValueMap;

/// A style object: style property name to value, in insertion order.
///
/// Keys are not validated against any CSS vocabulary; any key that is not
/// claimed by a passthrough or transform entry is treated as a style
/// property name.
pub type StyleObject = ValueMap;
