//! Catalog component names and their default styles.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::error::BoxstyleError;
use crate::style::StyleObject;

/// The names of every catalog component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentName {
    Box,
    Block,
    Inline,
    InlineBlock,
    Row,
    Col,
    InlineRow,
    InlineCol,
    Grid,
    /// Deprecated: use `Box` with a `table` target.
    Table,
    /// Deprecated: use `Box` with a `tr` target.
    TableRow,
    /// Deprecated: use `Box` with a `td` target.
    TableCell,
    /// Deprecated: use `Row`.
    Flex,
    /// Deprecated: use `Row` with `display: inline-flex`.
    InlineFlex,
}

impl ComponentName {
    /// Every catalog name, current components first.
    pub const ALL: [ComponentName; 14] = [
        ComponentName::Box,
        ComponentName::Block,
        ComponentName::Inline,
        ComponentName::InlineBlock,
        ComponentName::Row,
        ComponentName::Col,
        ComponentName::InlineRow,
        ComponentName::InlineCol,
        ComponentName::Grid,
        ComponentName::Table,
        ComponentName::TableRow,
        ComponentName::TableCell,
        ComponentName::Flex,
        ComponentName::InlineFlex,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentName::Box => "Box",
            ComponentName::Block => "Block",
            ComponentName::Inline => "Inline",
            ComponentName::InlineBlock => "InlineBlock",
            ComponentName::Row => "Row",
            ComponentName::Col => "Col",
            ComponentName::InlineRow => "InlineRow",
            ComponentName::InlineCol => "InlineCol",
            ComponentName::Grid => "Grid",
            ComponentName::Table => "Table",
            ComponentName::TableRow => "TableRow",
            ComponentName::TableCell => "TableCell",
            ComponentName::Flex => "Flex",
            ComponentName::InlineFlex => "InlineFlex",
        }
    }

    pub fn is_deprecated(self) -> bool {
        matches!(
            self,
            ComponentName::Table
                | ComponentName::TableRow
                | ComponentName::TableCell
                | ComponentName::Flex
                | ComponentName::InlineFlex
        )
    }

    /// The baseline styles for this component. `Box` has none.
    pub fn default_styles(self) -> Option<&'static StyleObject> {
        COMPONENT_STYLES.get(&self)
    }
}

static COMPONENT_STYLES: Lazy<HashMap<ComponentName, StyleObject>> = Lazy::new(|| {
    let display = |value: &str| StyleObject::new().set("display", value);
    let flex = |kind: &str, direction: &str| {
        StyleObject::new()
            .set("display", kind)
            .set("flexDirection", direction)
    };

    HashMap::from([
        (ComponentName::Block, display("block")),
        (ComponentName::Inline, display("inline")),
        (ComponentName::InlineBlock, display("inline-block")),
        (ComponentName::Row, flex("flex", "row")),
        (ComponentName::Col, flex("flex", "column")),
        (ComponentName::InlineRow, flex("inline-flex", "row")),
        (ComponentName::InlineCol, flex("inline-flex", "column")),
        (ComponentName::Grid, display("grid")),
        (ComponentName::Table, display("table")),
        (ComponentName::TableRow, display("table-row")),
        (ComponentName::TableCell, display("table-cell")),
        (ComponentName::Flex, display("flex")),
        (ComponentName::InlineFlex, display("inline-flex")),
    ])
});

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentName {
    type Err = BoxstyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| BoxstyleError::UnknownComponent {
                name: s.to_string(),
            })
    }
}
