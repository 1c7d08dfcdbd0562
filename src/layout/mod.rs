//! Tree rendering
//!
//! - `pretty`: ASCII box layout, also used by `Display`
//! - `svg`: standalone SVG drawing on a perfect-tree grid
//! - `dot`: Graphviz description with record nodes
//!
//! Renderers accept any [`NodeRef`](crate::NodeRef) and expect an acyclic
//! tree.

mod dot;
mod pretty;
mod svg;

pub use dot::to_dot;
pub use pretty::pretty_print;
pub use svg::svg;

/// Configuration for [`pretty_print`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrettyPrintOptions {
    /// Prefix each label with its level-order index; nodes whose index
    /// overflows `usize` (more than 63 levels deep) get `?` instead
    pub show_index: bool,
    /// Text between index and value when `show_index` is set
    pub delimiter: String,
}

impl Default for PrettyPrintOptions {
    fn default() -> Self {
        Self {
            show_index: false,
            delimiter: "-".to_string(),
        }
    }
}

impl PrettyPrintOptions {
    /// Toggle level-order index prefixes
    pub fn with_index(mut self, show_index: bool) -> Self {
        self.show_index = show_index;
        self
    }

    /// Set the index/value delimiter
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }
}

/// Configuration for [`svg`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgOptions {
    /// Circle radius in pixels; the grid pitch is three radii
    pub node_radius: u32,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self { node_radius: 16 }
    }
}

impl SvgOptions {
    /// Set the node radius
    pub fn with_node_radius(mut self, node_radius: u32) -> Self {
        self.node_radius = node_radius;
        self
    }
}
