//! Layout and drawing model.
//!
//! The drawing output is an ordered, immutable list of tagged commands consumed by an external
//! renderer (vector canvas, DOM, terminal grid). The engine never issues draw calls itself.

use flowline_core::ports::{PortDirection, PortKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A positioned box in the abstract layout space. `x`/`y` are the box center; a renderer scales
/// the units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Position {
    pub fn left(&self) -> f64 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// Canvas bounds accumulated over positioned boxes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn from_positions<'a>(positions: impl IntoIterator<Item = &'a Position>) -> Option<Self> {
        let mut it = positions.into_iter();
        let first = it.next()?;
        let mut b = Self {
            min_x: first.left(),
            min_y: first.top(),
            max_x: first.right(),
            max_y: first.bottom(),
        };
        for p in it {
            b.min_x = b.min_x.min(p.left());
            b.min_y = b.min_y.min(p.top());
            b.max_x = b.max_x.max(p.right());
            b.max_y = b.max_y.max(p.bottom());
        }
        Some(b)
    }
}

/// Concrete positions for every real node and virtual port, plus the canvas size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutModel {
    /// Keyed by node id / port id, in deterministic placement order (levels top to bottom,
    /// then input ports, then output ports).
    pub positions: IndexMap<String, Position>,
    pub width: f64,
    pub height: f64,
}

impl LayoutModel {
    pub fn position(&self, id: &str) -> Option<&Position> {
        self.positions.get(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

/// Cubic "vertical S" curve between two boxes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgePath {
    pub start: LayoutPoint,
    pub control1: LayoutPoint,
    pub control2: LayoutPoint,
    pub end: LayoutPoint,
}

impl EdgePath {
    /// Midpoint of the straight chord between the endpoints; edge labels center here.
    pub fn midpoint(&self) -> LayoutPoint {
        LayoutPoint {
            x: (self.start.x + self.end.x) / 2.0,
            y: (self.start.y + self.end.y) / 2.0,
        }
    }

    /// The curve as an SVG path string.
    pub fn to_svg_path(&self) -> String {
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            self.start.x,
            self.start.y,
            self.control1.x,
            self.control1.y,
            self.control2.x,
            self.control2.y,
            self.end.x,
            self.end.y
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,
    pub arrow_end: bool,
}

/// One drawing instruction. Commands are emitted in z-order: edges, edge labels, ports, nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DrawCommand {
    Edge {
        path: EdgePath,
        stroke: StrokeStyle,
    },
    Label {
        rect: Position,
        text: String,
    },
    Port {
        id: String,
        rect: Position,
        direction: PortDirection,
        port: PortKind,
        label: String,
    },
    Node {
        id: String,
        rect: Position,
        title: String,
        title_lines: Vec<String>,
        preview_url: Option<String>,
        badges: Vec<String>,
        /// The focal prompt renders with the primary style and does not navigate on click.
        is_current: bool,
    },
}

/// The complete renderable output for one snapshot at one container width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub commands: Vec<DrawCommand>,
    pub width: f64,
    pub height: f64,
    pub has_cycle_anomaly: bool,
    /// Non-fatal anomalies (dropped edges, cycle fallback) for the caller to surface.
    pub warnings: Vec<String>,
}
