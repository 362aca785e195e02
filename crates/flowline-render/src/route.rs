//! Edge routing: cubic "vertical S" curves with midpoint label boxes.
//!
//! Every edge leaves the bottom-center of its source box and enters the top-center of its target
//! box, with both control points at the vertical midpoint. That keeps fan-outs visually orderly
//! when many nodes share a level. Virtual-port edges route the same way; a port is an ordinary
//! endpoint.

use crate::model::{EdgePath, LayoutPoint, Position};
use crate::text;
use crate::theme::{Metrics, Theme};

pub fn route_edge(source: &Position, target: &Position) -> EdgePath {
    let start = LayoutPoint {
        x: source.x,
        y: source.bottom(),
    };
    let end = LayoutPoint {
        x: target.x,
        y: target.top(),
    };
    let mid_y = (start.y + end.y) / 2.0;
    EdgePath {
        start,
        control1: LayoutPoint {
            x: start.x,
            y: mid_y,
        },
        control2: LayoutPoint { x: end.x, y: mid_y },
        end,
    }
}

/// Label box centered on the path midpoint, sized by the label's display width.
///
/// Returns `None` when the container is too narrow for readable labels, or the label is blank.
pub fn label_box(
    path: &EdgePath,
    label: &str,
    theme: &Theme,
    metrics: &Metrics,
) -> Option<Position> {
    if !metrics.draw_labels {
        return None;
    }
    let label = label.trim();
    if label.is_empty() {
        return None;
    }
    let mid = path.midpoint();
    Some(Position {
        x: mid.x,
        y: mid.y,
        width: text::display_width(label) * theme.label_char_width + theme.label_padding,
        height: theme.label_height,
    })
}
