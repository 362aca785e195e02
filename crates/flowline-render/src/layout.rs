//! Concrete positioning of real nodes and virtual ports.
//!
//! Levels stack top to bottom; within a level, nodes lay out left to right and the row is
//! horizontally centered in the container. Node height is content-aware (wrapped title lines
//! plus an optional preview strip) and is computed before level spacing, since a level's shared
//! height is the tallest box in it.

use crate::model::{Bounds, LayoutModel, Position};
use crate::text;
use crate::theme::{Metrics, Theme};
use flowline_core::graph::GraphModel;
use flowline_core::level::LevelAssignment;
use flowline_core::model::PromptNode;
use flowline_core::ports::PortSet;
use indexmap::IndexMap;
use std::collections::BTreeMap;

pub(crate) fn title_lines(node: &PromptNode, metrics: &Metrics, theme: &Theme) -> Vec<String> {
    if metrics.wrap_titles {
        text::wrap_title_lines(&node.title, metrics.node_width, theme.char_width)
    } else {
        vec![node.title.clone()]
    }
}

pub(crate) fn node_content_height(node: &PromptNode, metrics: &Metrics, theme: &Theme) -> f64 {
    let lines = title_lines(node, metrics, theme).len() as f64;
    let mut height =
        (lines * theme.line_height + theme.title_padding).max(metrics.base_node_height);
    if node.preview_url().is_some() {
        height += theme.preview_height;
    }
    height
}

pub fn layout_graph(
    g: &GraphModel,
    levels: &LevelAssignment,
    ports: &PortSet,
    container_width: f64,
    theme: &Theme,
) -> LayoutModel {
    let metrics = theme.metrics_for(container_width);
    let mut positions: IndexMap<String, Position> = IndexMap::new();

    // Group real nodes by level; snapshot order within a level is the left-to-right order.
    let mut rows: BTreeMap<i32, Vec<&PromptNode>> = BTreeMap::new();
    for node in g.nodes() {
        let level = levels.level(&node.id).unwrap_or(0);
        rows.entry(level).or_default().push(node);
    }

    let center_x = metrics.container_width / 2.0;
    let mut cursor = theme.margin;
    if ports.has_inputs() {
        // Reserve the top band so root input rows never clip at the canvas edge.
        cursor += theme.port_height + metrics.v_gap;
    }

    for nodes in rows.values() {
        let heights: Vec<f64> = nodes
            .iter()
            .map(|n| node_content_height(n, &metrics, theme))
            .collect();
        let row_height = heights
            .iter()
            .copied()
            .fold(metrics.base_node_height, f64::max);
        let count = nodes.len() as f64;
        let row_width = count * metrics.node_width + (count - 1.0) * metrics.h_gap;
        let start_x = center_x - row_width / 2.0 + metrics.node_width / 2.0;
        let row_center_y = cursor + row_height / 2.0;

        for (i, node) in nodes.iter().enumerate() {
            positions.insert(
                node.id.clone(),
                Position {
                    x: start_x + i as f64 * (metrics.node_width + metrics.h_gap),
                    y: row_center_y,
                    width: metrics.node_width,
                    height: heights[i],
                },
            );
        }
        cursor += row_height + metrics.v_gap;
    }

    // Input ports: a centered sub-row directly above each root, independent of other roots.
    for node in g.nodes() {
        let row: Vec<_> = ports.inputs_for(&node.id).collect();
        if row.is_empty() {
            continue;
        }
        let Some(anchor) = positions.get(node.id.as_str()).copied() else {
            continue;
        };
        let count = row.len() as f64;
        let row_width = count * theme.port_width + (count - 1.0) * theme.port_gap;
        let start_x = anchor.x - row_width / 2.0 + theme.port_width / 2.0;
        let y = anchor.top() - metrics.v_gap - theme.port_height / 2.0;

        for (i, port) in row.iter().enumerate() {
            positions.insert(
                port.id.clone(),
                Position {
                    x: start_x + i as f64 * (theme.port_width + theme.port_gap),
                    y,
                    width: theme.port_width,
                    height: theme.port_height,
                },
            );
        }
    }

    // Output ports: directly beneath their leaf, one band below.
    for port in &ports.outputs {
        let Some(anchor) = positions.get(port.attached_node_id.as_str()).copied() else {
            continue;
        };
        positions.insert(
            port.id.clone(),
            Position {
                x: anchor.x,
                y: anchor.bottom() + metrics.v_gap + theme.port_height / 2.0,
                width: theme.port_width,
                height: theme.port_height,
            },
        );
    }

    let height = match Bounds::from_positions(positions.values()) {
        Some(bounds) => bounds.max_y + theme.margin,
        None => theme.margin * 2.0,
    };

    LayoutModel {
        positions,
        width: metrics.container_width,
        height,
    }
}
