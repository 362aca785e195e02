#![forbid(unsafe_code)]

//! Headless layout + drawing model for workflow graphs.
//!
//! The pipeline is a pure function of its inputs: snapshot -> graph model -> levels -> virtual
//! ports -> positions -> routed edges -> [`model::Drawing`]. Calling it twice with identical
//! inputs yields bit-identical output; there is no retained layout state, so it is safe to
//! re-run on every data change or container resize.

pub mod layout;
pub mod model;
pub mod route;
pub mod text;
pub mod theme;

use flowline_core::model::{OutputKind, PromptNode};
use flowline_core::ports::VirtualPort;
use flowline_core::{GraphModel, GraphSnapshot, assign_levels, synthesize_ports};
use model::{DrawCommand, Drawing, EdgePath, StrokeStyle};
use theme::Theme;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] flowline_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub struct DrawingOptions {
    pub container_width: f64,
    pub theme: Theme,
}

impl Default for DrawingOptions {
    fn default() -> Self {
        Self {
            container_width: theme::FALLBACK_CONTAINER_WIDTH,
            theme: Theme::light(),
        }
    }
}

/// Builds the graph model from a snapshot and draws it.
pub fn draw_snapshot(snapshot: &GraphSnapshot, options: &DrawingOptions) -> Result<Drawing> {
    let graph = GraphModel::build(snapshot)?;
    Ok(draw_graph(&graph, options))
}

/// Full recomputation: levels, ports, positions, routes, command list.
pub fn draw_graph(g: &GraphModel, options: &DrawingOptions) -> Drawing {
    let theme = &options.theme;
    let metrics = theme.metrics_for(options.container_width);
    let levels = assign_levels(g);
    let ports = synthesize_ports(g, &levels);
    let layout = layout::layout_graph(g, &levels, &ports, options.container_width, theme);

    let stroke = StrokeStyle {
        color: format!("{}50", theme.palette.muted_fg),
        width: theme.edge_stroke_width,
        arrow_end: true,
    };

    let mut labeled_paths: Vec<(EdgePath, &str)> = Vec::new();
    for edge in g.edges() {
        let (Some(source), Some(target)) = (
            layout.position(&edge.source_id),
            layout.position(&edge.target_id),
        ) else {
            continue;
        };
        labeled_paths.push((route::route_edge(source, target), edge.label.as_str()));
    }

    let mut port_paths: Vec<EdgePath> = Vec::new();
    for port in &ports.inputs {
        if let (Some(port_pos), Some(node_pos)) = (
            layout.position(&port.id),
            layout.position(&port.attached_node_id),
        ) {
            port_paths.push(route::route_edge(port_pos, node_pos));
        }
    }
    for port in &ports.outputs {
        if let (Some(node_pos), Some(port_pos)) = (
            layout.position(&port.attached_node_id),
            layout.position(&port.id),
        ) {
            port_paths.push(route::route_edge(node_pos, port_pos));
        }
    }

    let mut commands: Vec<DrawCommand> =
        Vec::with_capacity(labeled_paths.len() * 2 + port_paths.len() + g.node_count());

    for (path, _) in &labeled_paths {
        commands.push(DrawCommand::Edge {
            path: *path,
            stroke: stroke.clone(),
        });
    }
    for path in &port_paths {
        commands.push(DrawCommand::Edge {
            path: *path,
            stroke: stroke.clone(),
        });
    }

    for (path, label) in &labeled_paths {
        if let Some(rect) = route::label_box(path, label, theme, &metrics) {
            commands.push(DrawCommand::Label {
                rect,
                text: label.trim().to_string(),
            });
        }
    }

    for port in ports.iter() {
        if let Some(rect) = layout.position(&port.id) {
            commands.push(DrawCommand::Port {
                id: port.id.clone(),
                rect: *rect,
                direction: port.direction,
                port: port.kind,
                label: port_label(port),
            });
        }
    }

    for node in g.nodes() {
        let Some(rect) = layout.position(&node.id) else {
            continue;
        };
        commands.push(DrawCommand::Node {
            id: node.id.clone(),
            rect: *rect,
            title: node.title.clone(),
            title_lines: layout::title_lines(node, &metrics, theme),
            preview_url: node.preview_url().map(str::to_string),
            badges: node_badges(node),
            is_current: g.current_id() == Some(node.id.as_str()),
        });
    }

    let mut warnings = g.warnings().to_vec();
    if levels.has_cycle_anomaly {
        warnings
            .push("workflow contains a cycle; unresolved prompts placed on a trailing level".to_string());
    }

    Drawing {
        commands,
        width: layout.width,
        height: layout.height,
        has_cycle_anomaly: levels.has_cycle_anomaly,
        warnings,
    }
}

fn port_label(port: &VirtualPort) -> String {
    if port.count > 1 {
        format!("{}x {}", port.count, port.kind.as_str())
    } else {
        port.kind.as_str().to_string()
    }
}

fn node_badges(node: &PromptNode) -> Vec<String> {
    let mut badges = Vec::new();
    if node.output != OutputKind::Text {
        badges.push(node.output.as_str().to_string());
    }
    if node.requires_media {
        if let (Some(kind), Some(count)) = (node.required_media_type, node.required_media_count) {
            if count > 1 {
                badges.push(format!("{}x {}", count, kind.as_str()));
            } else {
                badges.push(kind.as_str().to_string());
            }
        }
    }
    badges
}
