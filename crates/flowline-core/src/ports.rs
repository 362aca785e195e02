//! Virtual port synthesis.
//!
//! Ports are synthetic, never-persisted nodes inserted purely for visualization: every leaf gets
//! an output terminal below it, and every media-requiring root gets input terminals above it.
//! Ids are derived from the attached node, so repeated synthesis on unchanged input is idempotent.

use crate::graph::GraphModel;
use crate::level::LevelAssignment;
use crate::model::{MediaKind, OutputKind};
use serde::{Deserialize, Serialize};

/// Roots requiring more than this many media inputs get a single aggregated port instead of one
/// port per unit.
pub const MAX_INDIVIDUAL_INPUT_PORTS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortDirection {
    Input,
    Output,
}

/// What a port represents: the media a root consumes, or the artifact a leaf produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortKind {
    Input(MediaKind),
    Output(OutputKind),
}

impl PortKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Input(kind) => kind.as_str(),
            Self::Output(kind) => kind.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualPort {
    pub id: String,
    pub attached_node_id: String,
    pub direction: PortDirection,
    pub kind: PortKind,
    /// Units this port stands for. 1 for individual ports, the full requirement for an
    /// aggregated port.
    pub count: u32,
    pub index: u32,
    /// Logical level relative to the global numbering; input ports sit one band above their
    /// root, output ports one band below their leaf.
    pub level: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortSet {
    pub inputs: Vec<VirtualPort>,
    pub outputs: Vec<VirtualPort>,
}

impl PortSet {
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty() && self.outputs.is_empty()
    }

    pub fn has_inputs(&self) -> bool {
        !self.inputs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VirtualPort> {
        self.inputs.iter().chain(self.outputs.iter())
    }

    /// Input ports attached to one root, in index order.
    pub fn inputs_for(&self, node_id: &str) -> impl Iterator<Item = &VirtualPort> {
        self.inputs
            .iter()
            .filter(move |p| p.attached_node_id == node_id)
    }

    pub fn output_for(&self, node_id: &str) -> Option<&VirtualPort> {
        self.outputs.iter().find(|p| p.attached_node_id == node_id)
    }
}

pub fn synthesize_ports(g: &GraphModel, levels: &LevelAssignment) -> PortSet {
    let mut inputs: Vec<VirtualPort> = Vec::new();
    let mut outputs: Vec<VirtualPort> = Vec::new();

    for node in g.nodes() {
        let level = levels.level(&node.id).unwrap_or(0);

        if g.out_degree(&node.id) == 0 {
            outputs.push(VirtualPort {
                id: format!("output-{}", node.id),
                attached_node_id: node.id.clone(),
                direction: PortDirection::Output,
                kind: PortKind::Output(node.output),
                count: 1,
                index: 0,
                level: level + 1,
            });
        }

        if g.in_degree(&node.id) != 0 || !node.requires_media {
            continue;
        }
        // Permissive: a root flagged `requires_media` without usable metadata simply gets no
        // input ports.
        let (Some(kind), Some(count)) = (node.required_media_type, node.required_media_count)
        else {
            continue;
        };
        if count == 0 {
            continue;
        }

        if count <= MAX_INDIVIDUAL_INPUT_PORTS {
            for index in 0..count {
                inputs.push(VirtualPort {
                    id: format!("input-{}-{}", node.id, index),
                    attached_node_id: node.id.clone(),
                    direction: PortDirection::Input,
                    kind: PortKind::Input(kind),
                    count: 1,
                    index,
                    level: level - 1,
                });
            }
        } else {
            inputs.push(VirtualPort {
                id: format!("input-{}-aggregated", node.id),
                attached_node_id: node.id.clone(),
                direction: PortDirection::Input,
                kind: PortKind::Input(kind),
                count,
                index: 0,
                level: level - 1,
            });
        }
    }

    PortSet { inputs, outputs }
}
