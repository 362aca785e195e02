//! Validated, immutable graph model with deterministic adjacency queries.
//!
//! Upstream can hand us stale references (a connection whose endpoint was deleted after the
//! snapshot was assembled). Those edges are dropped with a warning rather than failing the whole
//! render; only structurally unusable input (duplicate or empty node ids) is an error.

use crate::error::{Error, Result};
use crate::model::{FlowEdge, GraphSnapshot, PromptNode};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct GraphModel {
    nodes: Vec<PromptNode>,
    node_index: FxHashMap<String, usize>,
    edges: Vec<FlowEdge>,
    out: Vec<Vec<usize>>,
    in_: Vec<Vec<usize>>,
    current_id: Option<String>,
    warnings: Vec<String>,
}

impl GraphModel {
    /// Builds a graph model from a snapshot, dropping edges with unresolvable endpoints.
    pub fn build(snapshot: &GraphSnapshot) -> Result<Self> {
        let mut node_index: FxHashMap<String, usize> = FxHashMap::default();
        for (idx, node) in snapshot.nodes.iter().enumerate() {
            if node.id.is_empty() {
                return Err(Error::malformed(format!("node #{idx} has an empty id")));
            }
            if node_index.insert(node.id.clone(), idx).is_some() {
                return Err(Error::malformed(format!("duplicate node id `{}`", node.id)));
            }
        }

        let mut warnings: Vec<String> = Vec::new();
        let mut edges: Vec<FlowEdge> = Vec::with_capacity(snapshot.edges.len());
        for edge in &snapshot.edges {
            let known = node_index.contains_key(&edge.source_id)
                && node_index.contains_key(&edge.target_id);
            if !known {
                warnings.push(format!(
                    "dropping connection {} -> {}: unknown endpoint",
                    edge.source_id, edge.target_id
                ));
                continue;
            }
            edges.push(edge.clone());
        }

        // The store orders a source's outgoing connections by `order`; a stable sort on
        // (source, order) keeps sibling edges in that order no matter how the snapshot
        // interleaved them.
        edges.sort_by_key(|e| (node_index[&e.source_id], e.order));

        let mut out: Vec<Vec<usize>> = vec![Vec::new(); snapshot.nodes.len()];
        let mut in_: Vec<Vec<usize>> = vec![Vec::new(); snapshot.nodes.len()];
        for (edge_idx, e) in edges.iter().enumerate() {
            out[node_index[&e.source_id]].push(edge_idx);
            in_[node_index[&e.target_id]].push(edge_idx);
        }

        Ok(Self {
            nodes: snapshot.nodes.clone(),
            node_index,
            edges,
            out,
            in_,
            current_id: snapshot.current_id.clone(),
            warnings,
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&PromptNode> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx])
    }

    /// All nodes, in snapshot order.
    pub fn nodes(&self) -> &[PromptNode] {
        &self.nodes
    }

    /// All surviving edges, grouped by source and ordered by `order` within a source.
    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current_id.as_deref()
    }

    pub fn out_degree(&self, id: &str) -> usize {
        self.node_index
            .get(id)
            .map(|&idx| self.out[idx].len())
            .unwrap_or(0)
    }

    pub fn in_degree(&self, id: &str) -> usize {
        self.node_index
            .get(id)
            .map(|&idx| self.in_[idx].len())
            .unwrap_or(0)
    }

    pub fn outgoing(&self, id: &str) -> impl Iterator<Item = &FlowEdge> {
        self.adjacent(id, &self.out)
    }

    pub fn incoming(&self, id: &str) -> impl Iterator<Item = &FlowEdge> {
        self.adjacent(id, &self.in_)
    }

    /// Every edge touching `id`, outgoing first, each list in deterministic order.
    pub fn incident(&self, id: &str) -> Vec<&FlowEdge> {
        self.outgoing(id).chain(self.incoming(id)).collect()
    }

    /// Non-fatal anomalies collected while building (dropped edges).
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn adjacent<'a>(&'a self, id: &str, lists: &'a [Vec<usize>]) -> impl Iterator<Item = &'a FlowEdge> {
        let indices: &[usize] = self
            .node_index
            .get(id)
            .map(|&idx| lists[idx].as_slice())
            .unwrap_or(&[]);
        indices.iter().map(move |&edge_idx| &self.edges[edge_idx])
    }
}
