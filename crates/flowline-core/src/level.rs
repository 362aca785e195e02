//! Level assignment via Kahn's algorithm.
//!
//! Levels are longest-path ranks from the nearest root: for every surviving edge `s -> t`,
//! `level(t) > level(s)`. The FIFO queue is seeded and drained in snapshot order, so repeated
//! runs on unchanged input produce identical levels.

use crate::graph::GraphModel;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub struct LevelAssignment {
    levels: FxHashMap<String, i32>,
    /// Set when the queue drained with unresolved nodes left (a cycle). The domain guarantees
    /// acyclic workflows; this is a defensive fallback, not a feature.
    pub has_cycle_anomaly: bool,
}

impl LevelAssignment {
    pub fn level(&self, id: &str) -> Option<i32> {
        self.levels.get(id).copied()
    }

    pub fn max_level(&self) -> i32 {
        self.levels.values().copied().max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

pub fn assign_levels(g: &GraphModel) -> LevelAssignment {
    let mut in_deg: FxHashMap<&str, usize> = g
        .nodes()
        .iter()
        .map(|n| (n.id.as_str(), g.in_degree(&n.id)))
        .collect();

    let mut levels: FxHashMap<String, i32> = FxHashMap::default();
    let mut queue: VecDeque<&str> = VecDeque::new();
    for node in g.nodes() {
        if in_deg[node.id.as_str()] == 0 {
            levels.insert(node.id.clone(), 0);
            queue.push_back(node.id.as_str());
        }
    }

    let mut resolved: FxHashSet<&str> = FxHashSet::default();
    while let Some(u) = queue.pop_front() {
        resolved.insert(u);
        let level_u = levels[u];
        for edge in g.outgoing(u) {
            let v = edge.target_id.as_str();
            let entry = levels.entry(v.to_string()).or_insert(level_u + 1);
            if *entry < level_u + 1 {
                *entry = level_u + 1;
            }
            let deg = in_deg
                .get_mut(v)
                .expect("edge target resolved during graph build");
            *deg -= 1;
            if *deg == 0 {
                queue.push_back(v);
            }
        }
    }

    let mut has_cycle_anomaly = false;
    if resolved.len() < g.node_count() {
        // Cycle fallback: everything the drain never reached lands on one synthetic trailing
        // level, in snapshot order. Tentative levels assigned through relaxation are discarded.
        has_cycle_anomaly = true;
        let max_assigned = resolved
            .iter()
            .map(|id| levels[*id])
            .max()
            .unwrap_or(-1);
        for node in g.nodes() {
            if !resolved.contains(node.id.as_str()) {
                levels.insert(node.id.clone(), max_assigned + 1);
            }
        }
    }

    LevelAssignment {
        levels,
        has_cycle_anomaly,
    }
}
