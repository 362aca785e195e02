//! Cascading removal of a node's incident connections.
//!
//! A connection id is unique only within its source's outgoing list, so deletions are always
//! addressed by the composite `(source_id, connection_id)`. The coordinator mutates the external
//! store only; the caller refetches the graph afterward and recomputes the layout.

use flowline_core::GraphModel;
use flowline_core::model::FlowEdge;
use rustc_hash::{FxHashMap, FxHashSet};

/// One outgoing connection as the external store currently sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredConnection {
    pub connection_id: String,
    pub target_id: String,
    pub label: String,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// External connection store (network-backed in the real application).
///
/// Runtime-agnostic: no executor is assumed, and no `Send` bound is imposed — callers are
/// single-threaded UI integrations.
#[allow(async_fn_in_trait)]
pub trait ConnectionStore {
    async fn outgoing_connections(
        &self,
        source_id: &str,
    ) -> Result<Vec<StoredConnection>, StoreError>;

    async fn delete_connection(
        &self,
        source_id: &str,
        connection_id: &str,
    ) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemovedConnection {
    pub source_id: String,
    pub target_id: String,
    pub connection_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FailedRemoval {
    pub source_id: String,
    pub target_id: String,
    /// `None` when the source's connection listing itself failed.
    pub connection_id: Option<String>,
    pub reason: String,
}

/// Outcome of a best-effort cascade. `failed` carries full composite addresses, so a caller can
/// retry exactly the failed subset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemovalReport {
    pub removed: Vec<RemovedConnection>,
    pub failed: Vec<FailedRemoval>,
}

impl RemovalReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.removed.len() + self.failed.len()
    }
}

/// Deletes every connection incident to `node_id`, sequentially, one store call at a time.
///
/// Each edge's connection id is re-resolved against the owning source's *fresh* outgoing list
/// (fetched once per distinct source) rather than trusted from the snapshot. A failure on one
/// connection never blocks the others.
pub async fn remove_node<S: ConnectionStore>(
    store: &S,
    graph: &GraphModel,
    node_id: &str,
) -> RemovalReport {
    let mut report = RemovalReport::default();

    let mut seen: FxHashSet<(&str, &str)> = FxHashSet::default();
    let incident: Vec<&FlowEdge> = graph
        .incident(node_id)
        .into_iter()
        .filter(|e| seen.insert((e.source_id.as_str(), e.connection_id.as_str())))
        .collect();

    let mut listings: FxHashMap<String, Result<Vec<StoredConnection>, StoreError>> =
        FxHashMap::default();

    for edge in incident {
        if !listings.contains_key(&edge.source_id) {
            let listing = store.outgoing_connections(&edge.source_id).await;
            listings.insert(edge.source_id.clone(), listing);
        }

        let connections = match &listings[&edge.source_id] {
            Ok(connections) => connections,
            Err(err) => {
                report.failed.push(FailedRemoval {
                    source_id: edge.source_id.clone(),
                    target_id: edge.target_id.clone(),
                    connection_id: None,
                    reason: format!("listing connections failed: {err}"),
                });
                continue;
            }
        };

        // Prefer an exact connection-id match; fall back to (target, label) when the snapshot's
        // id went stale.
        let resolved = connections
            .iter()
            .find(|c| c.connection_id == edge.connection_id)
            .or_else(|| {
                connections
                    .iter()
                    .find(|c| c.target_id == edge.target_id && c.label == edge.label)
            });

        let Some(connection) = resolved else {
            // Already gone from the store; the post-removal refetch reconciles.
            report.removed.push(RemovedConnection {
                source_id: edge.source_id.clone(),
                target_id: edge.target_id.clone(),
                connection_id: edge.connection_id.clone(),
            });
            continue;
        };

        match store
            .delete_connection(&edge.source_id, &connection.connection_id)
            .await
        {
            Ok(()) => report.removed.push(RemovedConnection {
                source_id: edge.source_id.clone(),
                target_id: edge.target_id.clone(),
                connection_id: connection.connection_id.clone(),
            }),
            Err(err) => report.failed.push(FailedRemoval {
                source_id: edge.source_id.clone(),
                target_id: edge.target_id.clone(),
                connection_id: Some(connection.connection_id.clone()),
                reason: err.to_string(),
            }),
        }
    }

    report
}
