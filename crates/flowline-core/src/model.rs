//! Wire-facing snapshot types.
//!
//! The embedding application fetches a workflow graph as JSON (camelCase fields, SCREAMING enum
//! values) and hands it to [`crate::GraphModel::build`]. These types mirror that payload; they
//! carry no layout state.

use serde::{Deserialize, Serialize};

/// What a prompt produces when run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OutputKind {
    Text,
    Image,
    Video,
    Audio,
    Structured,
    Skill,
}

impl OutputKind {
    /// Visual outputs can carry a preview strip in the rendered node.
    pub fn is_visual(self) -> bool {
        matches!(self, Self::Image | Self::Video)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
            Self::Audio => "AUDIO",
            Self::Structured => "STRUCTURED",
            Self::Skill => "SKILL",
        }
    }
}

/// Media a root prompt requires as input before it can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MediaKind {
    Image,
    Video,
    Document,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
            Self::Document => "DOCUMENT",
        }
    }
}

/// A prompt in the workflow.
///
/// Identity is stable across layout runs: two snapshots of the same graph agree on `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptNode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub content: String,
    #[serde(rename = "outputType")]
    pub output: OutputKind,
    pub author_id: String,
    #[serde(default)]
    pub author_username: Option<String>,
    #[serde(default)]
    pub author_avatar: Option<String>,
    #[serde(default)]
    pub requires_media: bool,
    #[serde(default)]
    pub required_media_type: Option<MediaKind>,
    #[serde(default)]
    pub required_media_count: Option<u32>,
    #[serde(default)]
    pub preview_media_url: Option<String>,
}

impl PromptNode {
    /// The preview URL, but only for output kinds that can render one.
    ///
    /// The upstream store keeps `previewMediaUrl` populated for historical rows regardless of the
    /// current output type, so the field alone is not trustworthy.
    pub fn preview_url(&self) -> Option<&str> {
        if self.output.is_visual() {
            self.preview_media_url.as_deref()
        } else {
            None
        }
    }
}

/// A directed "feeds into" connection between two prompts.
///
/// `connection_id` is the handle the external store needs for deletion. It is unique only within
/// the edges owned by `source_id`; always address a connection as `(source_id, connection_id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEdge {
    pub source_id: String,
    pub target_id: String,
    #[serde(default)]
    pub label: String,
    pub connection_id: String,
    /// Sibling sort key within a source's outgoing connections.
    #[serde(default)]
    pub order: u32,
}

/// A full graph fetch: every prompt reachable from the focal prompt, plus the connections
/// between them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: Vec<PromptNode>,
    #[serde(default)]
    pub edges: Vec<FlowEdge>,
    /// The prompt this graph was fetched for, if any.
    #[serde(default, rename = "currentPromptId")]
    pub current_id: Option<String>,
}
