//! Explicit theme and responsive metrics.
//!
//! The drawing pipeline never inspects ambient environment state (no "dark mode" probing); the
//! embedding application picks a [`Theme`] and passes it in. Width-dependent sizing lives in
//! [`Metrics`], derived from the container width with three responsive tiers.

use serde::{Deserialize, Serialize};

/// Container width below which the narrow (single-column-ish) tier applies.
pub const NARROW_BREAKPOINT: f64 = 500.0;
/// Container width below which the medium tier applies.
pub const MEDIUM_BREAKPOINT: f64 = 700.0;
/// Used when the container reports a degenerate (zero or negative) width.
pub const FALLBACK_CONTAINER_WIDTH: f64 = 600.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: String,
    pub primary_fg: String,
    pub card: String,
    pub card_fg: String,
    pub border: String,
    pub muted: String,
    pub muted_fg: String,
    pub destructive: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub palette: Palette,
    /// Outer canvas margin.
    pub margin: f64,
    pub line_height: f64,
    pub node_corner_radius: f64,
    /// Extra box height for nodes that render a media preview strip.
    pub preview_height: f64,
    /// Vertical padding added around wrapped title lines.
    pub title_padding: f64,
    /// Approximate glyph width used for title wrapping estimates.
    pub char_width: f64,
    pub label_height: f64,
    pub label_corner_radius: f64,
    /// Approximate glyph width used for edge-label box sizing.
    pub label_char_width: f64,
    pub label_padding: f64,
    /// Containers narrower than this skip edge labels entirely rather than shrinking them
    /// unreadably.
    pub min_labeled_width: f64,
    pub port_width: f64,
    pub port_height: f64,
    /// Horizontal gap between sibling input ports in a root's sub-row.
    pub port_gap: f64,
    pub edge_stroke_width: f64,
}

impl Theme {
    pub fn light() -> Self {
        Self::with_palette(Palette {
            primary: "#18181b".to_string(),
            primary_fg: "#fafafa".to_string(),
            card: "#ffffff".to_string(),
            card_fg: "#09090b".to_string(),
            border: "#e4e4e7".to_string(),
            muted: "#f4f4f5".to_string(),
            muted_fg: "#71717a".to_string(),
            destructive: "#ef4444".to_string(),
        })
    }

    pub fn dark() -> Self {
        Self::with_palette(Palette {
            primary: "#f4f4f5".to_string(),
            primary_fg: "#18181b".to_string(),
            card: "#27272a".to_string(),
            card_fg: "#fafafa".to_string(),
            border: "#3f3f46".to_string(),
            muted: "#27272a".to_string(),
            muted_fg: "#a1a1aa".to_string(),
            destructive: "#ef4444".to_string(),
        })
    }

    fn with_palette(palette: Palette) -> Self {
        Self {
            palette,
            margin: 20.0,
            line_height: 14.0,
            node_corner_radius: 10.0,
            preview_height: 64.0,
            title_padding: 20.0,
            char_width: 6.0,
            label_height: 16.0,
            label_corner_radius: 8.0,
            label_char_width: 5.0,
            label_padding: 16.0,
            min_labeled_width: NARROW_BREAKPOINT,
            port_width: 56.0,
            port_height: 28.0,
            port_gap: 12.0,
            edge_stroke_width: 2.0,
        }
    }

    /// Width-dependent metrics for one layout pass.
    pub fn metrics_for(&self, container_width: f64) -> Metrics {
        let width = if container_width.is_finite() && container_width > 0.0 {
            container_width
        } else {
            FALLBACK_CONTAINER_WIDTH
        };

        if width < NARROW_BREAKPOINT {
            Metrics {
                container_width: width,
                node_width: (width - 40.0).max(1.0),
                base_node_height: 36.0,
                h_gap: 20.0,
                v_gap: 50.0,
                font_size: 10.0,
                label_font_size: 8.0,
                wrap_titles: false,
                draw_labels: width >= self.min_labeled_width,
            }
        } else if width < MEDIUM_BREAKPOINT {
            Metrics {
                container_width: width,
                node_width: (width * 0.35).min(160.0),
                base_node_height: 40.0,
                h_gap: 40.0,
                v_gap: 100.0,
                font_size: 11.0,
                label_font_size: 9.0,
                wrap_titles: true,
                draw_labels: width >= self.min_labeled_width,
            }
        } else {
            Metrics {
                container_width: width,
                node_width: (width * 0.3).min(200.0),
                base_node_height: 40.0,
                h_gap: 60.0,
                v_gap: 100.0,
                font_size: 11.0,
                label_font_size: 9.0,
                wrap_titles: true,
                draw_labels: width >= self.min_labeled_width,
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Resolved sizing values for a single layout pass at a given container width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub container_width: f64,
    pub node_width: f64,
    pub base_node_height: f64,
    pub h_gap: f64,
    pub v_gap: f64,
    pub font_size: f64,
    pub label_font_size: f64,
    /// Narrow containers render titles on a single line instead of wrapping.
    pub wrap_titles: bool,
    pub draw_labels: bool,
}
