//! Hover/tooltip state machine and viewport-aware tooltip placement.
//!
//! The controller is an explicit state machine driven by pointer events and a polled clock; it
//! owns no timer and reads no clock itself, so embeddings (and tests) stay deterministic. At most
//! one hide deadline exists at a time: scheduling a new one supersedes any pending one.

use flowline_core::geom::{Rect, Size, rect};
use std::time::{Duration, Instant};

/// Grace period between pointer-out and tooltip hide, long enough for the pointer to travel from
/// the node onto the tooltip without flicker.
pub const DEFAULT_HIDE_GRACE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverState {
    Idle,
    Hovering { node: String },
    PendingHide { node: String, deadline: Instant },
}

/// External navigation hook invoked on node click; opaque to the engine.
pub trait NavigationSink {
    fn navigate_to(&mut self, node_id: &str);
}

#[derive(Debug, Clone)]
pub struct HoverController {
    state: HoverState,
    grace: Duration,
    focal: Option<String>,
}

impl HoverController {
    /// `focal` is the prompt the graph was opened from; it neither shows a hover card nor
    /// navigates on click.
    pub fn new(focal: Option<String>) -> Self {
        Self::with_grace(focal, DEFAULT_HIDE_GRACE)
    }

    pub fn with_grace(focal: Option<String>, grace: Duration) -> Self {
        Self {
            state: HoverState::Idle,
            grace,
            focal,
        }
    }

    pub fn state(&self) -> &HoverState {
        &self.state
    }

    /// The node whose tooltip is (still) showing, if any.
    pub fn hovered(&self) -> Option<&str> {
        match &self.state {
            HoverState::Idle => None,
            HoverState::Hovering { node } | HoverState::PendingHide { node, .. } => Some(node),
        }
    }

    /// Pointer entered a node. Cancels any pending hide. Returns whether the tooltip target
    /// changed.
    pub fn enter_node(&mut self, node_id: &str) -> bool {
        if self.focal.as_deref() == Some(node_id) {
            return false;
        }
        let changed = self.hovered() != Some(node_id);
        self.state = HoverState::Hovering {
            node: node_id.to_string(),
        };
        changed
    }

    /// Pointer left the hovered node: schedule a hide instead of hiding immediately.
    pub fn leave_node(&mut self, now: Instant) {
        self.schedule_hide(now);
    }

    /// Pointer reached the tooltip before the grace elapsed: keep it up.
    pub fn enter_tooltip(&mut self) {
        if let HoverState::PendingHide { node, .. } = &self.state {
            self.state = HoverState::Hovering { node: node.clone() };
        }
    }

    /// Pointer left the tooltip: same grace as leaving the node.
    pub fn leave_tooltip(&mut self, now: Instant) {
        self.schedule_hide(now);
    }

    /// Applies an elapsed deadline. Returns true when the tooltip hid on this poll.
    pub fn poll(&mut self, now: Instant) -> bool {
        if let HoverState::PendingHide { deadline, .. } = &self.state {
            if now >= *deadline {
                self.state = HoverState::Idle;
                return true;
            }
        }
        false
    }

    /// Click on a node navigates to it, unless it is the focal node.
    pub fn click(&self, node_id: &str, sink: &mut dyn NavigationSink) {
        if self.focal.as_deref() != Some(node_id) {
            sink.navigate_to(node_id);
        }
    }

    fn schedule_hide(&mut self, now: Instant) {
        let node = match &self.state {
            HoverState::Idle => return,
            HoverState::Hovering { node } | HoverState::PendingHide { node, .. } => node.clone(),
        };
        self.state = HoverState::PendingHide {
            node,
            deadline: now + self.grace,
        };
    }
}

/// Fixed tooltip geometry knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipSpec {
    pub size: Size,
    /// Horizontal overlap with the node edge, easing the pointer transition onto the card.
    pub overlap: f64,
    /// Safety margin kept from the viewport edges.
    pub margin: f64,
}

impl Default for TooltipSpec {
    fn default() -> Self {
        Self {
            size: flowline_core::geom::size(320.0, 240.0),
            overlap: 8.0,
            margin: 16.0,
        }
    }
}

/// Computes the tooltip rect for a hovered node.
///
/// All rects are in viewport coordinates. Preference order: right of the node (slightly
/// overlapping), flipped to the left when it would overflow the container's right edge; vertically
/// centered on the node, clamped into the visible viewport when the viewport can fit the card,
/// then clamped into container bounds. A degenerate container clamps to its origin rather than
/// failing.
pub fn place_tooltip(
    node: Rect,
    spec: &TooltipSpec,
    container: Rect,
    viewport_height: f64,
) -> Rect {
    let width = spec.size.width;
    let height = spec.size.height;

    let mut x = node.max_x() - spec.overlap;
    if x + width > container.max_x() {
        x = node.min_x() - width + spec.overlap;
    }
    x = clamp_range(x, container.min_x(), container.max_x() - width);

    let mut y = node.origin.y + node.size.height / 2.0 - height / 2.0;
    if viewport_height >= height + 2.0 * spec.margin {
        y = clamp_range(y, spec.margin, viewport_height - spec.margin - height);
    }
    y = clamp_range(y, container.min_y(), container.max_y() - height);

    rect(x, y, width, height)
}

fn clamp_range(v: f64, lo: f64, hi: f64) -> f64 {
    if hi < lo {
        // Degenerate range (container smaller than the tooltip): pin to the low edge.
        return lo;
    }
    v.clamp(lo, hi)
}
