#![forbid(unsafe_code)]

//! `flowline` is a headless visualization engine for prompt-workflow graphs.
//!
//! Given a snapshot of prompts linked by directed "feeds into" connections, it computes a
//! deterministic top-to-bottom layout with synthesized input/output ports and emits an immutable,
//! renderer-agnostic drawing command list. Layout is a pure function of `(snapshot, container
//! width, theme)`; rerun it on every data change or resize.
//!
//! # Features
//!
//! - `render`: enable layout + the drawing model (`flowline::render`)
//! - `view`: enable the interaction layer (`flowline::view`): hover/tooltip state machine and
//!   cascading connection removal

pub use flowline_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use flowline_render::model::{
        Bounds, DrawCommand, Drawing, EdgePath, LayoutModel, LayoutPoint, Position, StrokeStyle,
    };
    pub use flowline_render::theme::{Metrics, Palette, Theme};
    pub use flowline_render::{DrawingOptions, draw_graph, draw_snapshot};

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Graph(#[from] flowline_core::Error),
        #[error(transparent)]
        Render(#[from] flowline_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// One-call convenience: deserialize-adjacent callers that already hold a snapshot get a
    /// drawing back without touching the intermediate stages.
    pub fn drawing_for_snapshot(
        snapshot: &flowline_core::GraphSnapshot,
        container_width: f64,
        theme: &Theme,
    ) -> Result<Drawing> {
        let options = DrawingOptions {
            container_width,
            theme: theme.clone(),
        };
        Ok(flowline_render::draw_snapshot(snapshot, &options)?)
    }
}

#[cfg(feature = "view")]
pub mod view {
    pub use flowline_view::hover::{
        DEFAULT_HIDE_GRACE, HoverController, HoverState, NavigationSink, TooltipSpec,
        place_tooltip,
    };
    pub use flowline_view::removal::{
        ConnectionStore, FailedRemoval, RemovalReport, RemovedConnection, StoreError,
        StoredConnection, remove_node,
    };
}
