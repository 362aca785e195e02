#![forbid(unsafe_code)]

//! Interaction layer on top of the workflow graph model: hover/tooltip handling and cascading
//! connection removal.
//!
//! Nothing here touches the layout pipeline; both modules consume the immutable
//! [`flowline_core::GraphModel`] / drawing model and talk to the outside world through injected
//! hooks ([`hover::NavigationSink`], [`removal::ConnectionStore`]).

pub mod hover;
pub mod removal;

pub use hover::{
    DEFAULT_HIDE_GRACE, HoverController, HoverState, NavigationSink, TooltipSpec, place_tooltip,
};
pub use removal::{
    ConnectionStore, FailedRemoval, RemovalReport, RemovedConnection, StoreError,
    StoredConnection, remove_node,
};
