//! Error types for split view operations
//!
//! Every error here is a policy violation rather than a fault: callers
//! are expected to treat them as refused mutations (the layout is left
//! untouched), not as conditions worth aborting over.

use super::types::PanelId;

/// Errors that can occur during split view operations.
#[derive(Debug, thiserror::Error)]
pub enum SplitViewError {
    /// The layout already holds the maximum number of panels.
    #[error("cannot add panel: layout already holds {max} panels")]
    CapacityReached {
        /// The configured panel ceiling.
        max: usize,
    },

    /// Cannot remove the last panel in a layout.
    #[error("cannot remove the last panel")]
    CannotRemoveLastPanel,

    /// The specified panel was not found.
    #[error("panel not found: {0}")]
    PanelNotFound(PanelId),

    /// The boundary index does not sit between two panels.
    #[error("no panel boundary at index {0}")]
    BoundaryOutOfRange(usize),

    /// A resize drag is already in progress.
    #[error("a resize drag is already in progress")]
    DragInProgress,
}
