//! Drag-to-resize sessions
//!
//! A resize drag moves one boundary between two adjacent panels. The
//! session captures the pair's sizes at drag start and turns each
//! pointer position into a zero-sum proposal: whatever one panel gains
//! the other loses, clamped so neither side falls below the minimum
//! floor. Panels outside the pair are never touched, so the layout
//! total is preserved for every proposal.

use super::error::SplitViewError;
use super::layout::{MIN_PANEL_SIZE, SplitLayout};

/// Proposed sizes for the adjacent pair of a resize session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairSizes {
    /// New size of the left (or upper) panel, in percent.
    pub left: f64,
    /// New size of the right (or lower) panel, in percent.
    pub right: f64,
}

/// State of one in-flight resize drag.
///
/// Created by [`ResizeSession::begin`] when the pointer goes down on a
/// boundary and dropped when the drag ends. The captured start sizes
/// make every proposal a pure function of the current pointer position,
/// so intermediate updates never accumulate rounding drift.
#[derive(Debug, Clone, Copy)]
pub struct ResizeSession {
    /// Index of the left/upper panel of the dragged boundary.
    boundary: usize,
    /// Pointer position along the split axis when the drag started, in pixels.
    start_pos: f64,
    /// Size of the left panel at drag start, in percent.
    start_left: f64,
    /// Size of the right panel at drag start, in percent.
    start_right: f64,
}

impl ResizeSession {
    /// Starts a drag on the boundary between panels `boundary` and
    /// `boundary + 1`.
    ///
    /// `start_pos` is the pointer position along the split axis in
    /// pixels; later positions are compared against it to compute the
    /// travelled delta.
    ///
    /// # Errors
    ///
    /// Returns `SplitViewError::BoundaryOutOfRange` when `boundary + 1`
    /// is not a valid panel index.
    pub fn begin(
        layout: &SplitLayout,
        boundary: usize,
        start_pos: f64,
    ) -> Result<Self, SplitViewError> {
        let panels = layout.panels();
        if boundary + 1 >= panels.len() {
            return Err(SplitViewError::BoundaryOutOfRange(boundary));
        }
        Ok(Self {
            boundary,
            start_pos,
            start_left: panels[boundary].size,
            start_right: panels[boundary + 1].size,
        })
    }

    /// Returns the index of the dragged boundary.
    #[must_use]
    pub const fn boundary(&self) -> usize {
        self.boundary
    }

    /// Returns the pair sizes captured at drag start.
    ///
    /// Used to revert a cancelled drag.
    #[must_use]
    pub const fn start_sizes(&self) -> PairSizes {
        PairSizes {
            left: self.start_left,
            right: self.start_right,
        }
    }

    /// Computes the pair sizes for the pointer at `pos`.
    ///
    /// `extent` is the container's pixel length along the split axis,
    /// used to convert the pixel delta into percentage points. Returns
    /// `None` when no meaningful proposal exists: a non-positive
    /// extent, or a pair so small that both panels already sit at the
    /// floor. Otherwise the result is clamped so both sides stay at or
    /// above [`MIN_PANEL_SIZE`], and `left + right` always equals the
    /// pair's combined start size.
    #[must_use]
    pub fn proposal(&self, pos: f64, extent: f64) -> Option<PairSizes> {
        if extent <= 0.0 {
            return None;
        }
        let combined = self.start_left + self.start_right;
        if combined < 2.0 * MIN_PANEL_SIZE {
            // Both panels pinned at the floor; the boundary cannot move.
            return None;
        }

        let delta = (pos - self.start_pos) / extent * 100.0;
        let left = (self.start_left + delta).clamp(MIN_PANEL_SIZE, combined - MIN_PANEL_SIZE);
        Some(PairSizes {
            left,
            right: combined - left,
        })
    }
}
