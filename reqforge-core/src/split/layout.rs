//! Split layout engine
//!
//! `SplitLayout` holds the ordered panel registry and enforces the size
//! invariants on every mutation:
//!
//! - sizes always sum to 100% of the active axis at stable moments,
//! - no panel falls below the minimum floor,
//! - the panel count stays between one and the configured maximum.
//!
//! Absolute offsets are never stored; [`SplitLayout::spans`] derives
//! them from the size sequence on demand, so a stale cached position
//! can never contradict the sizes.

use tracing::{debug, warn};

use super::error::SplitViewError;
use super::panel::{Panel, PanelSnapshot};
use super::resize::PairSizes;
use super::types::{ContentId, Orientation, PanelId};

/// Maximum number of panels a layout may hold.
pub const MAX_PANELS: usize = 4;

/// Minimum percentage share any panel may hold.
pub const MIN_PANEL_SIZE: f64 = 10.0;

/// The full extent of the split axis, in percent.
pub const FULL_SIZE: f64 = 100.0;

/// Tolerance used when comparing size sums against [`FULL_SIZE`].
pub const SIZE_EPSILON: f64 = 1e-6;

/// The derived placement of one panel along the active axis.
///
/// `offset` is the running sum of the sizes of all preceding panels;
/// the panel occupies `[offset, offset + size)` in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSpan {
    /// The panel occupying this span.
    pub id: PanelId,
    /// Start of the span, in percent of the axis.
    pub offset: f64,
    /// Length of the span, in percent of the axis.
    pub size: f64,
}

/// Ordered panel registry plus the layout-global state.
///
/// A layout always holds at least one panel. Mutations that would
/// violate an invariant return an error and leave the layout untouched;
/// nothing here panics.
#[derive(Debug, Clone)]
pub struct SplitLayout {
    /// Panels in display order along the active axis.
    panels: Vec<Panel>,
    /// Axis along which panels are arranged.
    orientation: Orientation,
    /// Whether scroll offsets are mirrored across panels.
    sync_scrolling: bool,
}

impl SplitLayout {
    /// Creates a layout with a single empty full-size panel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            panels: vec![Panel::new(FULL_SIZE)],
            orientation: Orientation::Horizontal,
            sync_scrolling: false,
        }
    }

    /// Creates a layout with the given content in the initial panel.
    #[must_use]
    pub fn with_content(content: ContentId) -> Self {
        Self {
            panels: vec![Panel::with_content(content, FULL_SIZE)],
            orientation: Orientation::Horizontal,
            sync_scrolling: false,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns the number of panels in the layout.
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Returns the panels in display order.
    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Returns all panel IDs in display order.
    #[must_use]
    pub fn panel_ids(&self) -> Vec<PanelId> {
        self.panels.iter().map(|p| p.id).collect()
    }

    /// Returns true if the layout contains a panel with the given ID.
    #[must_use]
    pub fn contains_panel(&self, panel_id: PanelId) -> bool {
        self.index_of(panel_id).is_some()
    }

    /// Returns the current orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns true if scroll mirroring is enabled.
    #[must_use]
    pub const fn sync_scrolling(&self) -> bool {
        self.sync_scrolling
    }

    /// Enables or disables scroll mirroring.
    pub fn set_sync_scrolling(&mut self, enabled: bool) {
        self.sync_scrolling = enabled;
    }

    /// Returns the size share of a panel, if it exists.
    #[must_use]
    pub fn size_of(&self, panel_id: PanelId) -> Option<f64> {
        self.index_of(panel_id).map(|i| self.panels[i].size)
    }

    /// Returns the content mounted in a panel, if any.
    ///
    /// Returns `None` both for an empty panel and for an unknown ID.
    #[must_use]
    pub fn panel_content(&self, panel_id: PanelId) -> Option<ContentId> {
        self.index_of(panel_id).and_then(|i| self.panels[i].content)
    }

    /// Returns the sum of all panel sizes.
    ///
    /// At any stable moment this is `100.0` within [`SIZE_EPSILON`].
    #[must_use]
    pub fn total_size(&self) -> f64 {
        self.panels.iter().map(|p| p.size).sum()
    }

    /// Derives the span of every panel along the active axis.
    ///
    /// Offsets are prefix sums of the size sequence, computed fresh on
    /// every call; they are never cached.
    #[must_use]
    pub fn spans(&self) -> Vec<PanelSpan> {
        let mut offset = 0.0;
        self.panels
            .iter()
            .map(|p| {
                let span = PanelSpan {
                    id: p.id,
                    offset,
                    size: p.size,
                };
                offset += p.size;
                span
            })
            .collect()
    }

    /// Captures a snapshot of every panel for the change notification.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PanelSnapshot> {
        self.panels.iter().map(PanelSnapshot::from).collect()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Appends a new panel and redistributes all sizes equally.
    ///
    /// Existing panels keep their relative order; the new panel is
    /// appended last. Every panel, including the new one, ends up with
    /// `100 / (n + 1)` percent.
    ///
    /// # Errors
    ///
    /// Returns `SplitViewError::CapacityReached` when the layout already
    /// holds [`MAX_PANELS`] panels. The layout is left unchanged.
    pub fn add_panel(&mut self, content: Option<ContentId>) -> Result<PanelId, SplitViewError> {
        if self.panels.len() >= MAX_PANELS {
            warn!(count = self.panels.len(), "refusing to add panel: at capacity");
            return Err(SplitViewError::CapacityReached { max: MAX_PANELS });
        }

        let panel = match content {
            Some(content) => Panel::with_content(content, 0.0),
            None => Panel::new(0.0),
        };
        let id = panel.id;
        self.panels.push(panel);
        self.distribute_equally();
        debug!(%id, count = self.panels.len(), "panel added");
        Ok(id)
    }

    /// Removes a panel and redistributes the remaining sizes equally.
    ///
    /// Returns the content reference that was mounted in the removed
    /// panel so the owner can re-home it.
    ///
    /// # Errors
    ///
    /// - `SplitViewError::CannotRemoveLastPanel` when only one panel
    ///   remains (the layout always keeps at least one).
    /// - `SplitViewError::PanelNotFound` for an unknown ID.
    pub fn remove_panel(&mut self, panel_id: PanelId) -> Result<Option<ContentId>, SplitViewError> {
        if self.panels.len() == 1 {
            warn!(%panel_id, "refusing to remove the last panel");
            return Err(SplitViewError::CannotRemoveLastPanel);
        }
        let index = self
            .index_of(panel_id)
            .ok_or(SplitViewError::PanelNotFound(panel_id))?;

        let removed = self.panels.remove(index);
        self.distribute_equally();
        debug!(%panel_id, count = self.panels.len(), "panel removed");
        Ok(removed.content)
    }

    /// Redistributes all current panel sizes equally.
    ///
    /// Idempotent: calling it twice yields the same size vector as once.
    pub fn reset_sizes(&mut self) {
        self.distribute_equally();
        debug!(count = self.panels.len(), "sizes reset");
    }

    /// Discards all panels and replaces them with one full-size panel.
    ///
    /// Returns the ID of the fresh panel.
    pub fn collapse_to_single(&mut self, content: Option<ContentId>) -> PanelId {
        let panel = match content {
            Some(content) => Panel::with_content(content, FULL_SIZE),
            None => Panel::new(FULL_SIZE),
        };
        let id = panel.id;
        self.panels.clear();
        self.panels.push(panel);
        debug!(%id, "collapsed to single panel");
        id
    }

    /// Assigns a title to a panel.
    ///
    /// An empty string is accepted; non-emptiness is a caller
    /// convention, not enforced here.
    ///
    /// # Errors
    ///
    /// Returns `SplitViewError::PanelNotFound` for an unknown ID.
    pub fn rename_panel(
        &mut self,
        panel_id: PanelId,
        title: impl Into<String>,
    ) -> Result<(), SplitViewError> {
        let index = self
            .index_of(panel_id)
            .ok_or(SplitViewError::PanelNotFound(panel_id))?;
        self.panels[index].title = Some(title.into());
        Ok(())
    }

    /// Mounts a content reference into a panel.
    ///
    /// Returns the reference that was previously mounted, if any, so
    /// the owner can re-home the displaced document.
    ///
    /// # Errors
    ///
    /// Returns `SplitViewError::PanelNotFound` for an unknown ID.
    pub fn set_content(
        &mut self,
        panel_id: PanelId,
        content: ContentId,
    ) -> Result<Option<ContentId>, SplitViewError> {
        let index = self
            .index_of(panel_id)
            .ok_or(SplitViewError::PanelNotFound(panel_id))?;
        Ok(self.panels[index].content.replace(content))
    }

    /// Unmounts and returns a panel's content reference.
    ///
    /// The panel stays in the layout and renders the empty placeholder.
    ///
    /// # Errors
    ///
    /// Returns `SplitViewError::PanelNotFound` for an unknown ID.
    pub fn take_content(&mut self, panel_id: PanelId) -> Result<Option<ContentId>, SplitViewError> {
        let index = self
            .index_of(panel_id)
            .ok_or(SplitViewError::PanelNotFound(panel_id))?;
        Ok(self.panels[index].content.take())
    }

    /// Flips the orientation between horizontal and vertical.
    ///
    /// Sizes are deliberately untouched: percentage shares are
    /// axis-agnostic, so the existing values are simply re-interpreted
    /// against the new axis. Returns the new orientation.
    pub fn toggle_orientation(&mut self) -> Orientation {
        self.orientation = self.orientation.toggled();
        debug!(orientation = %self.orientation, "orientation toggled");
        self.orientation
    }

    /// Applies a resize proposal to the adjacent pair at `boundary`.
    ///
    /// `boundary` is the index of the left/upper panel; the pair
    /// `(boundary, boundary + 1)` receives the proposed sizes. Only
    /// those two panels change, so the total is preserved whenever the
    /// proposal is zero-sum (which [`super::resize::ResizeSession`]
    /// guarantees).
    ///
    /// # Errors
    ///
    /// Returns `SplitViewError::BoundaryOutOfRange` when `boundary + 1`
    /// is not a valid panel index.
    pub fn apply_pair(
        &mut self,
        boundary: usize,
        sizes: PairSizes,
    ) -> Result<(), SplitViewError> {
        if boundary + 1 >= self.panels.len() {
            return Err(SplitViewError::BoundaryOutOfRange(boundary));
        }
        self.panels[boundary].size = sizes.left;
        self.panels[boundary + 1].size = sizes.right;
        Ok(())
    }

    // ========================================================================
    // Private Helper Methods
    // ========================================================================

    fn index_of(&self, panel_id: PanelId) -> Option<usize> {
        self.panels.iter().position(|p| p.id == panel_id)
    }

    fn distribute_equally(&mut self) {
        let share = FULL_SIZE / self.panels.len() as f64;
        for panel in &mut self.panels {
            panel.size = share;
        }
    }
}

impl Default for SplitLayout {
    fn default() -> Self {
        Self::new()
    }
}
