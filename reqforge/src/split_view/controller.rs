//! Split view controller for the workspace window
//!
//! `SplitViewController` sits between the rendered workspace and the
//! core layout model. It translates widget events (toolbar clicks,
//! divider drags, scrollbar movement) into `reqforge-core::split`
//! operations, enforces the UI contract that layout actions never fail
//! loudly (refused operations degrade to no-ops, out-of-range drags
//! clamp), and fans the resulting state out through callbacks.
//!
//! Invalid requests are reported through `tracing` and, for the panel
//! ceiling, through a non-blocking capacity notice so the shell can
//! show a toast instead of a modal dialog.

use tracing::{debug, warn};

use reqforge_core::split::{
    ContentId, Orientation, PanelId, PanelSnapshot, ResizeSession, ScrollOffset, ScrollSync,
    SplitLayout, SplitViewError,
};

/// Pixel placement of one panel inside the rendered container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelRegion {
    /// The panel occupying this region.
    pub id: PanelId,
    /// Start of the region along the split axis, in pixels.
    pub start: f64,
    /// Length of the region along the split axis, in pixels.
    pub length: f64,
}

/// Callback invoked with the full panel list after every layout change.
pub type LayoutChangedFn = Box<dyn FnMut(&[PanelSnapshot])>;

/// Callback invoked when an add is refused at the panel ceiling.
pub type CapacityNoticeFn = Box<dyn FnMut(usize)>;

/// Controller for one workspace's split view.
///
/// Owns the layout model, the scroll tracker and the in-flight resize
/// drag, and exposes the event-shaped API the rendered widgets call
/// into. All methods are infallible from the caller's point of view:
/// a refused mutation leaves the layout untouched and is surfaced via
/// logging or the capacity notice, never via a panic or an error the
/// widget layer would have to route somewhere.
pub struct SplitViewController {
    layout: SplitLayout,
    scroll: ScrollSync,
    active_drag: Option<ResizeSession>,
    on_layout_changed: Option<LayoutChangedFn>,
    on_capacity_notice: Option<CapacityNoticeFn>,
}

impl SplitViewController {
    /// Creates a controller with a single empty panel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            layout: SplitLayout::new(),
            scroll: ScrollSync::new(),
            active_drag: None,
            on_layout_changed: None,
            on_capacity_notice: None,
        }
    }

    /// Creates a controller whose initial panel shows the given content.
    #[must_use]
    pub fn with_content(content: ContentId) -> Self {
        Self {
            layout: SplitLayout::with_content(content),
            scroll: ScrollSync::new(),
            active_drag: None,
            on_layout_changed: None,
            on_capacity_notice: None,
        }
    }

    /// Registers the layout-changed callback.
    ///
    /// Called with a snapshot of every panel after each committed
    /// mutation (add, close, resize end, reset, collapse, rename,
    /// orientation toggle). Intermediate drag updates do not fire it.
    pub fn set_on_layout_changed(&mut self, callback: impl FnMut(&[PanelSnapshot]) + 'static) {
        self.on_layout_changed = Some(Box::new(callback));
    }

    /// Registers the capacity notice callback.
    ///
    /// Called with the panel ceiling when an add is refused because the
    /// layout is full. Intended for a passive toast, not a dialog.
    pub fn set_on_capacity_notice(&mut self, callback: impl FnMut(usize) + 'static) {
        self.on_capacity_notice = Some(Box::new(callback));
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns the underlying layout model.
    #[must_use]
    pub const fn layout(&self) -> &SplitLayout {
        &self.layout
    }

    /// Returns the number of panels.
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.layout.panel_count()
    }

    /// Returns true if the workspace currently shows more than one panel.
    #[must_use]
    pub fn is_split(&self) -> bool {
        self.layout.panel_count() > 1
    }

    /// Returns true if a resize drag is in progress.
    #[must_use]
    pub const fn is_resizing(&self) -> bool {
        self.active_drag.is_some()
    }

    /// Returns the current orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.layout.orientation()
    }

    /// Returns the content shown in a panel, if any.
    #[must_use]
    pub fn panel_content(&self, panel_id: PanelId) -> Option<ContentId> {
        self.layout.panel_content(panel_id)
    }

    /// Returns the header label for a panel.
    ///
    /// The assigned title when present, otherwise a positional
    /// "Panel N" label. Unknown IDs yield `None`.
    #[must_use]
    pub fn panel_label(&self, panel_id: PanelId) -> Option<String> {
        self.layout
            .panels()
            .iter()
            .enumerate()
            .find(|(_, p)| p.id == panel_id)
            .map(|(index, p)| p.display_label(index))
    }

    /// Computes the pixel region of every panel for a container of the
    /// given extent along the split axis.
    ///
    /// Regions are derived from the percentage spans on every call; a
    /// non-positive extent yields zero-length regions at the origin so
    /// a not-yet-measured container stays renderable.
    #[must_use]
    pub fn regions(&self, extent: f64) -> Vec<PanelRegion> {
        let scale = if extent > 0.0 { extent / 100.0 } else { 0.0 };
        self.layout
            .spans()
            .into_iter()
            .map(|span| PanelRegion {
                id: span.id,
                start: span.offset * scale,
                length: span.size * scale,
            })
            .collect()
    }

    // ========================================================================
    // Panel Lifecycle
    // ========================================================================

    /// Adds a new panel, splitting the workspace one level further.
    ///
    /// All panels are rebalanced to equal sizes; an in-flight divider
    /// drag is abandoned, since its captured start sizes no longer
    /// describe the layout. When the layout is already at the panel
    /// ceiling the request is dropped, the capacity notice fires, and
    /// `None` is returned.
    pub fn add_split(&mut self, content: Option<ContentId>) -> Option<PanelId> {
        match self.layout.add_panel(content) {
            Ok(id) => {
                self.active_drag = None;
                self.notify_layout_changed();
                Some(id)
            }
            Err(SplitViewError::CapacityReached { max }) => {
                if let Some(ref mut notice) = self.on_capacity_notice {
                    notice(max);
                }
                None
            }
            Err(err) => {
                warn!(%err, "add split refused");
                None
            }
        }
    }

    /// Closes a panel, returning the content it was showing.
    ///
    /// The remaining panels rebalance to equal sizes and an in-flight
    /// divider drag is abandoned; its boundary index and start sizes
    /// may both be stale after the removal. Closing the last panel or
    /// an unknown ID is a logged no-op that returns `None`.
    pub fn close_split(&mut self, panel_id: PanelId) -> Option<ContentId> {
        match self.layout.remove_panel(panel_id) {
            Ok(content) => {
                self.active_drag = None;
                self.scroll.prune(&self.layout.panel_ids());
                self.notify_layout_changed();
                content
            }
            Err(err) => {
                debug!(%panel_id, %err, "close split refused");
                None
            }
        }
    }

    /// Collapses the workspace back to a single panel.
    ///
    /// Every existing panel is discarded; the fresh panel shows
    /// `content` (or the empty placeholder) at full size.
    pub fn close_all_splits(&mut self, content: Option<ContentId>) -> PanelId {
        let id = self.layout.collapse_to_single(content);
        self.active_drag = None;
        self.scroll.clear();
        self.notify_layout_changed();
        id
    }

    /// Rebalances all panels to equal sizes.
    ///
    /// An in-flight divider drag is abandoned; the rebalanced sizes
    /// win over whatever the drag had captured at start.
    pub fn reset_sizes(&mut self) {
        self.active_drag = None;
        self.layout.reset_sizes();
        self.notify_layout_changed();
    }

    /// Flips the split axis between horizontal and vertical.
    ///
    /// Panel sizes survive the flip unchanged. Returns the new
    /// orientation.
    pub fn toggle_orientation(&mut self) -> Orientation {
        let orientation = self.layout.toggle_orientation();
        self.notify_layout_changed();
        orientation
    }

    /// Assigns a header title to a panel. Unknown IDs are a no-op.
    pub fn rename_panel(&mut self, panel_id: PanelId, title: impl Into<String>) {
        match self.layout.rename_panel(panel_id, title) {
            Ok(()) => self.notify_layout_changed(),
            Err(err) => debug!(%panel_id, %err, "rename refused"),
        }
    }

    /// Mounts content into a panel, returning what it displaced.
    ///
    /// Unknown IDs are a no-op that returns `None`.
    pub fn set_panel_content(
        &mut self,
        panel_id: PanelId,
        content: ContentId,
    ) -> Option<ContentId> {
        match self.layout.set_content(panel_id, content) {
            Ok(displaced) => {
                self.notify_layout_changed();
                displaced
            }
            Err(err) => {
                debug!(%panel_id, %err, "set content refused");
                None
            }
        }
    }

    /// Unmounts and returns a panel's content, leaving the placeholder.
    pub fn take_panel_content(&mut self, panel_id: PanelId) -> Option<ContentId> {
        match self.layout.take_content(panel_id) {
            Ok(content) => {
                if content.is_some() {
                    self.notify_layout_changed();
                }
                content
            }
            Err(err) => {
                debug!(%panel_id, %err, "take content refused");
                None
            }
        }
    }

    // ========================================================================
    // Divider Drags
    // ========================================================================

    /// Starts a divider drag on the boundary between panels `boundary`
    /// and `boundary + 1`.
    ///
    /// `pos` is the pointer position along the split axis in pixels.
    /// Returns false, without starting anything, when a drag is already
    /// active or the boundary does not exist.
    pub fn begin_resize(&mut self, boundary: usize, pos: f64) -> bool {
        if self.active_drag.is_some() {
            warn!(boundary, err = %SplitViewError::DragInProgress, "resize refused");
            return false;
        }
        match ResizeSession::begin(&self.layout, boundary, pos) {
            Ok(session) => {
                self.active_drag = Some(session);
                true
            }
            Err(err) => {
                warn!(boundary, %err, "resize refused");
                false
            }
        }
    }

    /// Applies the pointer position of an in-flight drag.
    ///
    /// `extent` is the container's pixel length along the split axis.
    /// The adjacent pair tracks the pointer, clamped at the minimum
    /// panel size; panels outside the pair never move. Without an
    /// active drag this is a no-op. The layout-changed callback is
    /// deliberately not fired for these intermediate updates.
    pub fn update_resize(&mut self, pos: f64, extent: f64) {
        let Some(session) = self.active_drag else {
            return;
        };
        if let Some(pair) = session.proposal(pos, extent) {
            // Every structural mutation drops the session, so a live
            // session's boundary still indexes a valid adjacent pair.
            let _ = self.layout.apply_pair(session.boundary(), pair);
        }
    }

    /// Ends the active drag, committing the final pointer position.
    ///
    /// The session is torn down unconditionally, even when the final
    /// position yields no movement, so a stuck drag can never survive a
    /// release event. Fires the layout-changed callback once.
    pub fn end_resize(&mut self, pos: f64, extent: f64) {
        let Some(session) = self.active_drag.take() else {
            return;
        };
        if let Some(pair) = session.proposal(pos, extent) {
            let _ = self.layout.apply_pair(session.boundary(), pair);
        }
        debug!(boundary = session.boundary(), "resize committed");
        self.notify_layout_changed();
    }

    /// Abandons the active drag without committing the last position.
    ///
    /// Used for Escape-cancelled drags; the sizes revert to their
    /// state at drag start.
    pub fn cancel_resize(&mut self) {
        let Some(session) = self.active_drag.take() else {
            return;
        };
        let _ = self
            .layout
            .apply_pair(session.boundary(), session.start_sizes());
        debug!(boundary = session.boundary(), "resize cancelled");
        self.notify_layout_changed();
    }

    // ========================================================================
    // Scrolling
    // ========================================================================

    /// Enables or disables synchronized scrolling across panels.
    pub fn set_sync_scrolling(&mut self, enabled: bool) {
        self.layout.set_sync_scrolling(enabled);
        debug!(enabled, "scroll sync toggled");
    }

    /// Returns true if synchronized scrolling is enabled.
    #[must_use]
    pub const fn sync_scrolling(&self) -> bool {
        self.layout.sync_scrolling()
    }

    /// Handles a scroll event originating in one panel.
    ///
    /// Records the new offset and, when scroll sync is on, returns the
    /// other panels together with the offset the renderer should push
    /// into their scrollable widgets. With sync off (or a single
    /// panel) the returned list is empty. Simultaneous scrolls in
    /// different panels resolve last-writer-wins in event order.
    pub fn on_panel_scroll(
        &mut self,
        origin: PanelId,
        offset: ScrollOffset,
    ) -> Vec<(PanelId, ScrollOffset)> {
        if !self.layout.contains_panel(origin) {
            debug!(%origin, "scroll from unknown panel ignored");
            return Vec::new();
        }
        if self.layout.sync_scrolling() {
            self.scroll.mirror(origin, offset, &self.layout.panel_ids())
        } else {
            self.scroll.record(origin, offset);
            Vec::new()
        }
    }

    /// Returns the last recorded scroll offset for a panel.
    #[must_use]
    pub fn scroll_offset(&self, panel_id: PanelId) -> ScrollOffset {
        self.scroll.offset_of(panel_id)
    }

    // ========================================================================
    // Private Helper Methods
    // ========================================================================

    fn notify_layout_changed(&mut self) {
        if let Some(ref mut callback) = self.on_layout_changed {
            let snapshots = self.layout.snapshot();
            callback(&snapshots);
        }
    }
}

impl Default for SplitViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SplitViewController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplitViewController")
            .field("layout", &self.layout)
            .field("active_drag", &self.active_drag)
            .field("has_layout_callback", &self.on_layout_changed.is_some())
            .field("has_capacity_callback", &self.on_capacity_notice.is_some())
            .finish()
    }
}
