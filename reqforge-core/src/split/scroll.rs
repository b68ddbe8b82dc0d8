//! Scroll offset tracking and mirroring
//!
//! When scroll sync is on, a scroll in any panel fans out to every
//! other panel. `ScrollSync` keeps the last-known offset per panel and
//! computes the fan-out targets; the renderer layer applies them to the
//! actual scrollable widgets. Concurrent scrolls in different panels
//! resolve last-writer-wins: whichever event is processed later
//! overwrites the stored offsets.

use std::collections::HashMap;

use super::types::{PanelId, ScrollOffset};

/// Per-panel scroll state for a split layout.
#[derive(Debug, Clone, Default)]
pub struct ScrollSync {
    offsets: HashMap<PanelId, ScrollOffset>,
}

impl ScrollSync {
    /// Creates an empty scroll tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the latest scroll offset for a panel.
    pub fn record(&mut self, panel_id: PanelId, offset: ScrollOffset) {
        self.offsets.insert(panel_id, offset);
    }

    /// Returns the last recorded offset for a panel.
    ///
    /// Panels that have never scrolled report the origin.
    #[must_use]
    pub fn offset_of(&self, panel_id: PanelId) -> ScrollOffset {
        self.offsets.get(&panel_id).copied().unwrap_or_default()
    }

    /// Records a scroll in `origin` and returns the fan-out targets.
    ///
    /// Every panel in `panels` except the origin is updated to the new
    /// offset and returned so the caller can push the position into the
    /// corresponding widget. The origin panel is skipped to avoid
    /// echoing the event back into the panel that produced it.
    pub fn mirror(
        &mut self,
        origin: PanelId,
        offset: ScrollOffset,
        panels: &[PanelId],
    ) -> Vec<(PanelId, ScrollOffset)> {
        self.offsets.insert(origin, offset);
        panels
            .iter()
            .filter(|&&id| id != origin)
            .map(|&id| {
                self.offsets.insert(id, offset);
                (id, offset)
            })
            .collect()
    }

    /// Drops offsets for panels no longer present in the layout.
    pub fn prune(&mut self, panels: &[PanelId]) {
        self.offsets.retain(|id, _| panels.contains(id));
    }

    /// Forgets all recorded offsets.
    pub fn clear(&mut self) {
        self.offsets.clear();
    }
}
