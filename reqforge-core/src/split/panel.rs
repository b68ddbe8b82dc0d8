//! Panel data for split layouts
//!
//! A panel is one rectangular region of the split view: a stable
//! identity, a percentage share of the active axis, an optional title
//! and an opaque content reference. Panels carry no geometry of their
//! own; absolute positions are always derived from the size sequence
//! by the layout.

use serde::{Deserialize, Serialize};

use super::types::{ContentId, PanelId};

/// A single panel in a split layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// Unique identifier for this panel.
    pub id: PanelId,
    /// Externally-owned content shown in the panel (None = empty placeholder).
    pub content: Option<ContentId>,
    /// User-assigned title. Falls back to a positional label when absent.
    pub title: Option<String>,
    /// Percentage share of the split axis, in `[min_size, 100]`.
    pub size: f64,
}

impl Panel {
    /// Creates a new empty panel with the given size share.
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self {
            id: PanelId::new(),
            content: None,
            title: None,
            size,
        }
    }

    /// Creates a new panel holding a content reference.
    #[must_use]
    pub fn with_content(content: ContentId, size: f64) -> Self {
        Self {
            id: PanelId::new(),
            content: Some(content),
            title: None,
            size,
        }
    }

    /// Returns true if this panel has no content (renders a placeholder).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    /// Returns true if this panel holds a content reference.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.content.is_some()
    }

    /// Returns the display label for this panel.
    ///
    /// Uses the assigned title when present, otherwise a 1-based
    /// positional label ("Panel 1", "Panel 2", ...). The position is the
    /// panel's index in the layout's current ordering.
    #[must_use]
    pub fn display_label(&self, position: usize) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Panel {}", position + 1))
    }
}

/// Immutable view of one panel, handed to the layout-changed callback.
///
/// The owner uses snapshots to persist the layout or react to changes;
/// they serialize cleanly for that purpose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    /// The panel's stable identifier.
    pub id: PanelId,
    /// Percentage share of the split axis.
    pub size: f64,
    /// User-assigned title, if any.
    pub title: Option<String>,
    /// Content reference mounted in the panel, if any.
    pub content: Option<ContentId>,
}

impl From<&Panel> for PanelSnapshot {
    fn from(panel: &Panel) -> Self {
        Self {
            id: panel.id,
            size: panel.size,
            title: panel.title.clone(),
            content: panel.content,
        }
    }
}
