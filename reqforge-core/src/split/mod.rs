//! Split view layout engine
//!
//! Pure layout model for the multi-panel workspace: an ordered list of
//! up to four panels sharing one axis, with percentage sizes that
//! always sum to 100. All policy lives here; the renderer layer only
//! translates widget events into these operations and paints the
//! resulting spans.
//!
//! # Example
//!
//! ```
//! use reqforge_core::split::SplitLayout;
//!
//! let mut layout = SplitLayout::new();
//! let second = layout.add_panel(None)?;
//!
//! // Two panels split the axis evenly.
//! assert_eq!(layout.panel_count(), 2);
//! assert!((layout.size_of(second).unwrap() - 50.0).abs() < 1e-9);
//!
//! layout.remove_panel(second)?;
//! assert_eq!(layout.panel_count(), 1);
//! # Ok::<(), reqforge_core::split::SplitViewError>(())
//! ```

pub mod error;
pub mod layout;
pub mod panel;
pub mod resize;
pub mod scroll;
pub mod types;

pub use error::SplitViewError;
pub use layout::{FULL_SIZE, MAX_PANELS, MIN_PANEL_SIZE, PanelSpan, SIZE_EPSILON, SplitLayout};
pub use panel::{Panel, PanelSnapshot};
pub use resize::{PairSizes, ResizeSession};
pub use scroll::ScrollSync;
pub use types::{ContentId, Orientation, PanelId, ScrollOffset};
