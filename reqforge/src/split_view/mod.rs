//! Split view module for the workspace window
//!
//! Renderer-layer half of the split view system. The core data model
//! lives in `reqforge-core::split`; this module wraps it in a
//! controller shaped around widget events.
//!
//! # Architecture
//!
//! The split view system is divided between two crates:
//!
//! - **`reqforge-core::split`**: layout model, resize math, scroll sync
//! - **`reqforge::split_view`**: event-shaped controller and pixel regions
//!
//! This separation keeps all layout policy testable without a widget
//! toolkit in the loop.

mod controller;

pub use controller::{CapacityNoticeFn, LayoutChangedFn, PanelRegion, SplitViewController};

// Re-exported so shells can reference the ceiling without depending on
// the core crate directly.
pub use reqforge_core::split::MAX_PANELS;
