//! `ReqForge` Core Library
//!
//! This crate provides the UI-independent logic for the `ReqForge`
//! API-testing workbench, currently centred on the split view layout
//! engine that drives the multi-panel workspace.
//!
//! # Crate Structure
//!
//! - [`split`] - Split view layout model (panels, sizes, resize drags, scroll sync)
//! - [`logging`] - Structured logging bootstrap built on `tracing`

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod logging;
pub mod split;
