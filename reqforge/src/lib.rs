//! `ReqForge` renderer layer
//!
//! Widget-facing layer of the `ReqForge` API-testing workbench. The
//! crate hosts the controllers that translate UI events into
//! `reqforge-core` operations; rendering itself stays in the shell.
//!
//! # Crate Structure
//!
//! - [`split_view`] - Controller for the multi-panel split workspace

#![warn(missing_docs)]

pub mod split_view;
