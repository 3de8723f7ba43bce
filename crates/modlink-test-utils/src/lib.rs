//! Shared test utilities for the modlink workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`layout`]: [`layout::TestLayout`], a temporary working directory with
//!   an extensions tree, an installation root and a directory of fake tools

pub mod layout;
