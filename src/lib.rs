//! Terminal viewer for a remote user directory.
//!
//! Records are fetched once per session from a JSON endpoint and narrowed by
//! four per-field substring filters as the user types.

pub mod args;
pub mod config;
pub mod directory;
pub mod listing;
pub mod logging;
pub mod mvi;
pub mod source;
pub mod store;
pub mod ui;
