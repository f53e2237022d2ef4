//! TabShell — a minimal multi-tab desktop web browser shell.
//!
//! This library crate exposes all modules for use by the binary and
//! integration tests.

pub mod app;
pub mod config;
pub mod managers;
pub mod navigation;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
