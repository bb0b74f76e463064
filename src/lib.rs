//! Seekmark — timestamp bookmarks for streaming video.
//!
//! This library crate exposes all modules for use by the binaries and
//! integration tests: the storage core, the bookmark editor, the panel
//! and agent endpoints, and the stdio bridge dispatch.

pub mod agent;
pub mod app;
pub mod bridge_handler;
pub mod host;
pub mod managers;
pub mod panel;
pub mod platform;
pub mod services;
pub mod storage;
pub mod types;
