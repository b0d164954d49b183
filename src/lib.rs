//! Tsharvest - rebuild captured HLS streams from browser HAR archives
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod harvest;
pub mod output;
