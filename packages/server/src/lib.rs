//! Real-time chat relay.
//!
//! Tracks who is online and who is typing, keeps a bounded history of
//! broadcast messages, and fans events out to WebSocket connections.
//! A small read-only HTTP API exposes the same state.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod config;
