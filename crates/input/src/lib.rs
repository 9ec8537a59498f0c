//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and detects the
//! quit keys, which the runner handles itself.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
