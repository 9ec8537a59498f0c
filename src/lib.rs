//! TUI Snake (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_snake::{core,input,term,types}` and
//! hosts the pieces of the binary that are worth testing on their own:
//! command-line configuration, logging setup, and the terminal game loop.

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;

pub mod cli;
pub mod logging;
pub mod runner;
