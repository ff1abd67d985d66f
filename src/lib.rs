//! Blockfall (workspace facade crate).
//!
//! Re-exports the rules engine crates under one name and hosts the pieces
//! the terminal binary needs around them: environment configuration and
//! the JSONL session log.

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod config;
pub mod session_log;
