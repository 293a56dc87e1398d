//! Command implementations
//!
//! Each command is a module with an execute function that takes the
//! effective settings and performs one top-level action.

pub mod pick;
pub mod show_config;

pub use pick::execute as pick;
pub use show_config::execute as show_config;
