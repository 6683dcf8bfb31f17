//! Shared pieces of the `move-cycle` and `scale-damage` binaries.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
