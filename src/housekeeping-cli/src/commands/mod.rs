//! Command handlers for the housekeeping tools
//!
//! Each binary has its own module with a `handle` entry point.

pub mod cycle;
pub mod damage;
