//! CLI argument definitions for the housekeeping tools
//!
//! This module contains the clap-derived structs for both binaries.

mod cycle;
mod damage;

pub use cycle::MoveCycleCli;
pub use damage::ScaleDamageCli;

/// Parse arguments for `P`, exiting 1 on usage errors and 0 for help/version
pub fn parse_or_exit<P: clap::Parser>() -> P {
    P::try_parse().unwrap_or_else(|err| {
        let code = if err.use_stderr() { 1 } else { 0 };
        let _ = err.print();
        std::process::exit(code);
    })
}
