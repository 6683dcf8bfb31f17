//! # housekeeping
//!
//! Maintenance operations for a game project's working tree.
//!
//! This library provides:
//! - Archival of finished dev cycle planning documents into a completed folder
//! - Rescaling of weapon damage values in theme JSON files
//!
//! Both operations run a single pass over the filesystem and report progress
//! through a caller-supplied event handler.
//!
//! ## Example
//!
//! ```no_run
//! use housekeeping::{relocate, CycleNumber, RelocateEvent, RelocateOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cycle: CycleNumber = "13".parse()?;
//! let options = RelocateOptions::new("plans");
//!
//! let summary = relocate(cycle, &options, |event| {
//!     if let RelocateEvent::Moved { name } = event {
//!         println!("moved {name}");
//!     }
//! })?;
//! println!("{} files moved", summary.moved);
//! # Ok(())
//! # }
//! ```

pub mod cycle;
pub mod damage;
pub mod fs_utils;
pub mod relocate;
pub mod themes;

#[doc(inline)]
pub use cycle::{CycleError, CycleNumber, MAX_CYCLE, MIN_CYCLE};
#[doc(inline)]
pub use damage::{
    rescale_document, rescale_file, DamageChange, FactorError, RescaleError, RescaleReport,
    ScaleFactor, DEFAULT_FACTOR,
};
#[doc(inline)]
pub use relocate::{
    relocate, RelocateError, RelocateEvent, RelocateOptions, RelocateSummary, DEFAULT_PREFIX,
    DEFAULT_YEAR,
};
#[doc(inline)]
pub use themes::{
    rescale_themes, BatchSummary, ThemeBatch, ThemeEvent, DEFAULT_THEMES, DEFAULT_THEMES_DIR,
    DEFAULT_WEAPON_FILES,
};
