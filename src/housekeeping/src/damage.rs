//! Weapon damage rescaling for theme weapon files.
//!
//! A weapon document is a JSON object with up to two sections, `weapons`
//! (ranged) and `meleeWeapons`, each mapping a weapon id to a record. Every
//! record carrying a numeric `damage` has it multiplied by the scale factor.
//! The document is written back only when at least one value changed; key
//! order and all other fields are kept as read.

use serde_json::{Map, Number, Value};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Top-level sections that hold weapon records, in processing order
pub const WEAPON_SECTIONS: [&str; 2] = ["weapons", "meleeWeapons"];

/// Attribute scaled on each weapon record
pub const DAMAGE_KEY: &str = "damage";

/// Factor used when none is configured
pub const DEFAULT_FACTOR: ScaleFactor = ScaleFactor::Integer(5);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactorError {
    #[error("Scale factor must be a number, got {0:?}")]
    NotANumber(String),

    #[error("Scale factor must be a positive finite number, got {0}")]
    NotPositive(String),
}

#[derive(Error, Debug)]
pub enum RescaleError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} is not a JSON object")]
    NotAnObject { path: PathBuf },

    #[error("Damage overflow for {section}.{weapon_id}: {damage} x {factor}")]
    DamageOverflow {
        section: String,
        weapon_id: String,
        damage: Number,
        factor: ScaleFactor,
    },
}

/// Multiplier applied to damage values
///
/// Integral factors stay integers so integer damage is scaled exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleFactor {
    Integer(u64),
    Real(f64),
}

impl ScaleFactor {
    /// Build a factor from a float, keeping it integral when possible
    pub fn from_f64(value: f64) -> Result<Self, FactorError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(FactorError::NotPositive(value.to_string()));
        }
        if value.fract() == 0.0 && value < u64::MAX as f64 {
            Ok(ScaleFactor::Integer(value as u64))
        } else {
            Ok(ScaleFactor::Real(value))
        }
    }

    /// Multiply a JSON number, or `None` if the result is not representable
    pub fn apply(self, damage: &Number) -> Option<Number> {
        match self {
            ScaleFactor::Integer(factor) => {
                if let Some(n) = damage.as_u64() {
                    return n.checked_mul(factor).map(Number::from);
                }
                if let Some(n) = damage.as_i64() {
                    let factor = i64::try_from(factor).ok()?;
                    return n.checked_mul(factor).map(Number::from);
                }
                Number::from_f64(damage.as_f64()? * factor as f64)
            }
            ScaleFactor::Real(factor) => Number::from_f64(damage.as_f64()? * factor),
        }
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        DEFAULT_FACTOR
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleFactor::Integer(n) => write!(f, "{}", n),
            ScaleFactor::Real(x) => write!(f, "{}", x),
        }
    }
}

impl FromStr for ScaleFactor {
    type Err = FactorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<u64>() {
            if n == 0 {
                return Err(FactorError::NotPositive(trimmed.to_string()));
            }
            return Ok(ScaleFactor::Integer(n));
        }
        let value = trimmed
            .parse::<f64>()
            .map_err(|_| FactorError::NotANumber(s.to_string()))?;
        ScaleFactor::from_f64(value)
    }
}

/// One damage value that was rescaled
#[derive(Debug, Clone, PartialEq)]
pub struct DamageChange {
    pub section: String,
    pub weapon_id: String,
    pub old: Number,
    pub new: Number,
}

/// Outcome of rescaling one file
#[derive(Debug, Clone, Default)]
pub struct RescaleReport {
    pub changes: Vec<DamageChange>,
    /// Whether the file on disk was rewritten
    pub written: bool,
}

impl RescaleReport {
    pub fn changed(&self) -> bool {
        !self.changes.is_empty()
    }
}

/// Scale every `damage` in the weapon sections of `doc`, in place
///
/// On error `doc` may be partially scaled; callers discard it.
pub fn rescale_document(
    doc: &mut Map<String, Value>,
    factor: ScaleFactor,
) -> Result<Vec<DamageChange>, RescaleError> {
    let mut changes = Vec::new();

    for section in WEAPON_SECTIONS {
        let Some(entries) = doc.get_mut(section) else {
            continue;
        };
        let Some(entries) = entries.as_object_mut() else {
            tracing::warn!("section {} is not an object, skipping", section);
            continue;
        };

        for (weapon_id, weapon) in entries.iter_mut() {
            let Some(damage) = weapon.as_object_mut().and_then(|w| w.get_mut(DAMAGE_KEY)) else {
                continue;
            };
            let old = match &*damage {
                Value::Number(n) => n.clone(),
                other => {
                    tracing::warn!(
                        "{}.{} has non-numeric damage {}, skipping",
                        section,
                        weapon_id,
                        other
                    );
                    continue;
                }
            };

            let Some(new) = factor.apply(&old) else {
                return Err(RescaleError::DamageOverflow {
                    section: section.to_string(),
                    weapon_id: weapon_id.clone(),
                    damage: old,
                    factor,
                });
            };

            *damage = Value::Number(new.clone());
            changes.push(DamageChange {
                section: section.to_string(),
                weapon_id: weapon_id.clone(),
                old,
                new,
            });
        }
    }

    Ok(changes)
}

/// Rescale the weapon file at `path`
///
/// The file is rewritten with 2-space indentation only if something changed
/// and `dry_run` is false; otherwise it is left byte-for-byte untouched.
/// Running twice scales twice.
pub fn rescale_file(
    path: &Path,
    factor: ScaleFactor,
    dry_run: bool,
) -> Result<RescaleReport, RescaleError> {
    let io_err = |source| RescaleError::Io {
        path: path.to_path_buf(),
        source,
    };
    let json_err = |source| RescaleError::Json {
        path: path.to_path_buf(),
        source,
    };

    let content = fs::read_to_string(path).map_err(io_err)?;
    let mut doc = match serde_json::from_str::<Value>(&content).map_err(json_err)? {
        Value::Object(map) => map,
        _ => {
            return Err(RescaleError::NotAnObject {
                path: path.to_path_buf(),
            })
        }
    };

    let changes = rescale_document(&mut doc, factor)?;
    let mut report = RescaleReport {
        changes,
        written: false,
    };

    if report.changed() && !dry_run {
        let json = serde_json::to_string_pretty(&Value::Object(doc)).map_err(json_err)?;
        fs::write(path, json).map_err(io_err)?;
        report.written = true;
        tracing::debug!("rewrote {}", path.display());
    }

    Ok(report)
}
