//! Dispatch from sensor type codes to workout variants.
//!
//! Sensors report a short type code and a positional list of readings.
//! The code selects the workout type from a lookup table; the readings are
//! then unpacked into that type's variant. Unrecognised codes fall back to
//! the base `Training` workout, which burns no calories.

use crate::{Error, Result, Workout, WorkoutKind, WorkoutSample};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Type code lookup table, built once and reused across all packages
static WORKOUT_TYPES: Lazy<HashMap<&'static str, WorkoutKind>> = Lazy::new(|| {
    HashMap::from([
        ("SWM", WorkoutKind::Swimming),
        ("RUN", WorkoutKind::Running),
        ("WLK", WorkoutKind::SportsWalking),
    ])
});

impl WorkoutKind {
    /// Look up the workout type for a sensor code
    ///
    /// Codes are matched exactly; anything unrecognised maps to `Training`.
    pub fn from_code(code: &str) -> WorkoutKind {
        WORKOUT_TYPES
            .get(code)
            .copied()
            .unwrap_or(WorkoutKind::Training)
    }
}

/// Build a workout from a sensor type code and its positional readings
///
/// Field order:
/// - Running / Training: action, duration (h), weight (kg)
/// - Sports walking: action, duration (h), weight (kg), height (cm)
/// - Swimming: action, duration (h), weight (kg), pool length (m), pool laps
///
/// # Errors
/// `Error::InvalidInput` if the field count differs from the type's arity,
/// or if action or pool laps is not a non-negative whole number.
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout> {
    let kind = WorkoutKind::from_code(code);

    if kind == WorkoutKind::Training {
        tracing::warn!(
            "Unknown workout type code {:?}, computing without a calorie formula",
            code
        );
    }

    if data.len() != kind.arity() {
        return Err(Error::InvalidInput(format!(
            "{} ({}) expects {} fields, got {}",
            kind.display_name(),
            code,
            kind.arity(),
            data.len()
        )));
    }

    let sample = WorkoutSample::new(whole_number("action", data[0])?, data[1], data[2]);

    let workout = match kind {
        WorkoutKind::Training => Workout::Training(sample),
        WorkoutKind::Running => Workout::Running(sample),
        WorkoutKind::SportsWalking => Workout::SportsWalking {
            sample,
            height_cm: data[3],
        },
        WorkoutKind::Swimming => Workout::Swimming {
            sample,
            pool_length_m: data[3],
            pool_laps: whole_number("pool laps", data[4])?,
        },
    };

    tracing::debug!("Dispatched {:?} to {:?}", code, kind);
    Ok(workout)
}

/// Convert a reading that must be a count
fn whole_number(field: &str, value: f64) -> Result<u32> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(Error::InvalidInput(format!(
            "{} must be a non-negative whole number, got {}",
            field, value
        )));
    }
    Ok(value as u32)
}
