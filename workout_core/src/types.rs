//! Core domain types for the workout tracker.
//!
//! This module defines the fundamental types used throughout the system:
//! - Raw sensor readings shared by every workout
//! - Workout variants and their extra readings
//! - Sensor packages as received before dispatch

use serde::{Deserialize, Serialize};

// ============================================================================
// Sensor Readings
// ============================================================================

/// Readings common to every workout type
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSample {
    /// Steps (running, walking) or strokes (swimming)
    pub action: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl WorkoutSample {
    pub fn new(action: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_hours,
            weight_kg,
        }
    }
}

// ============================================================================
// Workout Types
// ============================================================================

/// Workout type, selected from a sensor type code
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkoutKind {
    /// Fallback for unrecognised codes; burns no calories
    Training,
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    /// Name shown in the summary line
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutKind::Training => "Training",
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of positional fields a sensor package must carry
    pub fn arity(&self) -> usize {
        match self {
            WorkoutKind::Training | WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

/// A workout ready for computation, one variant per workout type
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Workout {
    Training(WorkoutSample),
    Running(WorkoutSample),
    SportsWalking {
        sample: WorkoutSample,
        height_cm: f64,
    },
    Swimming {
        sample: WorkoutSample,
        pool_length_m: f64,
        pool_laps: u32,
    },
}

impl Workout {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Training(_) => WorkoutKind::Training,
            Workout::Running(_) => WorkoutKind::Running,
            Workout::SportsWalking { .. } => WorkoutKind::SportsWalking,
            Workout::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    /// The readings shared by all variants
    pub fn sample(&self) -> &WorkoutSample {
        match self {
            Workout::Training(sample) | Workout::Running(sample) => sample,
            Workout::SportsWalking { sample, .. } | Workout::Swimming { sample, .. } => sample,
        }
    }
}

// ============================================================================
// Sensor Packages
// ============================================================================

/// A raw package from a sensor: type code plus positional fields
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}
