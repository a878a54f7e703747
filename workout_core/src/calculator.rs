//! Distance, speed and calorie formulas for each workout type.
//!
//! Every workout derives its figures from the same three readings; the
//! variants differ in stride length, how mean speed is measured and which
//! calorie formula applies:
//! - Running: speed-weighted calorie burn
//! - Sports walking: weight and height based calorie burn
//! - Swimming: pool-based speed and calorie burn
//! - Training (unknown codes): no calorie formula

use crate::{InfoMessage, Workout, WorkoutKind};

/// Length of one step in metres
pub const LEN_STEP: f64 = 0.65;
/// Length of one swimming stroke in metres
pub const LEN_STROKE: f64 = 1.38;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;
pub const CM_IN_M: f64 = 100.0;
/// Converts km/h to m/s
pub const KMH_IN_MSEC: f64 = 0.278;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Metres covered per action for the given workout type
fn stride_m(kind: WorkoutKind) -> f64 {
    match kind {
        WorkoutKind::Swimming => LEN_STROKE,
        _ => LEN_STEP,
    }
}

/// Distance covered in km
pub fn distance(workout: &Workout) -> f64 {
    let sample = workout.sample();
    sample.action as f64 * stride_m(workout.kind()) / M_IN_KM
}

/// Mean speed in km/h
///
/// Swimming measures speed from pool length and laps rather than from
/// stroke count.
pub fn mean_speed(workout: &Workout) -> f64 {
    match workout {
        Workout::Swimming {
            sample,
            pool_length_m,
            pool_laps,
        } => pool_length_m * *pool_laps as f64 / M_IN_KM / sample.duration_hours,
        _ => distance(workout) / workout.sample().duration_hours,
    }
}

/// Calories burned over the whole workout
pub fn spent_calories(workout: &Workout) -> f64 {
    let sample = workout.sample();
    let duration_min = sample.duration_hours * MIN_IN_H;

    match workout {
        Workout::Training(_) => 0.0,
        Workout::Running(_) => {
            (RUN_SPEED_MULTIPLIER * mean_speed(workout) + RUN_SPEED_SHIFT) * sample.weight_kg
                / M_IN_KM
                * duration_min
        }
        Workout::SportsWalking { height_cm, .. } => {
            let speed_msec = mean_speed(workout) * KMH_IN_MSEC;
            let height_m = height_cm / CM_IN_M;
            (WALK_WEIGHT_MULTIPLIER * sample.weight_kg
                + speed_msec.powi(2) / height_m * WALK_HEIGHT_MULTIPLIER * sample.weight_kg)
                * duration_min
        }
        Workout::Swimming { .. } => {
            (mean_speed(workout) + SWIM_SPEED_SHIFT)
                * SWIM_WEIGHT_MULTIPLIER
                * sample.weight_kg
                * sample.duration_hours
        }
    }
}

/// Compute the summary for a workout
pub fn show_training_info(workout: &Workout) -> InfoMessage {
    let info = InfoMessage {
        training_type: workout.kind().display_name().to_string(),
        duration: workout.sample().duration_hours,
        distance: distance(workout),
        speed: mean_speed(workout),
        calories: spent_calories(workout),
    };

    tracing::debug!(
        "{} workout: {:.3} km at {:.3} km/h, {:.3} kcal",
        info.training_type,
        info.distance,
        info.speed,
        info.calories
    );

    info
}
