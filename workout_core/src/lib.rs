#![forbid(unsafe_code)]

//! Core domain model and calculations for the workout tracker.
//!
//! This crate provides:
//! - Domain types (samples, workout variants, summaries)
//! - Per-workout formulas for distance, mean speed and calories
//! - Dispatch from sensor type codes to workout variants
//! - Summary formatting
//! - Sensor package loading (built-in demo list, CSV, JSONL)

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod calculator;
pub mod dispatch;
pub mod message;
pub mod packages;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::{Config, LoggingConfig, OutputFormat};
pub use calculator::{distance, mean_speed, show_training_info, spent_calories};
pub use dispatch::read_package;
pub use message::InfoMessage;
pub use packages::{default_packages, load_packages, summarize};
