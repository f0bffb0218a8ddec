//! Motor health evaluation.
//!
//! Classifies motor readings (body temperature, bearing temperature,
//! current, vibration) against warning/danger thresholds and projects
//! operator-supplied trend rates forward to estimate the time left until
//! each threshold is reached.
//!
//! - [`classifier`]: per-quantity status and overall status with reasons
//! - [`projector`]: hours-to-threshold estimates and projection series
//! - [`config`]: validated thresholds, projection window, server settings
//! - [`report`]: one full evaluation for a presentation layer
//! - [`server`]: HTTP endpoints returning JSON and Prometheus metrics

pub mod classifier;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod projector;
pub mod quantity;
pub mod report;
pub mod server;
pub mod status;
pub mod table_types;
pub mod thresholds;

pub use classifier::{assess, classify, Assessment, Reason};
pub use config::MonitorConfig;
pub use error::{ConfigError, InputError};
pub use projector::{hours_until, Forecast, Outlook, ProjectionSeries, ProjectionWindow, TimeToThreshold};
pub use quantity::{Quantity, Readings, TrendRates};
pub use report::{evaluate, HealthReport};
pub use status::Status;
pub use thresholds::{CurrentRating, Threshold, ThresholdSet};
