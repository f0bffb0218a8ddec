use std::path::PathBuf;

use crate::quantity::Quantity;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{quantity}: warning threshold {warning} must be below danger threshold {danger}")]
    ThresholdOrder { quantity: Quantity, warning: f64, danger: f64 },

    #[error("{quantity}: thresholds must be finite numbers")]
    NonFiniteThreshold { quantity: Quantity },

    #[error("nominal current must be a positive number, got {0}")]
    NominalCurrent(f64),

    #[error("projection window invalid: {0}")]
    ProjectionWindow(String),

    #[error("can't read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{name} must be a finite number")]
    NotFinite { name: &'static str },

    #[error("{name} = {value} is outside the accepted range {min}..={max}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
