use clap::Args;
use serde::Deserialize;

use crate::quantity::{Readings, TrendRates};

/// Flat set of readings and rates, shared by the command line and the
/// HTTP query string. Anything left out falls back to the simulated
/// defaults of the dashboard.
#[derive(Args, Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvaluationInput {
    /// Motor body temperature (°C)
    #[arg(long, default_value_t = 45.0)]
    pub motor_temp: f64,

    /// Front bearing temperature (°C)
    #[arg(long, default_value_t = 40.0)]
    pub bearing_front_temp: f64,

    /// Rear bearing temperature (°C)
    #[arg(long, default_value_t = 40.0)]
    pub bearing_rear_temp: f64,

    /// Motor current (A)
    #[arg(long, default_value_t = 5.0)]
    pub current: f64,

    /// Highest measured vibration (mm/s)
    #[arg(long, default_value_t = 1.5)]
    pub vibration: f64,

    /// Motor temperature rise per hour (°C/h)
    #[arg(long, default_value_t = 0.0)]
    pub motor_temp_rate: f64,

    /// Bearing temperature rise per hour (°C/h)
    #[arg(long, default_value_t = 0.0)]
    pub bearing_temp_rate: f64,

    /// Vibration rise per hour (mm/s/h)
    #[arg(long, default_value_t = 0.0)]
    pub vibration_rate: f64,

    /// Include projected series for charting
    #[arg(long)]
    pub series: bool,
}

impl Default for EvaluationInput {
    fn default() -> Self {
        let readings = Readings::default();
        let rates = TrendRates::default();
        Self {
            motor_temp: readings.motor_temp,
            bearing_front_temp: readings.bearing_front_temp,
            bearing_rear_temp: readings.bearing_rear_temp,
            current: readings.current,
            vibration: readings.vibration,
            motor_temp_rate: rates.motor_temp,
            bearing_temp_rate: rates.bearing_temp,
            vibration_rate: rates.vibration,
            series: false,
        }
    }
}

impl EvaluationInput {
    pub fn readings(&self) -> Readings {
        Readings {
            motor_temp: self.motor_temp,
            bearing_front_temp: self.bearing_front_temp,
            bearing_rear_temp: self.bearing_rear_temp,
            current: self.current,
            vibration: self.vibration,
        }
    }

    pub fn rates(&self) -> TrendRates {
        TrendRates {
            motor_temp: self.motor_temp_rate,
            bearing_temp: self.bearing_temp_rate,
            vibration: self.vibration_rate,
        }
    }
}
