//! Warning/danger threshold configuration.
//!
//! A [`Threshold`] can only be built through [`Threshold::new`], which
//! enforces `warning < danger`. Deserialization goes through the same
//! check, so a config file with inverted levels is rejected at load time
//! instead of producing odd classifications later.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::quantity::Quantity;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Threshold {
    warning: f64,
    danger: f64,
}

impl Threshold {
    pub fn new(quantity: Quantity, warning: f64, danger: f64) -> Result<Self, ConfigError> {
        if !warning.is_finite() || !danger.is_finite() {
            return Err(ConfigError::NonFiniteThreshold { quantity });
        }
        if warning >= danger {
            return Err(ConfigError::ThresholdOrder { quantity, warning, danger });
        }
        Ok(Self { warning, danger })
    }

    pub fn warning(&self) -> f64 {
        self.warning
    }

    pub fn danger(&self) -> f64 {
        self.danger
    }
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThresholdLevels {
    warning: f64,
    danger: f64,
}

/// Current thresholds are expressed as offsets over the nameplate current.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurrentRating {
    pub nominal: f64,
    #[serde(default = "default_warning_factor")]
    pub warning_factor: f64,
    #[serde(default = "default_danger_factor")]
    pub danger_factor: f64,
}

fn default_warning_factor() -> f64 {
    1.15
}

fn default_danger_factor() -> f64 {
    1.30
}

impl Default for CurrentRating {
    fn default() -> Self {
        Self {
            nominal: 5.0,
            warning_factor: default_warning_factor(),
            danger_factor: default_danger_factor(),
        }
    }
}

impl CurrentRating {
    pub fn threshold(&self) -> Result<Threshold, ConfigError> {
        if !self.nominal.is_finite() || self.nominal <= 0.0 {
            return Err(ConfigError::NominalCurrent(self.nominal));
        }
        Threshold::new(
            Quantity::Current,
            self.nominal * self.warning_factor,
            self.nominal * self.danger_factor,
        )
    }
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawThresholdSet {
    #[serde(default = "default_motor_temp")]
    motor_temp: ThresholdLevels,
    #[serde(default = "default_bearing_temp")]
    bearing_temp: ThresholdLevels,
    #[serde(default)]
    current: CurrentRating,
    #[serde(default = "default_vibration")]
    vibration: ThresholdLevels,
}

fn default_motor_temp() -> ThresholdLevels {
    ThresholdLevels { warning: 70.0, danger: 90.0 }
}

fn default_bearing_temp() -> ThresholdLevels {
    ThresholdLevels { warning: 65.0, danger: 85.0 }
}

// ISO 10816 vibration severity zones
fn default_vibration() -> ThresholdLevels {
    ThresholdLevels { warning: 2.8, danger: 4.5 }
}

/// Validated thresholds for every monitored quantity.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawThresholdSet")]
pub struct ThresholdSet {
    motor_temp: Threshold,
    bearing_temp: Threshold,
    current: Threshold,
    vibration: Threshold,
    current_rating: CurrentRating,
}

impl TryFrom<RawThresholdSet> for ThresholdSet {
    type Error = ConfigError;

    fn try_from(raw: RawThresholdSet) -> Result<Self, Self::Error> {
        Ok(Self {
            motor_temp: Threshold::new(Quantity::MotorTemp, raw.motor_temp.warning, raw.motor_temp.danger)?,
            bearing_temp: Threshold::new(Quantity::BearingTemp, raw.bearing_temp.warning, raw.bearing_temp.danger)?,
            current: raw.current.threshold()?,
            vibration: Threshold::new(Quantity::Vibration, raw.vibration.warning, raw.vibration.danger)?,
            current_rating: raw.current,
        })
    }
}

impl Default for ThresholdSet {
    fn default() -> Self {
        let level = |levels: ThresholdLevels| Threshold {
            warning: levels.warning,
            danger: levels.danger,
        };
        let rating = CurrentRating::default();
        Self {
            motor_temp: level(default_motor_temp()),
            bearing_temp: level(default_bearing_temp()),
            current: Threshold {
                warning: rating.nominal * rating.warning_factor,
                danger: rating.nominal * rating.danger_factor,
            },
            vibration: level(default_vibration()),
            current_rating: rating,
        }
    }
}

impl ThresholdSet {
    pub fn builder() -> ThresholdSetBuilder {
        ThresholdSetBuilder {
            raw: RawThresholdSet {
                motor_temp: default_motor_temp(),
                bearing_temp: default_bearing_temp(),
                current: CurrentRating::default(),
                vibration: default_vibration(),
            },
        }
    }

    pub fn get(&self, quantity: Quantity) -> Threshold {
        match quantity {
            Quantity::MotorTemp => self.motor_temp,
            Quantity::BearingTemp => self.bearing_temp,
            Quantity::Current => self.current,
            Quantity::Vibration => self.vibration,
        }
    }

    pub fn current_rating(&self) -> CurrentRating {
        self.current_rating
    }
}

/// Overrides individual levels on top of the built-in defaults.
pub struct ThresholdSetBuilder {
    raw: RawThresholdSet,
}

impl ThresholdSetBuilder {
    pub fn motor_temp(mut self, warning: f64, danger: f64) -> Self {
        self.raw.motor_temp = ThresholdLevels { warning, danger };
        self
    }

    pub fn bearing_temp(mut self, warning: f64, danger: f64) -> Self {
        self.raw.bearing_temp = ThresholdLevels { warning, danger };
        self
    }

    pub fn current(mut self, rating: CurrentRating) -> Self {
        self.raw.current = rating;
        self
    }

    pub fn vibration(mut self, warning: f64, danger: f64) -> Self {
        self.raw.vibration = ThresholdLevels { warning, danger };
        self
    }

    pub fn build(self) -> Result<ThresholdSet, ConfigError> {
        ThresholdSet::try_from(self.raw)
    }
}
