use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Monitored quantities, in evaluation order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    MotorTemp,
    BearingTemp,
    Current,
    Vibration,
}

impl Quantity {
    pub const ALL: [Quantity; 4] = [
        Quantity::MotorTemp,
        Quantity::BearingTemp,
        Quantity::Current,
        Quantity::Vibration,
    ];

    /// Quantities that accept an operator trend rate.
    pub const TRENDED: [Quantity; 3] = [Quantity::MotorTemp, Quantity::BearingTemp, Quantity::Vibration];

    pub fn name(self) -> &'static str {
        match self {
            Quantity::MotorTemp => "motor temp",
            Quantity::BearingTemp => "bearing temp",
            Quantity::Current => "current",
            Quantity::Vibration => "vibration",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Quantity::MotorTemp => "motor_temp",
            Quantity::BearingTemp => "bearing_temp",
            Quantity::Current => "current",
            Quantity::Vibration => "vibration",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Quantity::MotorTemp | Quantity::BearingTemp => "°C",
            Quantity::Current => "A",
            Quantity::Vibration => "mm/s",
        }
    }

    /// Accepted input range for a reading of this quantity.
    pub fn range(self) -> (f64, f64) {
        match self {
            Quantity::MotorTemp | Quantity::BearingTemp => (20.0, 120.0),
            Quantity::Current => (0.0, 10.0),
            Quantity::Vibration => (0.0, 10.0),
        }
    }

    /// Accepted input range for a per-hour trend rate, `None` for untrended quantities.
    pub fn rate_range(self) -> Option<(f64, f64)> {
        match self {
            Quantity::MotorTemp | Quantity::BearingTemp => Some((0.0, 5.0)),
            Quantity::Vibration => Some((0.0, 2.0)),
            Quantity::Current => None,
        }
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Raw sensor values as supplied by the operator.
///
/// The two bearing sensors are kept separate here; classification and
/// projection work on [`Readings::bearing_temp`], the hotter of the pair.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Readings {
    pub motor_temp: f64,
    pub bearing_front_temp: f64,
    pub bearing_rear_temp: f64,
    pub current: f64,
    pub vibration: f64,
}

impl Default for Readings {
    fn default() -> Self {
        Self {
            motor_temp: 45.0,
            bearing_front_temp: 40.0,
            bearing_rear_temp: 40.0,
            current: 5.0,
            vibration: 1.5,
        }
    }
}

impl Readings {
    pub fn bearing_temp(&self) -> f64 {
        self.bearing_front_temp.max(self.bearing_rear_temp)
    }

    pub fn value(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::MotorTemp => self.motor_temp,
            Quantity::BearingTemp => self.bearing_temp(),
            Quantity::Current => self.current,
            Quantity::Vibration => self.vibration,
        }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        let (temp_min, temp_max) = Quantity::MotorTemp.range();
        check("motor_temp", self.motor_temp, temp_min, temp_max)?;
        check("bearing_front_temp", self.bearing_front_temp, temp_min, temp_max)?;
        check("bearing_rear_temp", self.bearing_rear_temp, temp_min, temp_max)?;
        let (min, max) = Quantity::Current.range();
        check("current", self.current, min, max)?;
        let (min, max) = Quantity::Vibration.range();
        check("vibration", self.vibration, min, max)
    }
}

/// Operator-supplied linear rates of increase, in units per hour.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendRates {
    pub motor_temp: f64,
    pub bearing_temp: f64,
    pub vibration: f64,
}

impl TrendRates {
    pub fn rate(&self, quantity: Quantity) -> Option<f64> {
        match quantity {
            Quantity::MotorTemp => Some(self.motor_temp),
            Quantity::BearingTemp => Some(self.bearing_temp),
            Quantity::Vibration => Some(self.vibration),
            Quantity::Current => None,
        }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        for quantity in Quantity::TRENDED {
            if let (Some(rate), Some((min, max))) = (self.rate(quantity), quantity.rate_range()) {
                check(rate_name(quantity), rate, min, max)?;
            }
        }
        Ok(())
    }
}

fn rate_name(quantity: Quantity) -> &'static str {
    match quantity {
        Quantity::MotorTemp => "motor_temp_rate",
        Quantity::BearingTemp => "bearing_temp_rate",
        Quantity::Vibration => "vibration_rate",
        Quantity::Current => "current_rate",
    }
}

fn check(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { name });
    }
    if value < min || value > max {
        return Err(InputError::OutOfRange { name, value, min, max });
    }
    Ok(())
}
