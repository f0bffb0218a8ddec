//! Linear extrapolation of trend rates towards thresholds.
//!
//! Two modes are provided: a scalar estimate of the hours left until a
//! threshold is reached ([`hours_until`]) and a bounded series of projected
//! values for charting ([`ProjectionSeries`]).

use std::fmt::{Display, Formatter};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::quantity::{Quantity, Readings, TrendRates};
use crate::thresholds::ThresholdSet;

/// Result of projecting a value towards an upper threshold.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "hours", rename_all = "snake_case")]
pub enum TimeToThreshold {
    /// The value already meets or exceeds the threshold.
    AlreadyBreached,
    Hours(f64),
    /// The rate never brings the value up to the threshold.
    Unreachable,
}

impl TimeToThreshold {
    /// Finite hours left, with `AlreadyBreached` counting as zero.
    pub fn hours(&self) -> Option<f64> {
        match *self {
            TimeToThreshold::AlreadyBreached => Some(0.0),
            TimeToThreshold::Hours(hours) => Some(hours),
            TimeToThreshold::Unreachable => None,
        }
    }
}

impl Display for TimeToThreshold {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeToThreshold::AlreadyBreached => write!(f, "already breached"),
            TimeToThreshold::Unreachable => write!(f, "unreachable"),
            TimeToThreshold::Hours(hours) => {
                // whole minutes are enough for an operator estimate
                let minutes = (hours * 60.0).round().max(1.0) as u64;
                write!(f, "{}", humantime::format_duration(Duration::from_secs(minutes.saturating_mul(60))))
            }
        }
    }
}

/// Hours until `current + rate * h` reaches `threshold`.
///
/// The breach check comes before the rate check, so a value already past
/// its threshold reports `AlreadyBreached` even with a zero rate.
pub fn hours_until(current: f64, rate_per_hour: f64, threshold: f64) -> TimeToThreshold {
    if current >= threshold {
        return TimeToThreshold::AlreadyBreached;
    }
    if rate_per_hour <= 0.0 {
        return TimeToThreshold::Unreachable;
    }
    let hours = (threshold - current) / rate_per_hour;
    if !hours.is_finite() {
        return TimeToThreshold::Unreachable;
    }
    TimeToThreshold::Hours(hours)
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Forecast {
    pub quantity: Quantity,
    pub value: f64,
    pub rate_per_hour: f64,
    pub to_warning: TimeToThreshold,
    pub to_danger: TimeToThreshold,
}

/// Warning and danger estimates for every trended quantity.
pub fn forecast(thresholds: &ThresholdSet, readings: &Readings, rates: &TrendRates) -> Vec<Forecast> {
    Quantity::TRENDED
        .into_iter()
        .filter_map(|quantity| {
            let rate = rates.rate(quantity)?;
            let value = readings.value(quantity);
            let threshold = thresholds.get(quantity);
            Some(Forecast {
                quantity,
                value,
                rate_per_hour: rate,
                to_warning: hours_until(value, rate, threshold.warning()),
                to_danger: hours_until(value, rate, threshold.danger()),
            })
        })
        .collect()
}

/// The forecast with the fewest hours left until danger.
///
/// Ties go to the earliest entry; `None` when no quantity ever reaches danger.
pub fn most_critical(forecasts: &[Forecast]) -> Option<&Forecast> {
    let mut best: Option<(&Forecast, f64)> = None;
    for forecast in forecasts {
        let Some(hours) = forecast.to_danger.hours() else {
            continue;
        };
        let closer = match best {
            Some((_, best_hours)) => hours < best_hours,
            None => true,
        };
        if closer {
            best = Some((forecast, hours));
        }
    }
    best.map(|(forecast, _)| forecast)
}

/// Headline prediction for the motor as a whole.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outlook {
    /// No trend pushes any quantity towards danger.
    NoTrend,
    AlreadyInDanger { quantity: Quantity },
    DangerIn { quantity: Quantity, hours: f64 },
}

impl Outlook {
    pub fn from_forecasts(forecasts: &[Forecast]) -> Self {
        match most_critical(forecasts) {
            None => Outlook::NoTrend,
            Some(f) => match f.to_danger {
                TimeToThreshold::Hours(hours) => Outlook::DangerIn { quantity: f.quantity, hours },
                _ => Outlook::AlreadyInDanger { quantity: f.quantity },
            },
        }
    }
}

impl Display for Outlook {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Outlook::NoTrend => write!(f, "no rising trend entered, no prediction can be made"),
            Outlook::AlreadyInDanger { quantity } => write!(f, "motor is already in danger because of {}", quantity),
            Outlook::DangerIn { quantity, hours } => write!(
                f,
                "first danger status expected in ~{} caused by rising {}",
                TimeToThreshold::Hours(hours),
                quantity
            ),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProjectionWindow {
    horizon_hours: f64,
    step_hours: f64,
}

/// Upper bound on the samples a single projection series may hold.
pub const MAX_SERIES_SAMPLES: f64 = 10_000.0;

/// Time span and sample spacing of a projection series.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProjectionWindow")]
pub struct ProjectionWindow {
    horizon_hours: f64,
    step_hours: f64,
}

impl TryFrom<RawProjectionWindow> for ProjectionWindow {
    type Error = ConfigError;

    fn try_from(raw: RawProjectionWindow) -> Result<Self, Self::Error> {
        ProjectionWindow::new(raw.horizon_hours, raw.step_hours)
    }
}

impl Default for ProjectionWindow {
    fn default() -> Self {
        Self {
            horizon_hours: 48.0,
            step_hours: 1.0,
        }
    }
}

impl ProjectionWindow {
    pub fn new(horizon_hours: f64, step_hours: f64) -> Result<Self, ConfigError> {
        if !horizon_hours.is_finite() || horizon_hours <= 0.0 {
            return Err(ConfigError::ProjectionWindow(format!(
                "horizon must be a positive number of hours, got {}",
                horizon_hours
            )));
        }
        if !step_hours.is_finite() || step_hours <= 0.0 || step_hours > horizon_hours {
            return Err(ConfigError::ProjectionWindow(format!(
                "step must be positive and no longer than the horizon, got {}",
                step_hours
            )));
        }
        if horizon_hours / step_hours > MAX_SERIES_SAMPLES {
            return Err(ConfigError::ProjectionWindow(format!(
                "{} h in steps of {} h exceeds {} samples",
                horizon_hours, step_hours, MAX_SERIES_SAMPLES
            )));
        }
        Ok(Self {
            horizon_hours,
            step_hours,
        })
    }

    pub fn horizon_hours(&self) -> f64 {
        self.horizon_hours
    }

    pub fn step_hours(&self) -> f64 {
        self.step_hours
    }
}

/// A straight-line projection sampled over a [`ProjectionWindow`].
///
/// The series is generated lazily; [`ProjectionSeries::iter`] can be
/// called any number of times and always starts again at hour zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProjectionSeries {
    current: f64,
    rate_per_hour: f64,
    window: ProjectionWindow,
}

impl ProjectionSeries {
    pub fn new(current: f64, rate_per_hour: f64, window: ProjectionWindow) -> Self {
        Self {
            current,
            rate_per_hour,
            window,
        }
    }

    pub fn value_at(&self, elapsed_hours: f64) -> f64 {
        self.current + self.rate_per_hour * elapsed_hours
    }

    pub fn len(&self) -> usize {
        if self.rate_per_hour == 0.0 {
            return 2;
        }
        let steps = self.window.horizon_hours / self.window.step_hours;
        // absorb rounding noise such as 1.0 / 0.1
        let intervals = (steps - 1e-9).ceil().max(1.0) as usize;
        intervals + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> SeriesIter {
        SeriesIter {
            series: *self,
            index: 0,
            len: self.len(),
        }
    }
}

impl IntoIterator for &ProjectionSeries {
    type Item = (f64, f64);
    type IntoIter = SeriesIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone, Debug)]
pub struct SeriesIter {
    series: ProjectionSeries,
    index: usize,
    len: usize,
}

impl Iterator for SeriesIter {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            return None;
        }
        let elapsed = if self.index + 1 == self.len {
            self.series.window.horizon_hours
        } else {
            self.index as f64 * self.series.window.step_hours
        };
        self.index += 1;
        Some((elapsed, self.series.value_at(elapsed)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SeriesIter {}
