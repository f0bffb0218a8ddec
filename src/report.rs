use serde::Serialize;

use crate::classifier::{self, Reason};
use crate::config::MonitorConfig;
use crate::error::InputError;
use crate::projector::{self, Forecast, Outlook, ProjectionSeries};
use crate::quantity::{Quantity, Readings, TrendRates};
use crate::status::Status;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuantityReading {
    pub quantity: Quantity,
    pub value: f64,
    pub unit: &'static str,
    pub warning: f64,
    pub danger: f64,
    pub status: Status,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesReport {
    pub quantity: Quantity,
    pub warning: f64,
    pub danger: f64,
    pub samples: Vec<(f64, f64)>,
}

/// Result of one evaluation, ready for a presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HealthReport {
    pub status: Status,
    pub reasons: Vec<Reason>,
    pub readings: Vec<QuantityReading>,
    pub forecasts: Vec<Forecast>,
    pub outlook: Outlook,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<SeriesReport>,
}

pub fn evaluate(
    config: &MonitorConfig,
    readings: &Readings,
    rates: &TrendRates,
    with_series: bool,
) -> Result<HealthReport, InputError> {
    readings.validate()?;
    rates.validate()?;

    let thresholds = &config.thresholds;
    let assessment = classifier::assess(thresholds, readings);
    let forecasts = projector::forecast(thresholds, readings, rates);
    let outlook = Outlook::from_forecasts(&forecasts);

    let quantity_readings = Quantity::ALL
        .into_iter()
        .map(|quantity| {
            let threshold = thresholds.get(quantity);
            let value = readings.value(quantity);
            QuantityReading {
                quantity,
                value,
                unit: quantity.unit(),
                warning: threshold.warning(),
                danger: threshold.danger(),
                status: classifier::level(value, threshold),
            }
        })
        .collect();

    let series = if with_series {
        forecasts
            .iter()
            .map(|f| {
                let threshold = thresholds.get(f.quantity);
                SeriesReport {
                    quantity: f.quantity,
                    warning: threshold.warning(),
                    danger: threshold.danger(),
                    samples: ProjectionSeries::new(f.value, f.rate_per_hour, config.projection)
                        .iter()
                        .collect(),
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    log::debug!(
        "Evaluated status={} reasons={} outlook={:?}",
        assessment.status,
        assessment.reasons.len(),
        outlook
    );

    Ok(HealthReport {
        status: assessment.status,
        reasons: assessment.reasons,
        readings: quantity_readings,
        forecasts,
        outlook,
        series,
    })
}
