use std::sync::atomic::AtomicU64;

use prometheus_client::encoding::text::encode;
use prometheus_client::encoding::EncodeLabelSet;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;

use crate::report::HealthReport;

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
struct QuantityLabels {
    quantity: String,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
struct LevelLabels {
    quantity: String,
    level: String,
}

impl LevelLabels {
    fn new(quantity: &str, level: &str) -> Self {
        Self {
            quantity: quantity.to_string(),
            level: level.to_string(),
        }
    }
}

type FloatGauge = Gauge<f64, AtomicU64>;

/// Encodes one evaluation in the Prometheus text format.
///
/// A fresh registry is built for every call; nothing is kept between
/// evaluations.
pub fn encode_report(report: &HealthReport) -> Result<String, std::fmt::Error> {
    let mut registry = Registry::with_prefix("motor_health");

    let status = Gauge::<i64>::default();
    status.set(report.status.code());
    registry.register("status", "Overall health status (0 normal, 1 warning, 2 danger)", status);

    let readings = Family::<QuantityLabels, FloatGauge>::default();
    let thresholds = Family::<LevelLabels, FloatGauge>::default();
    for reading in &report.readings {
        let quantity = reading.quantity.key();
        readings
            .get_or_create(&QuantityLabels {
                quantity: quantity.to_string(),
            })
            .set(reading.value);
        thresholds
            .get_or_create(&LevelLabels::new(quantity, "warning"))
            .set(reading.warning);
        thresholds
            .get_or_create(&LevelLabels::new(quantity, "danger"))
            .set(reading.danger);
    }
    registry.register("reading", "Current reading per quantity", readings);
    registry.register("threshold", "Configured threshold per quantity and level", thresholds);

    let hours = Family::<LevelLabels, FloatGauge>::default();
    let reachable = Family::<LevelLabels, Gauge>::default();
    for forecast in &report.forecasts {
        let quantity = forecast.quantity.key();
        for (level, estimate) in [("warning", forecast.to_warning), ("danger", forecast.to_danger)] {
            let labels = LevelLabels::new(quantity, level);
            match estimate.hours() {
                Some(h) => {
                    hours.get_or_create(&labels).set(h);
                    reachable.get_or_create(&labels).set(1);
                }
                None => {
                    reachable.get_or_create(&labels).set(0);
                }
            }
        }
    }
    registry.register(
        "hours_to_threshold",
        "Projected hours until the threshold is reached, absent when unreachable",
        hours,
    );
    registry.register(
        "threshold_reachable",
        "Whether the current trend ever reaches the threshold",
        reachable,
    );

    let mut buffer = String::new();
    encode(&mut buffer, &registry)?;
    Ok(buffer)
}
