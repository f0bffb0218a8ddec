use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::quantity::{Quantity, Readings};
use crate::status::Status;
use crate::thresholds::{Threshold, ThresholdSet};

/// Why a quantity raised the overall status.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Reason {
    pub quantity: Quantity,
    pub value: f64,
    pub threshold: f64,
    pub status: Status,
}

impl Display for Reason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} >= {} {}",
            self.quantity,
            trimmed(self.value),
            self.status,
            trimmed(self.threshold)
        )
    }
}

// two decimals without trailing zeros: 95.00 -> 95, 5.750 -> 5.75
fn trimmed(value: f64) -> String {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Assessment {
    pub status: Status,
    pub reasons: Vec<Reason>,
}

/// Status of one value against its threshold. Danger is checked first so a
/// dangerous value is never reported at warning severity.
pub fn level(value: f64, threshold: Threshold) -> Status {
    if value >= threshold.danger() {
        Status::Danger
    } else if value >= threshold.warning() {
        Status::Warning
    } else {
        Status::Normal
    }
}

pub fn classify<I>(entries: I) -> Assessment
where
    I: IntoIterator<Item = (Quantity, f64, Threshold)>,
{
    let reasons: Vec<Reason> = entries
        .into_iter()
        .filter_map(|(quantity, value, threshold)| {
            let status = level(value, threshold);
            let crossed = match status {
                Status::Danger => threshold.danger(),
                Status::Warning => threshold.warning(),
                Status::Normal => return None,
            };
            Some(Reason {
                quantity,
                value,
                threshold: crossed,
                status,
            })
        })
        .collect();

    let status = reasons.iter().map(|r| r.status).max().unwrap_or_default();
    Assessment { status, reasons }
}

/// Classifies every monitored quantity of `readings` in evaluation order.
pub fn assess(thresholds: &ThresholdSet, readings: &Readings) -> Assessment {
    classify(
        Quantity::ALL
            .into_iter()
            .map(|q| (q, readings.value(q), thresholds.get(q))),
    )
}
