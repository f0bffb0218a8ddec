use tabled::settings::object::Rows;
use tabled::settings::{Alignment, Modify, Panel, Style};
use tabled::{Table, Tabled};

use crate::quantity::Quantity;
use crate::report::HealthReport;
use crate::thresholds::ThresholdSet;

#[derive(Tabled)]
struct ReadingRow {
    quantity: &'static str,
    value: String,
    warning: String,
    danger: String,
    status: String,
}

#[derive(Tabled)]
struct ForecastRow {
    quantity: &'static str,
    #[tabled(rename = "rate/h")]
    rate: String,
    #[tabled(rename = "to warning")]
    to_warning: String,
    #[tabled(rename = "to danger")]
    to_danger: String,
}

#[derive(Tabled)]
struct ThresholdRow {
    quantity: &'static str,
    unit: &'static str,
    warning: String,
    danger: String,
}

#[derive(Tabled)]
struct SampleRow {
    elapsed: String,
    value: String,
}

fn render<T: Tabled>(title: &str, rows: &[T]) -> String {
    Table::builder(rows)
        .index()
        .build()
        .with(Panel::header(title))
        .with(Style::sharp())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

fn with_unit(value: f64, unit: &str) -> String {
    format!("{:.2} {}", value, unit)
}

pub fn render_report(report: &HealthReport) -> String {
    let readings: Vec<ReadingRow> = report
        .readings
        .iter()
        .map(|r| ReadingRow {
            quantity: r.quantity.name(),
            value: with_unit(r.value, r.unit),
            warning: with_unit(r.warning, r.unit),
            danger: with_unit(r.danger, r.unit),
            status: r.status.to_string(),
        })
        .collect();

    let forecasts: Vec<ForecastRow> = report
        .forecasts
        .iter()
        .map(|f| ForecastRow {
            quantity: f.quantity.name(),
            rate: with_unit(f.rate_per_hour, f.quantity.unit()),
            to_warning: f.to_warning.to_string(),
            to_danger: f.to_danger.to_string(),
        })
        .collect();

    let mut out = String::new();
    out.push_str(&format!("Status: {}\n", report.status.as_str().to_uppercase()));
    for reason in &report.reasons {
        out.push_str(&format!("  - {}\n", reason));
    }
    out.push_str(&render("Readings", &readings));
    out.push('\n');
    out.push_str(&render("Forecast", &forecasts));
    out.push('\n');
    out.push_str(&format!("Outlook: {}\n", report.outlook));

    for series in &report.series {
        let unit = series.quantity.unit();
        let rows: Vec<SampleRow> = series
            .samples
            .iter()
            .map(|(hours, value)| SampleRow {
                elapsed: format!("{:.1} h", hours),
                value: with_unit(*value, unit),
            })
            .collect();
        out.push_str(&render(&format!("Projection: {}", series.quantity), &rows));
        out.push('\n');
    }
    out
}

pub fn render_thresholds(thresholds: &ThresholdSet) -> String {
    let rows: Vec<ThresholdRow> = Quantity::ALL
        .into_iter()
        .map(|quantity| {
            let threshold = thresholds.get(quantity);
            ThresholdRow {
                quantity: quantity.name(),
                unit: quantity.unit(),
                warning: format!("{:.2}", threshold.warning()),
                danger: format!("{:.2}", threshold.danger()),
            }
        })
        .collect();
    render("Thresholds", &rows)
}
