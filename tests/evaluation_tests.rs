//! End-to-end checks of classification and projection over the public API.

use motor_health::{
    assess, classify, evaluate, hours_until, MonitorConfig, Outlook, ProjectionSeries, ProjectionWindow, Quantity,
    Readings, Status, Threshold, ThresholdSet, TimeToThreshold, TrendRates,
};

fn thresholds() -> ThresholdSet {
    ThresholdSet::default()
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

#[test]
fn hot_motor_is_danger_with_single_reason() {
    let readings = Readings {
        motor_temp: 95.0,
        ..Readings::default()
    };
    let assessment = assess(&thresholds(), &readings);

    assert_eq!(assessment.status, Status::Danger);
    assert_eq!(assessment.reasons.len(), 1);
    let reason = assessment.reasons[0];
    assert_eq!(reason.quantity, Quantity::MotorTemp);
    assert_eq!(reason.threshold, 90.0);
    assert_eq!(reason.status, Status::Danger);
    assert_eq!(reason.to_string(), "motor temp 95 >= danger 90");
}

#[test]
fn nominal_current_stays_normal() {
    let readings = Readings {
        current: 5.0,
        ..Readings::default()
    };
    let assessment = assess(&thresholds(), &readings);
    assert_eq!(assessment.status, Status::Normal);
    assert!(assessment.reasons.iter().all(|r| r.quantity != Quantity::Current));
}

#[test]
fn bearing_uses_hotter_sensor() {
    let readings = Readings {
        bearing_front_temp: 50.0,
        bearing_rear_temp: 66.0,
        ..Readings::default()
    };
    let assessment = assess(&thresholds(), &readings);
    assert_eq!(assessment.status, Status::Warning);
    assert_eq!(assessment.reasons[0].quantity, Quantity::BearingTemp);
    assert_eq!(assessment.reasons[0].value, 66.0);
    assert_eq!(assessment.reasons[0].threshold, 65.0);
}

#[test]
fn overall_status_follows_worst_quantity() {
    let t = |w, d| Threshold::new(Quantity::Vibration, w, d).unwrap();
    let cases = [
        (vec![1.0, 1.0, 1.0], Status::Normal, 0),
        (vec![2.0, 1.0, 1.0], Status::Warning, 1),
        (vec![2.0, 3.0, 2.0], Status::Danger, 3),
        (vec![1.0, 1.0, 3.0], Status::Danger, 1),
    ];
    for (values, expected, reasons) in cases {
        let entries = values
            .iter()
            .map(|v| (Quantity::Vibration, *v, t(2.0, 3.0)))
            .collect::<Vec<_>>();
        let assessment = classify(entries);
        assert_eq!(assessment.status, expected, "values {:?}", values);
        assert_eq!(assessment.reasons.len(), reasons, "values {:?}", values);
    }
}

#[test]
fn reasons_keep_evaluation_order_and_own_tags() {
    let readings = Readings {
        motor_temp: 71.0,
        bearing_front_temp: 90.0,
        current: 6.0,
        vibration: 4.5,
        ..Readings::default()
    };
    let assessment = assess(&thresholds(), &readings);
    let tags: Vec<_> = assessment.reasons.iter().map(|r| (r.quantity, r.status)).collect();
    assert_eq!(
        tags,
        vec![
            (Quantity::MotorTemp, Status::Warning),
            (Quantity::BearingTemp, Status::Danger),
            (Quantity::Current, Status::Warning),
            (Quantity::Vibration, Status::Danger),
        ]
    );
    assert_eq!(assessment.status, Status::Danger);
}

// ---------------------------------------------------------------------------
// Projector
// ---------------------------------------------------------------------------

#[test]
fn breached_value_is_zero_hours_for_any_rate() {
    for rate in [0.0, 0.5, 3.0, -1.0] {
        assert_eq!(hours_until(95.0, rate, 90.0), TimeToThreshold::AlreadyBreached);
        assert_eq!(hours_until(95.0, rate, 90.0).hours(), Some(0.0));
    }
}

#[test]
fn positive_rate_gives_positive_hours() {
    for (current, rate, threshold) in [(45.0, 2.0, 90.0), (1.5, 0.05, 2.8), (84.9, 5.0, 85.0)] {
        let hours = hours_until(current, rate, threshold).hours().unwrap();
        let expected = (threshold - current) / rate;
        assert!((hours - expected).abs() < 1e-9, "{} vs {}", hours, expected);
        assert!(hours > 0.0);
    }
    assert_eq!(hours_until(45.0, 2.0, 90.0), TimeToThreshold::Hours(22.5));
}

#[test]
fn flat_trend_never_reaches_danger() {
    assert_eq!(hours_until(45.0, 0.0, 90.0), TimeToThreshold::Unreachable);
    assert_eq!(hours_until(45.0, 0.0, 90.0).hours(), None);
}

#[test]
fn most_critical_quantity_wins_outlook() {
    let rates = TrendRates {
        motor_temp: 1.0,   // 45 h to 90
        bearing_temp: 2.0, // 22.5 h to 85
        vibration: 0.5,    // 6 h to 4.5
    };
    let report = evaluate(&MonitorConfig::default(), &Readings::default(), &rates, false).unwrap();
    assert_eq!(
        report.outlook,
        Outlook::DangerIn {
            quantity: Quantity::Vibration,
            hours: 6.0
        }
    );
}

#[test]
fn ties_go_to_first_quantity() {
    let readings = Readings {
        motor_temp: 80.0,
        bearing_front_temp: 75.0,
        ..Readings::default()
    };
    let rates = TrendRates {
        motor_temp: 2.0,
        bearing_temp: 2.0,
        vibration: 0.0,
    };
    let report = evaluate(&MonitorConfig::default(), &readings, &rates, false).unwrap();
    assert_eq!(
        report.outlook,
        Outlook::DangerIn {
            quantity: Quantity::MotorTemp,
            hours: 5.0
        }
    );
}

#[test]
fn series_spans_whole_horizon() {
    let window = ProjectionWindow::new(24.0, 2.5).unwrap();
    let series = ProjectionSeries::new(60.0, 1.25, window);
    let samples: Vec<_> = series.iter().collect();

    assert_eq!(samples.first(), Some(&(0.0, 60.0)));
    assert_eq!(samples.last().map(|(t, _)| *t), Some(24.0));
    assert!(samples.windows(2).all(|w| w[0].0 < w[1].0));
    for (elapsed, value) in &samples {
        assert!((value - (60.0 + 1.25 * elapsed)).abs() < 1e-9);
    }
}

#[test]
fn report_serializes_tagged_estimates() {
    let rates = TrendRates {
        motor_temp: 2.0,
        ..TrendRates::default()
    };
    let report = evaluate(&MonitorConfig::default(), &Readings::default(), &rates, false).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["status"], "normal");
    assert_eq!(json["forecasts"][0]["quantity"], "motor_temp");
    assert_eq!(json["forecasts"][0]["to_danger"]["kind"], "hours");
    assert_eq!(json["forecasts"][0]["to_danger"]["hours"], 22.5);
    assert_eq!(json["forecasts"][1]["to_danger"]["kind"], "unreachable");
    assert_eq!(json["outlook"]["kind"], "danger_in");
    assert!(json.get("series").is_none());
}

#[test]
fn vanishing_rate_never_becomes_infinite_hours() {
    let rates = TrendRates {
        motor_temp: 5e-324,
        ..TrendRates::default()
    };
    let report = evaluate(&MonitorConfig::default(), &Readings::default(), &rates, false).unwrap();
    assert_eq!(report.forecasts[0].to_danger, TimeToThreshold::Unreachable);
    assert_eq!(report.outlook, Outlook::NoTrend);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["forecasts"][0]["to_danger"]["kind"], "unreachable");
}

#[test]
fn tiny_rate_renders_report_without_overflow() {
    let rates = TrendRates {
        motor_temp: 1e-15,
        ..TrendRates::default()
    };
    let report = evaluate(&MonitorConfig::default(), &Readings::default(), &rates, false).unwrap();
    assert!(matches!(report.outlook, Outlook::DangerIn { quantity: Quantity::MotorTemp, .. }));

    let text = motor_health::table_types::render_report(&report);
    assert!(text.contains("first danger status expected"), "{}", text);
}
