use chrono::{NaiveDate, NaiveDateTime};
use metro::{
    fare::{self, FareCalculator, FareOptions, FareRules, PeakWindow, RiderType},
    shared::ClockTime,
};

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn off_peak(rider_type: RiderType) -> FareOptions {
    FareOptions::new(at(12, 0, 0), rider_type)
}

fn peak(rider_type: RiderType) -> FareOptions {
    FareOptions::new(at(8, 0, 0), rider_type)
}

#[test]
fn off_peak_adult_fare_test() {
    let calc = FareCalculator::default();
    assert_eq!(calc.compute_fare(3, &off_peak(RiderType::Adult)), 20);
}

#[test]
fn peak_adult_fare_test() {
    let calc = FareCalculator::default();
    assert_eq!(calc.compute_fare(3, &peak(RiderType::Adult)), 25);
}

#[test]
fn student_fare_rounds_up_test() {
    let calc = FareCalculator::default();
    assert_eq!(calc.compute_fare(3, &off_peak(RiderType::Student)), 10);
    // 20 * 1.25 * 0.5 = 12.5
    assert_eq!(calc.compute_fare(3, &peak(RiderType::Student)), 13);
}

#[test]
fn senior_fare_test() {
    let calc = FareCalculator::default();
    assert_eq!(calc.compute_fare(5, &off_peak(RiderType::Senior)), 18);
}

#[test]
fn zero_and_one_hop_pay_base_test() {
    let calc = FareCalculator::default();
    assert_eq!(calc.compute_fare(0, &off_peak(RiderType::Adult)), 10);
    assert_eq!(calc.compute_fare(1, &off_peak(RiderType::Adult)), 10);
}

#[test]
fn peak_window_boundaries_test() {
    let calc = FareCalculator::default();
    assert!(!calc.is_peak(&at(7, 29, 59)));
    assert!(calc.is_peak(&at(7, 30, 0)));
    assert!(calc.is_peak(&at(10, 30, 59)));
    assert!(!calc.is_peak(&at(10, 31, 0)));
    assert!(calc.is_peak(&at(17, 30, 0)));
    assert!(calc.is_peak(&at(20, 0, 0)));
    assert!(!calc.is_peak(&at(20, 1, 0)));
}

#[test]
fn fare_monotonic_in_hops_test() {
    let calc = FareCalculator::default();
    for rider_type in [RiderType::Adult, RiderType::Student, RiderType::Senior] {
        for opts in [peak(rider_type), off_peak(rider_type)] {
            let mut last = 0;
            for hops in 0..40 {
                let fare = calc.compute_fare(hops, &opts);
                assert!(fare >= last, "{rider_type} fare dropped at {hops} hops");
                last = fare;
            }
        }
    }
}

#[test]
fn custom_rules_test() {
    let rules = FareRules {
        base: 30,
        per_hop: 0,
        peak_hours: vec![PeakWindow::new(
            ClockTime::from_hm("12:00").unwrap(),
            ClockTime::from_hm("12:00").unwrap(),
        )],
        ..Default::default()
    };
    let calc = FareCalculator::new(rules);
    let noon = FareOptions::new(at(12, 0, 30), RiderType::Adult);
    let morning = FareOptions::new(at(8, 0, 0), RiderType::Adult);
    assert_eq!(calc.compute_fare(10, &noon), 38);
    assert_eq!(calc.compute_fare(10, &morning), 30);
}

#[test]
fn partial_json_rules_test() {
    let json = r#"{
        "base": 12,
        "daily_cap": 200,
        "peak_hours": [{ "start": "06:00", "end": "09:00" }]
    }"#;
    let rules = FareRules::from_json_str(json).unwrap();
    let defaults = FareRules::default();
    assert_eq!(rules.base, 12);
    assert_eq!(rules.daily_cap, 200);
    assert_eq!(rules.per_hop, defaults.per_hop);
    assert_eq!(rules.passes, defaults.passes);
    assert_eq!(rules.peak_hours.len(), 1);
    assert_eq!(rules.peak_hours[0].start.to_hm_string(), "06:00");
}

#[test]
fn json_pass_rules_test() {
    let json = r#"{ "passes": { "daily": { "price": 99, "duration_days": 1 } } }"#;
    let rules = FareRules::from_json_str(json).unwrap();
    assert_eq!(rules.pass("daily").map(|rule| rule.price), Some(99));
    assert!(rules.pass("weekly").is_none());
}

#[test]
fn invalid_peak_time_rejected_test() {
    let json = r#"{ "peak_hours": [{ "start": "25:00", "end": "26:00" }] }"#;
    let result = FareRules::from_json_str(json);
    assert!(matches!(result, Err(fare::Error::Json(_))));
}

#[test]
fn default_rules_round_trip_json_test() {
    let rules = FareRules::default();
    let json = serde_json::to_string(&rules).unwrap();
    assert!(json.contains("\"07:30\""));
    assert_eq!(FareRules::from_json_str(&json).unwrap(), rules);
}

#[test]
fn rider_type_parse_test() {
    assert_eq!("student".parse::<RiderType>().unwrap(), RiderType::Student);
    assert_eq!(RiderType::Senior.to_string(), "senior");
    assert!(matches!(
        "child".parse::<RiderType>(),
        Err(fare::Error::UnknownRiderType(_))
    ));
}
