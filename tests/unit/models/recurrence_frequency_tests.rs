// Unit tests for recurrence frequency and week parity types

use chrono::Weekday;
use test_case::test_case;

use lesson_scheduler::models::recurrence::{Frequency, RecurrenceRule, WeekParity};

#[test_case("weekly", Frequency::Weekly; "weekly frequency")]
#[test_case("BIWEEKLY", Frequency::Biweekly; "biweekly frequency uppercase")]
#[test_case("fortnightly", Frequency::Biweekly; "fortnightly alias")]
#[test_case(" monthly ", Frequency::Monthly; "monthly frequency padded")]
fn test_frequency_from_str(input: &str, expected: Frequency) {
    assert_eq!(input.parse::<Frequency>(), Ok(expected));
}

#[test_case(Frequency::Weekly, "weekly"; "weekly")]
#[test_case(Frequency::Biweekly, "biweekly"; "biweekly")]
#[test_case(Frequency::Monthly, "monthly"; "monthly")]
fn test_frequency_display_round_trips(freq: Frequency, label: &str) {
    assert_eq!(freq.to_string(), label);
    assert_eq!(label.parse::<Frequency>(), Ok(freq));
}

#[test_case("odd", WeekParity::Odd; "odd")]
#[test_case("Even", WeekParity::Even; "even mixed case")]
#[test_case("all", WeekParity::All; "all")]
fn test_week_parity_from_str(input: &str, expected: WeekParity) {
    assert_eq!(input.parse::<WeekParity>(), Ok(expected));
}

#[test]
fn test_unknown_values_are_rejected() {
    assert_eq!(
        "yearly".parse::<Frequency>(),
        Err("Unknown frequency 'yearly'".to_string())
    );
    assert!("alternate".parse::<WeekParity>().is_err());
}

#[test]
fn test_default_parity_is_all() {
    assert_eq!(WeekParity::default(), WeekParity::All);
}

#[test_case(Frequency::Weekly, WeekParity::Odd, WeekParity::All; "weekly ignores parity")]
#[test_case(Frequency::Monthly, WeekParity::Even, WeekParity::All; "monthly ignores parity")]
#[test_case(Frequency::Biweekly, WeekParity::Even, WeekParity::Even; "biweekly keeps parity")]
fn test_effective_parity(frequency: Frequency, configured: WeekParity, effective: WeekParity) {
    let rule = RecurrenceRule {
        frequency,
        anchor_day: Weekday::Mon,
        week_parity: configured,
    };
    assert_eq!(rule.effective_parity(), effective);
}

#[test]
fn test_rule_serde_uses_lowercase_names() {
    let rule = RecurrenceRule::biweekly(Weekday::Wed, WeekParity::Odd);
    let json = serde_json::to_value(rule).unwrap();

    assert_eq!(json["frequency"], "biweekly");
    assert_eq!(json["week_parity"], "odd");
    assert_eq!(json["anchor_day"], "Wed");

    let back: RecurrenceRule = serde_json::from_value(json).unwrap();
    assert_eq!(back, rule);
}
