use super::*;
use chrono::FixedOffset;

// =============================================================
// to_fixed / money
// =============================================================

#[test]
fn to_fixed_pads_to_precision() {
    assert_eq!(to_fixed(1234.5, 2), "1234.50");
    assert_eq!(to_fixed(3.0, 1), "3.0");
    assert_eq!(to_fixed(7.0, 0), "7");
}

#[test]
fn to_fixed_rounds_half_away_from_zero() {
    assert_eq!(to_fixed(2.5, 0), "3");
    assert_eq!(to_fixed(-2.5, 0), "-3");
    assert_eq!(to_fixed(62.5, 0), "63");
}

#[test]
fn to_fixed_rounds_the_stored_binary_value() {
    assert_eq!(to_fixed(2.675, 2), "2.67");
    assert_eq!(to_fixed(1.45, 1), "1.4");
    assert_eq!(to_fixed(1.115, 2), "1.11");
    assert_eq!(to_fixed(0.615, 2), "0.61");
}

#[test]
fn to_fixed_exact_ties_below_the_point_round_up() {
    assert_eq!(to_fixed(0.125, 2), "0.13");
    assert_eq!(to_fixed(12.375, 2), "12.38");
    assert_eq!(to_fixed(-101.25, 1), "-101.3");
}

#[test]
fn to_fixed_never_prints_negative_zero() {
    assert_eq!(to_fixed(-0.0, 2), "0.00");
    assert_eq!(to_fixed(-0.001, 2), "0.00");
}

#[test]
fn money_prefixes_dollar_sign() {
    assert_eq!(money(1234.5), "$1234.50");
    assert_eq!(money(0.0), "$0.00");
}

#[test]
fn money_with_uses_requested_precision() {
    assert_eq!(money_with(0.125, 3), "$0.125");
}

// =============================================================
// profit / roi
// =============================================================

#[test]
fn profit_loss_has_leading_minus_and_danger_tier() {
    let out = profit(-5.0);
    assert_eq!(out.text, "-$5.00");
    assert!(out.text.starts_with('-'));
    assert_eq!(out.tier, Tier::Danger);
}

#[test]
fn profit_gain_is_success_tier() {
    let out = profit(12.25);
    assert_eq!(out.text, "$12.25");
    assert_eq!(out.tier, Tier::Success);
}

#[test]
fn profit_zero_is_success_tier() {
    assert_eq!(profit(0.0).tier, Tier::Success);
}

#[test]
fn roi_renders_percentage_with_one_decimal() {
    let out = roi(0.125);
    assert_eq!(out.text, "12.5%");
    assert_eq!(out.tier, Tier::Success);
}

#[test]
fn roi_negative_is_danger_tier() {
    let out = roi(-0.5);
    assert_eq!(out.text, "-50.0%");
    assert_eq!(out.tier, Tier::Danger);
}

// =============================================================
// Tier
// =============================================================

#[test]
fn tier_for_score_boundaries() {
    assert_eq!(Tier::for_score(100.0), Tier::Info);
    assert_eq!(Tier::for_score(75.0), Tier::Info);
    assert_eq!(Tier::for_score(74.99), Tier::Success);
    assert_eq!(Tier::for_score(50.0), Tier::Success);
    assert_eq!(Tier::for_score(49.99), Tier::Warning);
    assert_eq!(Tier::for_score(25.0), Tier::Warning);
    assert_eq!(Tier::for_score(24.99), Tier::Danger);
    assert_eq!(Tier::for_score(-10.0), Tier::Danger);
}

#[test]
fn tier_for_score_nan_is_danger() {
    assert_eq!(Tier::for_score(f64::NAN), Tier::Danger);
}

#[test]
fn tier_for_score_is_exclusive_across_range() {
    let mut v = -20.0;
    while v <= 120.0 {
        let tier = Tier::for_score(v);
        let expected = if v >= 75.0 {
            Tier::Info
        } else if v >= 50.0 {
            Tier::Success
        } else if v >= 25.0 {
            Tier::Warning
        } else {
            Tier::Danger
        };
        assert_eq!(tier, expected, "score {v}");
        v += 0.5;
    }
}

#[test]
fn tier_text_classes_are_distinct() {
    let classes: Vec<_> = Tier::ALL.iter().map(|t| t.text_class()).collect();
    assert_eq!(classes, vec!["text-info", "text-success", "text-warning", "text-danger"]);
}

#[test]
fn score_rounds_to_whole_number() {
    let out = score(74.6);
    assert_eq!(out.text, "75");
    assert_eq!(out.tier, Tier::Success);
}

// =============================================================
// measure
// =============================================================

#[test]
fn measure_appends_unit() {
    assert_eq!(measure(12.375, 2, "g"), "12.38 g");
    assert_eq!(measure(101.25, 1, "mL"), "101.3 mL");
    assert_eq!(measure(88.0, 1, "mm"), "88.0 mm");
}

// =============================================================
// timestamps
// =============================================================

#[test]
fn parse_timestamp_accepts_offsets_and_naive_values() {
    let with_offset = parse_timestamp("2021-09-01T14:05:00+00:00").unwrap();
    let naive = parse_timestamp("2021-09-01T14:05:00.123456").unwrap();
    let zulu = parse_timestamp("2021-09-01T14:05:00Z").unwrap();
    assert_eq!(with_offset.timestamp(), zulu.timestamp());
    assert_eq!(naive.timestamp(), zulu.timestamp());
}

#[test]
fn parse_timestamp_rejects_garbage() {
    assert!(parse_timestamp("yesterday").is_none());
}

#[test]
fn timestamp_in_formats_month_day_year_and_short_time() {
    assert_eq!(timestamp_in("2021-09-01T14:05:00", &Utc), "9/1/2021 2:05pm");
    assert_eq!(timestamp_in("2021-12-25T00:30:00Z", &Utc), "12/25/2021 12:30am");
}

#[test]
fn timestamp_in_converts_to_target_zone() {
    let east = FixedOffset::east_opt(3 * 3600).unwrap();
    assert_eq!(timestamp_in("2021-09-01T22:00:00Z", &east), "9/2/2021 1:00am");
}

#[test]
fn timestamp_in_passes_through_unparseable_input() {
    assert_eq!(timestamp_in("n/a", &Utc), "n/a");
}
