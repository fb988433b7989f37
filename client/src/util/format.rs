//! Number, money and timestamp formatting for display fields.
//!
//! Rounding works on the exact binary value, so `2.675` at two decimals is
//! `2.67`. Only an exact tie rounds half away from zero, and a value that
//! rounds to zero never prints a minus sign.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Visual severity tier, mapped onto text color classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Info,
    Success,
    Warning,
    Danger,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Info, Tier::Success, Tier::Warning, Tier::Danger];

    /// Tier for a 0-100 market score. NaN falls through to `Danger`.
    pub fn for_score(score: f64) -> Self {
        if score >= 75.0 {
            Tier::Info
        } else if score >= 50.0 {
            Tier::Success
        } else if score >= 25.0 {
            Tier::Warning
        } else {
            Tier::Danger
        }
    }

    /// Success for non-negative amounts, danger otherwise.
    pub fn for_sign(amount: f64) -> Self {
        if amount >= 0.0 { Tier::Success } else { Tier::Danger }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            Tier::Info => "text-info",
            Tier::Success => "text-success",
            Tier::Warning => "text-warning",
            Tier::Danger => "text-danger",
        }
    }
}

/// A formatted value paired with the tier it should be shown in.
#[derive(Clone, Debug, PartialEq)]
pub struct TieredText {
    pub text: String,
    pub tier: Tier,
}

/// Format `value` with exactly `digits` decimals.
pub fn to_fixed(value: f64, digits: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let prec = digits as usize;
    let scale = 10f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    let scaled = value * scale;
    // A tie only counts when the scaled product is exact.
    let exact_tie = scaled.fract().abs() == 0.5 && value.mul_add(scale, -scaled) == 0.0;
    let text = if exact_tie {
        format!("{:.prec$}", scaled.round() / scale)
    } else {
        format!("{value:.prec$}")
    };
    match text.strip_prefix('-') {
        Some(unsigned) if unsigned.bytes().all(|b| b == b'0' || b == b'.') => unsigned.to_owned(),
        _ => text,
    }
}

/// `"$"` followed by two decimals, e.g. `$1234.50`.
pub fn money(value: f64) -> String {
    format!("${}", to_fixed(value, 2))
}

/// Money with an explicit precision, used for per-unit part costs.
pub fn money_with(value: f64, digits: u32) -> String {
    format!("${}", to_fixed(value, digits))
}

/// Profit with a leading `-` for losses and the magnitude unsigned.
pub fn profit(value: f64) -> TieredText {
    let sign = if value < 0.0 { "-" } else { "" };
    TieredText {
        text: format!("{sign}{}", money(value.abs())),
        tier: Tier::for_sign(value),
    }
}

/// Return on investment as a percentage with one decimal.
pub fn roi(value: f64) -> TieredText {
    TieredText {
        text: format!("{}%", to_fixed(value * 100.0, 1)),
        tier: Tier::for_sign(value),
    }
}

/// Market score rounded to a whole number with its tier.
pub fn score(value: f64) -> TieredText {
    TieredText { text: to_fixed(value, 0), tier: Tier::for_score(value) }
}

/// A measurement with a fixed precision and unit suffix.
pub fn measure(value: f64, digits: u32, unit: &str) -> String {
    format!("{} {unit}", to_fixed(value, digits))
}

/// Parse a server timestamp. Values without an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let trimmed = raw.trim_end_matches('Z');
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Render a timestamp as `M/D/YYYY h:mma` in the given zone.
pub fn timestamp_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match parse_timestamp(raw) {
        Some(utc) => utc.with_timezone(tz).format("%-m/%-d/%Y %-I:%M%P").to_string(),
        None => raw.to_owned(),
    }
}

/// Render a timestamp in the browser's local zone.
pub fn local_timestamp(raw: &str) -> String {
    timestamp_in(raw, &chrono::Local)
}
