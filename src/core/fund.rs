//! Fund records as delivered by the funds API

use serde::{Deserialize, Serialize};

/// Trailing returns, kept as the pre-formatted strings the API sends (e.g. `"12.5%"`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Performance {
    #[serde(rename = "1Y")]
    pub one_year: String,
    #[serde(rename = "3Y")]
    pub three_year: String,
    #[serde(rename = "5Y")]
    pub five_year: String,
}

impl Performance {
    /// Returns `(label, value)` pairs in display order.
    pub fn periods(&self) -> [(&'static str, &str); 3] {
        [
            ("1Y", self.one_year.as_str()),
            ("3Y", self.three_year.as_str()),
            ("5Y", self.five_year.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundRecord {
    pub id: i64,
    pub fund_name: String,
    pub category: String,
    pub manager: String,
    pub nav: f64,
    pub aum: String,
    pub performance: Performance,
    pub risk_profile: String,
    pub shariah: String,
    pub fund_type: String,
}

/// Direction indicator shown next to a performance figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Classifies a performance string. Unparsable input is NaN and lands on `Down`.
    pub fn of(text: &str) -> Self {
        if parse_leading_float(text) >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↗",
            Trend::Down => "↘",
        }
    }
}

/// Parses the longest numeric prefix after leading whitespace, so `"12.5%"` is 12.5.
/// Returns NaN when no prefix is numeric.
pub fn parse_leading_float(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].parse().unwrap_or(f64::NAN);
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when followed by at least one digit.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}
