// Number formatters
//
// Shared by the terminal UI and the plain-text report so both show the
// same figures.

use unicode_width::UnicodeWidthStr;

/// Shown wherever a wear percentage is undefined
pub const WEAR_PLACEHOLDER: &str = "—";

/// Group the digits of an integer string with commas
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();

    for (count, ch) in digits.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, ch);
    }

    result
}

/// Distance with two decimals and grouped thousands
///
/// # Examples
/// ```
/// use shoebox::format::format_km;
///
/// assert_eq!(format_km(5.0), "5.00");
/// assert_eq!(format_km(1234.567), "1,234.57");
/// ```
pub fn format_km(km: f64) -> String {
    let fixed = format!("{:.2}", km.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if km < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, group_thousands(whole), frac)
}

/// Whole minutes
pub fn format_minutes(min: f64) -> String {
    format!("{:.0}", min)
}

/// `60%`, or the placeholder when there is no limit
pub fn format_wear(percent: Option<u32>) -> String {
    match percent {
        Some(p) => format!("{}%", p),
        None => WEAR_PLACEHOLDER.to_string(),
    }
}

/// Cut `s` to at most `max_width` terminal columns, marking the cut with `…`
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
