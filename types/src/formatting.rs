//! Centralized number formatting utilities.
//!
//! All XP values shown on the page go through this module so the selection
//! panel and the exported `formatXP` helper agree. The page uses the `it-IT`
//! convention: `.` as thousands separator, and no grouping for four-digit
//! values (minimum grouping digits of 2).

/// Insert `sep` every three digits, counting from the right.
///
/// Grouping only kicks in once the integer part has at least `min_digits`
/// digits.
fn group_digits(digits: &str, sep: char, min_digits: usize) -> String {
    if digits.len() < min_digits {
        return digits.to_string();
    }
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(sep);
        }
        result.push(c);
    }
    result
}

/// Format a number with thousands separators.
///
/// - Standard: `1,234,567` (groups from 1,000)
/// - European: `1.234.567` (groups from 10.000, `it-IT` style)
///
/// # Examples
/// ```
/// use encounters_types::formatting::format_thousands;
/// assert_eq!(format_thousands(0, false), "0");
/// assert_eq!(format_thousands(1_500, false), "1,500");
/// assert_eq!(format_thousands(1_500, true), "1500");
/// assert_eq!(format_thousands(1_500_000, true), "1.500.000");
/// ```
pub fn format_thousands(n: i64, european: bool) -> String {
    let digits = n.unsigned_abs().to_string();
    let grouped = if european {
        group_digits(&digits, '.', 5)
    } else {
        group_digits(&digits, ',', 4)
    };
    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format an XP value the way `Intl.NumberFormat` does for the page locale.
///
/// Fractions keep up to three digits (trailing zeros dropped) after `,`
/// (european) or `.`; `NaN` and infinities print as `NaN` and `∞`.
///
/// # Examples
/// ```
/// use encounters_types::format_xp;
/// assert_eq!(format_xp(450.0, true), "450");
/// assert_eq!(format_xp(1_234_567.0, true), "1.234.567");
/// assert_eq!(format_xp(-2_500.0, true), "-2500");
/// assert_eq!(format_xp(1_234.5, true), "1234,5");
/// assert_eq!(format_xp(f64::NAN, true), "NaN");
/// ```
pub fn format_xp(xp: f64, european: bool) -> String {
    if xp.is_nan() {
        return "NaN".to_string();
    }
    if xp.is_infinite() {
        return if xp < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let fixed = format!("{:.3}", xp.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');
    let (sep, decimal, min_digits) = if european { ('.', ',', 5) } else { (',', '.', 4) };

    let mut result = String::new();
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if xp < 0.0 && !is_zero {
        result.push('-');
    }
    result.push_str(&group_digits(int_part, sep, min_digits));
    if !frac_part.is_empty() {
        result.push(decimal);
        result.push_str(frac_part);
    }
    result
}
