//! Display formatting for combat power values.

/// Formats a power value as fixed-point with two decimals and `,` thousands grouping.
///
/// The fraction is truncated, not rounded: `1234.567` becomes `"1,234.56"`.
/// Non-finite values format as `"0.00"`.
pub fn format_power(value: f64) -> String {
    if !value.is_finite() {
        return "0.00".to_string();
    }

    // Cut the shortest round-trip decimal form instead of scaling by 100, so
    // 0.29 stays 0.29 and 1234.569999999 stays 1234.56.
    let decimal = value.abs().to_string();
    let (whole, frac) = decimal.split_once('.').unwrap_or((decimal.as_str(), ""));
    let frac: String = frac.chars().chain(std::iter::repeat('0')).take(2).collect();
    let is_zero = whole.bytes().all(|b| b == b'0') && frac == "00";
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    format!("{sign}{}.{frac}", group_thousands(whole))
}

/// Inserts `,` every three digits of an integer digit string.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
