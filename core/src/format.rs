//! Display formatting for GPA values.

/// Render `gpa` with exactly two digits after the decimal point.
///
/// Non-finite input is rendered rather than rejected: NaN becomes `"NaN"`
/// and infinities `"Infinity"` / `"-Infinity"`.
pub fn format_gpa(gpa: f64) -> String {
    if gpa.is_nan() {
        return "NaN".to_string();
    }
    if gpa.is_infinite() {
        let text = if gpa > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if let Some(text) = format_tie(gpa) {
        return text;
    }
    // `+ 0.0` folds negative zero into positive zero.
    format!("{:.2}", gpa + 0.0)
}

/// Exact ties at the third decimal round away from zero (`8.125 -> "8.13"`),
/// where `{:.2}` would round to even.
///
/// A finite f64 sits exactly halfway between two hundredths only when it is
/// an odd multiple of 1/8, so the tie test and the `* 100.0` below are exact.
fn format_tie(gpa: f64) -> Option<String> {
    let magnitude = gpa.abs();
    let eighths = magnitude * 8.0;
    if magnitude >= 1e15 || eighths.fract() != 0.0 || eighths % 2.0 != 1.0 {
        return None;
    }
    let hundredths = (magnitude * 100.0).ceil() as u64;
    let sign = if gpa < 0.0 { "-" } else { "" };
    Some(format!("{sign}{}.{:02}", hundredths / 100, hundredths % 100))
}

/// Parse the longest decimal prefix of `input`, after leading whitespace.
///
/// `"7.1"` and `"7.1 points"` both give `7.1`; input with no numeric prefix
/// gives NaN.
pub fn parse_gpa(input: &str) -> f64 {
    let trimmed = input.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return match trimmed.get(digits_start..) {
            Some(rest) if rest.starts_with("Infinity") => {
                if trimmed.starts_with('-') {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                }
            }
            _ => f64::NAN,
        };
    }

    // Optional exponent, only taken when it has at least one digit.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
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

    trimmed[..end].parse().unwrap_or(f64::NAN)
}

/// `format_gpa(parse_gpa(input))`.
pub fn format_gpa_str(input: &str) -> String {
    format_gpa(parse_gpa(input))
}
