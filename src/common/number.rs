//! Plain-text rendering of numeric cell values.
//!
//! Numbers are written the way a spreadsheet user expects to read them back:
//! integral floats lose their fractional part, `-0` prints as `0`, the
//! non-finite values use the `NaN` / `Infinity` spellings, and digits beyond
//! the shortest round-trip form are never invented.

/// Decimal exponents (of the form `0.ddd × 10^n`) printed positionally.
const POSITIONAL_MIN: i32 = -5;
const POSITIONAL_MAX: i32 = 21;

/// Format a signed integer.
#[inline]
pub fn format_int(value: i64) -> String {
    let mut buf = itoa::Buffer::new();
    buf.format(value).to_owned()
}

/// Format a float using the shortest representation that round-trips.
///
/// Layout follows `Number.prototype.toString`: positional notation for
/// magnitudes in `[1e-6, 1e21)`, padded with zeros where the shortest digits
/// run out, and `d.ddde±x` outside that range.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let mut buf = ryu::Buffer::new();
    let (digits, n) = shortest_digits(buf.format_finite(value.abs()));
    let k = digits.len() as i32;

    let mut out = String::with_capacity(digits.len() + 8);
    if value < 0.0 {
        out.push('-');
    }

    if k <= n && n <= POSITIONAL_MAX {
        out.push_str(&digits);
        out.extend(std::iter::repeat_n('0', (n - k) as usize));
    } else if 0 < n && n <= POSITIONAL_MAX {
        out.push_str(&digits[..n as usize]);
        out.push('.');
        out.push_str(&digits[n as usize..]);
    } else if POSITIONAL_MIN <= n && n <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat_n('0', (-n) as usize));
        out.push_str(&digits);
    } else {
        out.push_str(&digits[..1]);
        if k > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        let exponent = n - 1;
        out.push('e');
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(&format_int(exponent.abs().into()));
    }
    out
}

/// Split ryu output into significant digits and the exponent `n` such that
/// the value is `0.<digits> × 10^n`.
fn shortest_digits(formatted: &str) -> (String, i32) {
    let (mantissa, exponent) = match formatted.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (formatted, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mut n = int_part.len() as i32 + exponent;
    let all: String = int_part.chars().chain(frac_part.chars()).collect();
    let trimmed = all.trim_start_matches('0');
    n -= (all.len() - trimmed.len()) as i32;

    (trimmed.trim_end_matches('0').to_string(), n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_int() {
        assert_eq!(format_int(0), "0");
        assert_eq!(format_int(-42), "-42");
        assert_eq!(format_int(i64::MAX), "9223372036854775807");
    }

    #[test]
    fn test_integral_floats_drop_fraction() {
        assert_eq!(format_float(42.0), "42");
        assert_eq!(format_float(-7.0), "-7");
        assert_eq!(format_float(1e20), "100000000000000000000");
    }

    #[test]
    fn test_fractional_floats() {
        assert_eq!(format_float(4.5), "4.5");
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(1234.56), "1234.56");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_float(-0.0), "0");
        assert_eq!(format_float(f64::NAN), "NaN");
        assert_eq!(format_float(f64::INFINITY), "Infinity");
        assert_eq!(format_float(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_exponent_forms() {
        assert_eq!(format_float(1.5e300), "1.5e+300");
        assert_eq!(format_float(1e-7), "1e-7");
        assert_eq!(format_float(1e21), "1e+21");
        assert_eq!(format_float(-2.5e-8), "-2.5e-8");
    }

    #[test]
    fn test_large_integral_floats_use_shortest_digits() {
        assert_eq!(format_float(18446744073709551615.0), "18446744073709552000");
        assert_eq!(format_float(1.2345678901234568e20), "123456789012345680000");
        assert_eq!(format_float(9007199254740993.0), "9007199254740992");
    }

    #[test]
    fn test_small_values_stay_positional() {
        assert_eq!(format_float(1e-6), "0.000001");
        assert_eq!(format_float(1.234e-6), "0.000001234");
        assert_eq!(format_float(0.00015), "0.00015");
        assert_eq!(format_float(-0.5), "-0.5");
    }
}
