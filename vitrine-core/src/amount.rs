/// Render an amount with six significant digits, switching to exponent
/// notation outside `1e-4 ..< 1e6`, with trailing zeros dropped.
///
/// `0.1 + 0.2` renders as `0.3`, `300.50` as `300.5` and `1234567.0` as
/// `1.23457e+06`.
pub fn format_amount(amount: f64) -> String {
    const SIGNIFICANT: i32 = 6;

    if !amount.is_finite() {
        return amount.to_string();
    }

    // Round to the significant digits first; the exponent can move (999999.5 -> 1e6).
    let scientific = format!("{:.*e}", (SIGNIFICANT - 1) as usize, amount);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= SIGNIFICANT {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (SIGNIFICANT - 1 - exponent) as usize;
        trim_zeros(&format!("{:.*}", decimals, amount)).to_string()
    }
}

fn trim_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_and_fractional_amounts() {
        assert_eq!(format_amount(50.0), "50");
        assert_eq!(format_amount(130.0), "130");
        assert_eq!(format_amount(150.75), "150.75");
        assert_eq!(format_amount(300.50), "300.5");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(-45.5), "-45.5");
    }

    #[test]
    fn test_float_noise_is_rounded_away() {
        assert_eq!(format_amount(0.1 + 0.2), "0.3");
        assert_eq!(format_amount(2.0 / 3.0), "0.666667");
    }

    #[test]
    fn test_exponent_notation() {
        assert_eq!(format_amount(100000.0), "100000");
        assert_eq!(format_amount(1234567.0), "1.23457e+06");
        assert_eq!(format_amount(999999.5), "1e+06");
        assert_eq!(format_amount(0.0001), "0.0001");
        assert_eq!(format_amount(0.00001234), "1.234e-05");
    }
}
