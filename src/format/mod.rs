//! Number formatting for p-values.
//!
//! Output follows C's `%g` conversion so that results print the same way as
//! other `printf`-based statistics tools.

/// Significant digits used by `%g` without an explicit precision.
const G_PRECISION: usize = 6;

/// Format `x` like C's `printf("%g", x)`.
///
/// Six significant digits; scientific notation when the decimal exponent is
/// below -4 or at least 6; trailing zeros and a bare decimal point removed;
/// exponents carry a sign and at least two digits.
pub fn format_g(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Round to the target precision first; the exponent of the rounded
    // value decides the notation (9.999995 prints as 10).
    let sci = format!("{:.*e}", G_PRECISION - 1, x);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= G_PRECISION as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exp.unsigned_abs()
        )
    } else {
        let decimals = (G_PRECISION as i32 - 1 - exp) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, x)).to_string()
    }
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
