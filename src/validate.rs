//! Input Validation
//!
//! Pure checks over raw (already trimmed) user input, plus typed parsers
//! built on top of them. Nothing here panics; failure is reported through
//! `bool` or `Option`.

/// True iff `s` is non-empty and made only of ASCII decimal digits.
///
/// No sign and no surrounding whitespace is accepted.
pub fn is_valid_non_negative_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// True iff `s` parses as a floating-point literal.
///
/// Accepts an optional sign, a decimal point, an exponent and the
/// `inf`/`nan` spellings.
pub fn is_valid_float(s: &str) -> bool {
    s.parse::<f64>().is_ok()
}

/// Parse a quantity: digits only, and it must fit in a `u64`.
pub fn parse_quantity(s: &str) -> Option<u64> {
    if !is_valid_non_negative_integer(s) {
        return None;
    }
    s.parse().ok()
}

/// Parse a unit price: a float literal that is finite and not negative.
pub fn parse_price(s: &str) -> Option<f64> {
    if !is_valid_float(s) {
        return None;
    }
    let price: f64 = s.parse().ok()?;
    if price.is_finite() && price >= 0.0 {
        // -0.0 is stored as 0.0
        Some(price.abs())
    } else {
        None
    }
}
