//! Price parsing and amount formatting.
//!
//! Catalog prices are carried as decimal text and parsed on demand. Parsing is
//! lenient about surrounding whitespace only; anything else that is not a
//! decimal number parses to `NaN`, which then propagates through arithmetic.

/// Parse decimal price text into a number, `NaN` when malformed.
///
/// Only digits, `.`, a sign and an exponent are accepted, so the word forms
/// `f64` would otherwise take (`inf`, `nan`) are malformed too.
pub fn parse_price(text: &str) -> f64 {
    let text = text.trim();
    let decimal = text.bytes().any(|b| b.is_ascii_digit())
        && text
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e' | b'E'));
    if !decimal {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Price including 10% VAT, rounded to the nearest whole unit.
pub fn vat_inclusive(price: f64) -> f64 {
    (price + price / 10.0).round()
}

/// Insert `,` thousands separators into the leading integer digits of `text`.
///
/// Surrounding whitespace is dropped and a leading `-` or `+` is kept;
/// everything after the first non-digit (fraction, unit suffix, `NaN`) is
/// copied unchanged.
pub fn group_thousands(text: &str) -> String {
    let text = text.trim();
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => ("-", &text[1..]),
        Some(b'+') => ("+", &text[1..]),
        _ => ("", text),
    };
    let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let (int_part, tail) = rest.split_at(int_len);

    let mut out = String::with_capacity(text.len() + int_len / 3);
    out.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push_str(tail);
    out
}

/// Render an amount for display: shortest decimal form with separators.
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // -0.0 would otherwise print as "-0".
    let value = if value == 0.0 { 0.0 } else { value };
    group_thousands(&value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_accepts_plain_decimals() {
        assert_eq!(parse_price("1000"), 1000.0);
        assert_eq!(parse_price(" 12.5 "), 12.5);
        assert!(parse_price("12,000").is_nan());
        assert!(parse_price("").is_nan());
        assert!(parse_price("abc").is_nan());
        assert_eq!(parse_price("+1000"), 1000.0);
        assert_eq!(parse_price("1e3"), 1000.0);
    }

    #[test]
    fn parse_price_rejects_word_forms() {
        for text in ["inf", "-inf", "infinity", "Infinity", "nan", "NaN", "e5", "."] {
            assert!(parse_price(text).is_nan(), "{text}");
        }
    }

    #[test]
    fn group_thousands_only_touches_integer_digits() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(group_thousands("-1234.5678"), "-1,234.5678");
        assert_eq!(group_thousands("NaN"), "NaN");
    }

    #[test]
    fn group_thousands_trims_and_keeps_plus_sign() {
        assert_eq!(group_thousands(" 1000"), "1,000");
        assert_eq!(group_thousands("1000 \n"), "1,000");
        assert_eq!(group_thousands("+1000"), "+1,000");
        assert_eq!(group_thousands("  -2500000.5 "), "-2,500,000.5");
    }

    #[test]
    fn format_amount_handles_non_finite_values() {
        assert_eq!(format_amount(4000.0), "4,000");
        assert_eq!(format_amount(2.5), "2.5");
        assert_eq!(format_amount(-0.0), "0");
        assert_eq!(format_amount(f64::NAN), "NaN");
        assert_eq!(format_amount(f64::INFINITY), "Infinity");
    }

    #[test]
    fn vat_inclusive_rounds_to_whole_units() {
        assert_eq!(vat_inclusive(1000.0), 1100.0);
        assert_eq!(vat_inclusive(15.0), 17.0);
        assert!(vat_inclusive(f64::NAN).is_nan());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: removing the separators gives back the original digits.
            #[test]
            fn grouping_is_reversible(n in 0u64..u64::MAX) {
                let text = n.to_string();
                let grouped = group_thousands(&text);
                prop_assert_eq!(grouped.replace(',', ""), text);
                for chunk in grouped.split(',').skip(1) {
                    prop_assert_eq!(chunk.len(), 3);
                }
            }
        }
    }
}
