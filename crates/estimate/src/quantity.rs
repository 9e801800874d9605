//! Quantity input sanitisation.

/// Reduce free-form quantity input to a non-negative integer.
///
/// Every character that is not an ASCII digit is dropped, then leading zeros;
/// nothing left means zero. Values beyond `u64::MAX` saturate. Never fails.
pub fn sanitize_quantity(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return 0;
    }
    significant.parse().unwrap_or(u64::MAX)
}
