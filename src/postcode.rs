//! Postcode Normalizer
//!
//! Canonicalizes free-form postcodes into a fixed-width digit string so that
//! `"01310-100"`, `"01310100"` and `" 01310 100 "` share one cache key.

/// Width of every normalized postcode.
pub const POSTCODE_WIDTH: usize = 8;

/// Normalizes a raw postcode.
///
/// Every non-digit character is dropped, the remaining digits are left-padded
/// with `'0'` up to [`POSTCODE_WIDTH`], and anything past that width is cut.
/// Missing or digit-free input yields `"00000000"`.
pub fn format(raw: Option<&str>) -> String {
    let digits: String = raw
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .take(POSTCODE_WIDTH)
        .collect();

    format!("{:0>width$}", digits, width = POSTCODE_WIDTH)
}
