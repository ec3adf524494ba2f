//! Color value conversion between the two theme formats.
//!
//! Rider stores colors as bare hex digits and drops leading zeros
//! (`ff` is `0000ff`). dnSpy expects `#`-prefixed values.

/// Converts a raw Rider color string into dnSpy notation.
///
/// The value is left-padded with `0` to at least six characters and
/// prefixed with `#`. Content is not validated, and longer values (for
/// example ARGB) are kept whole.
///
/// # Example
///
/// ```rust
/// use dnspy_themegen::convert_color;
///
/// assert_eq!(convert_color("fff"), "#000fff");
/// assert_eq!(convert_color("a9b7c6"), "#a9b7c6");
/// ```
pub fn convert_color(raw: &str) -> String {
    format!("#{:0>6}", raw)
}
