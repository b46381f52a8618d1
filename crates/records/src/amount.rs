/// Parses a user-supplied amount such as `12`, ` -3.5 `, `2.5E-1` or `1e30`.
///
/// Returns `None` for blank text, for anything that is not a number, and for
/// numbers that are not finite (`nan`, `inf`, or a literal too large for `f64`).
pub fn parse_amount(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}
