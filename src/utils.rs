pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Read a positive count from a query value the way browsers send it.
///
/// Leading digits are used (`"12abc"` is 12). Missing, empty or non-numeric
/// values give `default`; anything below 1 is raised to 1.
pub fn positive_or(value: Option<&str>, default: usize) -> usize {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return default;
    };

    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];

    if digits.is_empty() {
        return default;
    }
    if negative {
        return 1;
    }
    digits.parse::<usize>().unwrap_or(usize::MAX).max(1)
}
