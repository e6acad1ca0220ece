//! Skill bar fill levels

/// Parse a `data-level` attribute the lenient way: optional sign, then the
/// leading run of digits. `"75%"` is 75, `"abc"` is `None`.
pub fn parse_level(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Saturate absurdly long digit runs; only the clamped value matters.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Width for a bar's fill, clamped to 0..=100 percent.
/// A missing or empty attribute counts as `0`; an unparsable one yields `None`.
pub fn fill_width(level: Option<&str>) -> Option<String> {
    let raw = match level {
        Some(level) if !level.is_empty() => level,
        _ => "0",
    };
    let level = parse_level(raw)?;
    Some(format!("{}%", level.clamp(0, 100)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("75", Some(75))]
    #[case("  42", Some(42))]
    #[case("90%", Some(90))]
    #[case("-5", Some(-5))]
    #[case("+7", Some(7))]
    #[case("3.9", Some(3))]
    #[case("abc", None)]
    #[case("", None)]
    #[case("-", None)]
    fn test_parse_level(#[case] raw: &str, #[case] expected: Option<i64>) {
        assert_eq!(parse_level(raw), expected);
    }

    #[test]
    fn test_fill_width_clamps() {
        assert_eq!(fill_width(Some("80")).as_deref(), Some("80%"));
        assert_eq!(fill_width(Some("140")).as_deref(), Some("100%"));
        assert_eq!(fill_width(Some("-20")).as_deref(), Some("0%"));
        assert_eq!(fill_width(None).as_deref(), Some("0%"));
        assert_eq!(fill_width(Some("")).as_deref(), Some("0%"));
        assert_eq!(fill_width(Some("lots")), None);
        assert_eq!(
            fill_width(Some("99999999999999999999999")).as_deref(),
            Some("100%")
        );
    }
}
