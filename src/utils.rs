use std::borrow::Cow;

/// Replaces each line break (`\r\n`, `\r` or `\n`) with a single space.
pub fn normalize_line_breaks(statement: &str) -> Cow<'_, str> {
    if !statement.contains(['\r', '\n']) {
        return Cow::Borrowed(statement);
    }

    let mut normalized = String::with_capacity(statement.len());
    let mut chars = statement.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                normalized.push(' ');
            }
            '\n' => normalized.push(' '),
            _ => normalized.push(c),
        }
    }

    Cow::Owned(normalized)
}

pub fn parse_hex_address(literal: &str) -> Option<u64> {
    let digits = literal
        .strip_prefix("0x")
        .or_else(|| literal.strip_prefix("0X"))
        .unwrap_or(literal);
    u64::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_line_breaks() {
        assert_eq!(
            normalize_line_breaks("ADDR(0x00ABCD)\nint run(void)"),
            "ADDR(0x00ABCD) int run(void)"
        );
        assert_eq!(normalize_line_breaks("a\r\nb\rc\n\nd"), "a b c  d");
        assert!(matches!(normalize_line_breaks("single line"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_parse_hex_address() {
        assert_eq!(parse_hex_address("0x1A2B3C"), Some(0x1A2B3C));
        assert_eq!(parse_hex_address("0Xffffffff"), Some(0xFFFF_FFFF));
        assert_eq!(parse_hex_address("00abcd"), Some(0xABCD));
        assert_eq!(parse_hex_address("0xzz"), None);
        assert_eq!(parse_hex_address("0x"), None);
    }
}
