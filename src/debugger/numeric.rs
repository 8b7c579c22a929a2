//! Numeric-literal parsing for debugger command arguments: decimal,
//! `0x`/`0X` hex, `$` hex, and `0b`/`0B` binary.

pub fn parse(token: &str) -> Option<u32> {
    let token = token.trim();
    if let Some(rest) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        return u32::from_str_radix(rest, 16).ok();
    }
    if let Some(rest) = token.strip_prefix('$') {
        return u32::from_str_radix(rest, 16).ok();
    }
    if let Some(rest) = token.strip_prefix("0b").or_else(|| token.strip_prefix("0B")) {
        return u32::from_str_radix(rest, 2).ok();
    }
    token.parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal() {
        assert_eq!(parse("1234"), Some(1234));
    }

    #[test]
    fn parses_hex_with_0x_prefix() {
        assert_eq!(parse("0xFF"), Some(0xFF));
        assert_eq!(parse("0Xff"), Some(0xFF));
    }

    #[test]
    fn parses_hex_with_dollar_prefix() {
        assert_eq!(parse("$8000"), Some(0x8000));
    }

    #[test]
    fn parses_binary_with_0b_prefix() {
        assert_eq!(parse("0b1010"), Some(0b1010));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse("not-a-number"), None);
        assert_eq!(parse("0xZZ"), None);
        assert_eq!(parse(""), None);
    }
}
