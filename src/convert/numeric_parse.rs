//! Whole-string numeric parsing.
//!
//! The entire trimmed string must be a numeric literal. Trailing residue
//! fails the parse instead of being ignored.

/// Whitespace and line terminators trimmed around numeric strings.
fn is_numeric_space(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Parse `src` as a finite number. Empty or blank strings are `0`.
pub fn parse_strict(src: &str, radix_literals: bool) -> Option<f64> {
    let s = src.trim_matches(is_numeric_space);
    if s.is_empty() {
        return Some(0.0);
    }

    if radix_literals {
        if let Some(radix) = radix_prefix(s) {
            return parse_radix(&s[2..], radix);
        }
    }

    if !is_decimal_literal(s) {
        return None;
    }
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn radix_prefix(s: &str) -> Option<u32> {
    let b = s.as_bytes();
    if b.len() < 2 || b[0] != b'0' {
        return None;
    }
    match b[1] {
        b'x' | b'X' => Some(16),
        b'o' | b'O' => Some(8),
        b'b' | b'B' => Some(2),
        _ => None,
    }
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    if let Ok(n) = u128::from_str_radix(digits, radix) {
        return Some(n as f64);
    }
    // too wide for u128
    let n = digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0_f64, |acc, d| acc * radix as f64 + d as f64);
    Some(n).filter(|n| n.is_finite())
}

/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
fn is_decimal_literal(s: &str) -> bool {
    let b = s.as_bytes();
    let mut i = 0;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }

    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < b.len() && b[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }
    if mantissa_digits == 0 {
        return false;
    }

    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        i += 1;
        if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == b.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_literals() {
        assert_eq!(parse_strict("42", true), Some(42.0));
        assert_eq!(parse_strict("-2.5E-3", true), Some(-0.0025));
        assert_eq!(parse_strict("+1e3", true), Some(1000.0));
        assert_eq!(parse_strict("1.", true), Some(1.0));
        assert_eq!(parse_strict(".5", true), Some(0.5));
        assert_eq!(parse_strict("007", true), Some(7.0));
    }

    #[test]
    fn test_rejects_residue() {
        assert_eq!(parse_strict("2a", true), None);
        assert_eq!(parse_strict("1.2a", true), None);
        assert_eq!(parse_strict("1 2", true), None);
        assert_eq!(parse_strict("1e", true), None);
        assert_eq!(parse_strict(".", true), None);
        assert_eq!(parse_strict("-", true), None);
        assert_eq!(parse_strict("1_000", true), None);
        assert_eq!(parse_strict("1,000", true), None);
        assert_eq!(parse_strict("$5", true), None);
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(parse_strict("2 ", true), Some(2.0));
        assert_eq!(parse_strict("\n\t 3.5 \r\n", true), Some(3.5));
        assert_eq!(parse_strict("\u{00A0}7\u{FEFF}", true), Some(7.0));
        assert_eq!(parse_strict("", true), Some(0.0));
        assert_eq!(parse_strict("   ", true), Some(0.0));
        // NEL is not numeric whitespace
        assert_eq!(parse_strict("\u{0085}1", true), None);
    }

    #[test]
    fn test_non_finite_spellings() {
        assert_eq!(parse_strict("Infinity", true), None);
        assert_eq!(parse_strict("-Infinity", true), None);
        assert_eq!(parse_strict("inf", true), None);
        assert_eq!(parse_strict("infinity", true), None);
        assert_eq!(parse_strict("NaN", true), None);
        assert_eq!(parse_strict("nan", true), None);
        assert_eq!(parse_strict("1e999", true), None);
    }

    #[test]
    fn test_radix_literals() {
        assert_eq!(parse_strict("0x1A", true), Some(26.0));
        assert_eq!(parse_strict("0XfF", true), Some(255.0));
        assert_eq!(parse_strict("0o17", true), Some(15.0));
        assert_eq!(parse_strict("0b101", true), Some(5.0));
        assert_eq!(parse_strict(" 0x10 ", true), Some(16.0));
        assert_eq!(parse_strict("-0x1A", true), None);
        assert_eq!(parse_strict("+0x1A", true), None);
        assert_eq!(parse_strict("0x", true), None);
        assert_eq!(parse_strict("0b102", true), None);
        assert_eq!(parse_strict("0x1g", true), None);
    }

    #[test]
    fn test_radix_literals_disabled() {
        assert_eq!(parse_strict("0x1A", false), None);
        assert_eq!(parse_strict("0b1", false), None);
        assert_eq!(parse_strict("0", false), Some(0.0));
    }

    #[test]
    fn test_wide_hex() {
        let wide = format!("0x{}", "f".repeat(40));
        assert_eq!(parse_strict(&wide, true), Some(16f64.powi(40) - 1.0));
    }
}
