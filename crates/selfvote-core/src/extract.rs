use regex::Regex;
use std::sync::OnceLock;

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?").expect("number regex is valid"))
}

fn digit_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d$").expect("digit regex is valid"))
}

fn is_decimal_digit(c: char) -> bool {
    digit_pattern().is_match(c.encode_utf8(&mut [0; 4]))
}

/// Value of any Unicode decimal digit (`\p{Nd}`), not only ASCII.
///
/// Nd digits come in contiguous runs of ten starting at zero, so the value is
/// the distance from the start of the run, modulo ten.
fn decimal_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut offset = 0;
    let mut code = c as u32;
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        offset += 1;
        code -= 1;
    }
    Some(offset % 10)
}

fn to_ascii_number(literal: &str) -> Option<String> {
    literal
        .chars()
        .map(|c| match c {
            '.' => Some('.'),
            _ => decimal_value(c).and_then(|d| char::from_digit(d, 10)),
        })
        .collect()
}

/// Returns the last integer or decimal literal in `text`.
///
/// Completions usually state the final answer last, so the trailing number
/// stands in for "the answer". Intermediate numbers can produce false
/// positives when the model trails off mid-reasoning. Literals too large for
/// `f64` count as no answer.
pub fn extract_number(text: &str) -> Option<f64> {
    number_pattern()
        .find_iter(text)
        .last()
        .and_then(|m| to_ascii_number(m.as_str()))
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_number() {
        assert_eq!(extract_number("The area is 108 square cm"), Some(108.0));
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(extract_number("I cannot solve this problem."), None);
        assert_eq!(extract_number(""), None);
    }

    #[test]
    fn test_last_number_wins() {
        assert_eq!(extract_number("12 people and 3 groups, answer: 4"), Some(4.0));
    }

    #[test]
    fn test_decimal_and_separators() {
        assert_eq!(extract_number("Total paid: $63.60"), Some(63.6));
        // Thousands separators split the literal; only the trailing group is seen.
        assert_eq!(extract_number("Revenue was $65,000"), Some(0.0));
        // A trailing period is punctuation, not a decimal point.
        assert_eq!(extract_number("So the answer is 21."), Some(21.0));
    }

    #[test]
    fn test_signs_are_ignored() {
        assert_eq!(extract_number("Change: -25%"), Some(25.0));
    }

    #[test]
    fn test_non_ascii_digits() {
        assert_eq!(extract_number("答え：１４"), Some(14.0));
        // A trailing Arabic-Indic one is still the last number.
        assert_eq!(extract_number("So the answer is 14 motorcycles \u{0661}"), Some(1.0));
        assert_eq!(extract_number("\u{0663}.\u{0665} hours"), Some(3.5));
        assert_eq!(extract_number("\u{0969}\u{0966} percent"), Some(30.0));
        // Mathematical bold digits sit in several back-to-back runs of ten.
        assert_eq!(extract_number("\u{1D7D9}\u{1D7E2}"), Some(10.0));
    }

    #[test]
    fn test_overflowing_literal_is_absent() {
        let huge = "9".repeat(400);
        assert_eq!(extract_number(&huge), None);
        assert_eq!(extract_number(&format!("first 12, then {}", huge)), None);
    }

    #[test]
    fn test_decimal_value() {
        assert_eq!(decimal_value('7'), Some(7));
        assert_eq!(decimal_value('\u{FF10}'), Some(0));
        assert_eq!(decimal_value('\u{FF19}'), Some(9));
        assert_eq!(decimal_value('x'), None);
    }
}
