//! # Prompt Parsing
//!
//! Classification of raw interactive answers.

/// Interpretation of an answer to a bounded numeric prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericAnswer {
    /// A number inside the allowed range
    Value(u32),
    /// Nothing was typed; the prompt's default applies
    Empty,
    /// The answer is not an integer
    NotANumber,
    /// An integer outside the allowed range
    OutOfRange,
}

/// Classifies a trimmed answer against the inclusive range `min..=max`.
///
/// # Examples
///
/// ```
/// use questsmith::{parse_numeric_answer, NumericAnswer};
///
/// assert_eq!(parse_numeric_answer("2", 1, 3), NumericAnswer::Value(2));
/// assert_eq!(parse_numeric_answer("", 1, 3), NumericAnswer::Empty);
/// assert_eq!(parse_numeric_answer("four", 1, 3), NumericAnswer::NotANumber);
/// assert_eq!(parse_numeric_answer("-1", 1, 3), NumericAnswer::OutOfRange);
/// ```
pub fn parse_numeric_answer(answer: &str, min: u32, max: u32) -> NumericAnswer {
    if answer.is_empty() {
        return NumericAnswer::Empty;
    }

    match answer.parse::<i64>() {
        Ok(n) if n >= i64::from(min) && n <= i64::from(max) => NumericAnswer::Value(n as u32),
        Ok(_) => NumericAnswer::OutOfRange,
        Err(_) => NumericAnswer::NotANumber,
    }
}

/// Whether a confirmation answer means yes.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
