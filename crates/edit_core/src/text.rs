//! Character filters used by the edit engine.
//!
//! Everything here works on code points rather than bytes, since the engine
//! addresses its buffer by character offset.

use std::borrow::Cow;

use crate::selection::SelectionSpan;

/// Returns `true` for the characters accepted as a leading sign.
#[inline]
pub fn is_sign(ch: char) -> bool {
    ch == '+' || ch == '-'
}

/// Returns `true` for the characters accepted as a decimal separator.
#[inline]
pub fn is_decimal_separator(ch: char) -> bool {
    ch == ',' || ch == '.'
}

/// Strip everything that cannot appear in a number.
///
/// Keeps a single leading sign, the first decimal separator and all ASCII
/// digits, in their original order.
///
/// # Examples
///
/// ```
/// use edit_core::filter_numeric;
///
/// let filtered: String = filter_numeric(&"-1a2.3.4".chars().collect::<Vec<_>>())
///     .into_iter()
///     .collect();
/// assert_eq!(filtered, "-12.34");
/// ```
pub fn filter_numeric(text: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(text.len());

    if let Some(&first) = text.first()
        && is_sign(first)
    {
        out.push(first);
    }

    let mut separator_found = false;
    for &ch in text {
        if !separator_found && is_decimal_separator(ch) {
            out.push(ch);
            separator_found = true;
        }
        if ch.is_ascii_digit() {
            out.push(ch);
        }
    }
    out
}

/// Decide whether typing `ch` is allowed while numeric-only mode is on.
///
/// Digits are always allowed. A sign is only allowed when one side of the
/// selection touches offset 0 and the text does not already start with a
/// sign. A separator is only allowed when the text contains none yet.
pub fn numeric_accepts(text: &[char], selection: SelectionSpan, ch: char) -> bool {
    if ch.is_ascii_digit() {
        return true;
    }

    if is_sign(ch) {
        if selection.anchor != 0 && selection.caret != 0 {
            return false;
        }
        return !text.first().copied().is_some_and(is_sign);
    }

    if is_decimal_separator(ch) {
        return !text.iter().copied().any(is_decimal_separator);
    }

    false
}

/// Filter a string to remove newlines (CR and LF), for single-line inputs.
///
/// Returns a `Cow::Borrowed` if the string contains no newlines (fast path),
/// or a `Cow::Owned` with newlines removed.
///
/// # Examples
///
/// ```
/// use edit_core::filter_single_line;
///
/// assert_eq!(filter_single_line("hello"), "hello");
/// assert_eq!(filter_single_line("hello\nworld"), "helloworld");
/// assert_eq!(filter_single_line("a\r\nb"), "ab");
/// ```
pub fn filter_single_line(s: &str) -> Cow<'_, str> {
    if !s.contains('\n') && !s.contains('\r') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| *c != '\n' && *c != '\r').collect())
}
