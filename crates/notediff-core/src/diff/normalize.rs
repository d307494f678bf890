//! Line-ending normalization and line splitting.

use std::borrow::Cow;

/// Convert `\r\n` line endings to `\n`.
///
/// Borrows the input when it contains no `\r\n`. A lone `\r` is content,
/// not a terminator, and is left untouched.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Split normalized text into lines on `\n`.
///
/// The split is lossless: joining the result with `\n` gives back the
/// input. An empty text is a single empty line and a trailing `\n` yields
/// a trailing empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Number of lines `split_lines` would produce, without allocating.
pub fn line_count(text: &str) -> usize {
    text.bytes().filter(|b| *b == b'\n').count() + 1
}
