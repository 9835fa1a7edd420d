//! Selection and cleanup of documentation comments.

use plcdoc_syntax::Comment;

/// Picks the documentation comment out of the comments bound to a token and
/// cleans it up.
///
/// A single comment is used as is. With several, the last block comment
/// wins; without a block comment the last line comment (usually the
/// trailing one) is used. Returns `None` when nothing usable is left.
#[must_use]
pub fn doc_comment(comments: &[Comment]) -> Option<String> {
    let chosen = comments
        .iter()
        .rev()
        .find(|comment| comment.is_block())
        .or_else(|| comments.last())?;
    clean(&chosen.text)
}

/// Strips comment delimiters, normalizes line endings and trims.
#[must_use]
pub fn clean(text: &str) -> Option<String> {
    let text = text.trim();
    let text = text
        .strip_prefix("(*")
        .and_then(|rest| rest.strip_suffix("*)"))
        .or_else(|| text.strip_prefix("/*").and_then(|rest| rest.strip_suffix("*/")))
        .unwrap_or(text);
    let text = text.replace("\r\n", "\n");
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
