// Line format: key:value, '#' starts a comment, first ':' splits.
// Anything that doesn't yield a non-empty key and value is skipped silently.

const DELIMITER: char = ':';
const COMMENT: char = '#';

/// Parses one raw line into a `(key, value)` pair.
///
/// Returns `None` for blank lines, comment-only lines, lines without a
/// delimiter, and lines whose key or value is empty once trimmed.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let mut line = line.trim();

    if let Some(comment_pos) = line.find(COMMENT) {
        line = &line[..comment_pos];
        if line.is_empty() {
            return None;
        }
    }

    let delim_pos = line.find(DELIMITER)?;
    if delim_pos == 0 {
        return None;
    }

    let key = line[..delim_pos].trim();
    let value = line[delim_pos + 1..].trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}
