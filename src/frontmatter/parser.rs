//! Line-oriented parser for the supported frontmatter subset

use super::value::{FrontmatterRecord, FrontmatterValue};

const DELIMITER: &str = "---";

/// Extract the raw frontmatter block from file content.
///
/// The content must open with `---` followed by a line break (`\n` or
/// `\r\n`). The block ends right before the first following line that
/// starts with `---`. Returns `None` when either delimiter is missing.
pub fn extract_block(content: &str) -> Option<&str> {
    let rest = content.strip_prefix(DELIMITER)?;
    let rest = rest.strip_prefix('\r').unwrap_or(rest);
    let rest = rest.strip_prefix('\n')?;

    let end = rest.find("\n---")?;
    let block = &rest[..end];
    Some(block.strip_suffix('\r').unwrap_or(block))
}

/// Parse file content into a frontmatter record.
///
/// Returns `None` if the content has no delimited frontmatter block.
pub fn parse_frontmatter(content: &str) -> Option<FrontmatterRecord> {
    let block = extract_block(content)?;
    let mut record = FrontmatterRecord::new();

    for line in block.split('\n') {
        if let Some((key, value)) = parse_line(line) {
            record.insert(key, value);
        }
    }

    Some(record)
}

/// Split one `key: value` line and coerce its value.
/// Lines without a colon or with an empty key yield nothing.
fn parse_line(line: &str) -> Option<(&str, FrontmatterValue)> {
    let (key, raw) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, coerce_value(raw.trim())))
}

fn coerce_value(raw: &str) -> FrontmatterValue {
    let value = strip_double_quotes(raw);

    if let Some(inner) = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
    {
        return FrontmatterValue::List(split_inline_array(inner));
    }

    match value {
        "true" => FrontmatterValue::Bool(true),
        "false" => FrontmatterValue::Bool(false),
        _ => FrontmatterValue::String(value.to_string()),
    }
}

/// Remove one pair of double quotes wrapping the whole value.
/// A value with another double quote inside (`"a" b"`) is kept as is.
fn strip_double_quotes(value: &str) -> &str {
    match value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
    {
        Some(inner) if !inner.contains('"') => inner,
        _ => value,
    }
}

/// Comma split with no special case: `[]` is a single empty item.
fn split_inline_array(inner: &str) -> Vec<String> {
    inner
        .split(',')
        .map(|item| strip_item_quotes(item.trim()).to_string())
        .collect()
}

/// Drop at most one leading and one trailing quote, single or double.
fn strip_item_quotes(item: &str) -> &str {
    let item = item
        .strip_prefix(['"', '\''])
        .unwrap_or(item);
    item.strip_suffix(['"', '\'']).unwrap_or(item)
}
