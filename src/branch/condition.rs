//! Condition text extraction by balanced-parenthesis scan.

use crate::error::{DiffcovError, Result};

/// Extract the text between the parenthesis at byte `open` and its match.
///
/// The scan runs over `masked` (so parentheses inside strings and comments
/// are ignored) and the result is sliced from `raw`, keeping string
/// literals in the condition. Both lines must be byte aligned. Returns the
/// trimmed inner text and the byte offset of the closing parenthesis.
///
/// # Errors
///
/// Returns `UnbalancedParenthesis` when the parenthesis is not closed on
/// this line.
pub fn extract_condition(masked: &str, raw: &str, open: usize) -> Result<(String, usize)> {
    let unbalanced = || DiffcovError::UnbalancedParenthesis(raw.trim().to_string());

    if masked.as_bytes().get(open) != Some(&b'(') || masked.len() != raw.len() {
        return Err(unbalanced());
    }

    let mut depth = 0usize;
    for (offset, byte) in masked.as_bytes()[open..].iter().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    let close = open + offset;
                    let inner = raw.get(open + 1..close).ok_or_else(unbalanced)?;
                    return Ok((inner.trim().to_string(), close));
                }
            }
            _ => {}
        }
    }

    Err(unbalanced())
}

/// Text of a `case` label: from `start` through the first `:` that is not
/// part of `::`. Without a colon the rest of the line is used.
pub fn extract_label(masked: &str, raw: &str, start: usize) -> String {
    let bytes = masked.as_bytes();
    let mut index = start;
    while index < bytes.len() {
        if bytes[index] == b':' {
            if bytes.get(index + 1) == Some(&b':') {
                index += 2;
                continue;
            }
            return raw.get(start..=index).unwrap_or(raw).trim().to_string();
        }
        index += 1;
    }
    raw.get(start..).unwrap_or(raw).trim().to_string()
}
