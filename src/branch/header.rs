//! Branch header detection on masked source lines.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::debug;

use super::condition::{extract_condition, extract_label};

/// Alternatives are tried left to right at each position, so `else if (`
/// wins over `else` and `if (`.
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:(?P<elseif>else\s+if\s*\()|(?P<if>if\s*\()|(?P<else>else)\b|(?P<switch>switch\s*\()|(?P<case>case)\b|(?P<default>default\s*:))")
        .expect("Invalid branch header regex")
});

/// The construct a branch header opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchKind {
    If,
    ElseIf,
    Else,
    Switch,
    Case,
    Default,
}

impl BranchKind {
    /// Switch labels have no block of their own.
    pub fn is_label(self) -> bool {
        matches!(self, BranchKind::Case | BranchKind::Default)
    }

    /// Condition text used when the condition cannot be extracted.
    pub fn placeholder(self) -> &'static str {
        match self {
            BranchKind::If => "if (...)",
            BranchKind::ElseIf => "else if (...)",
            BranchKind::Else => "else",
            BranchKind::Switch => "switch (...)",
            BranchKind::Case => "case ...:",
            BranchKind::Default => "default:",
        }
    }
}

/// A recognised header with its normalised condition text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchHeader {
    IfHeader { condition: String },
    ElseIfHeader { condition: String },
    ElseHeader,
    SwitchHeader { condition: String },
    CaseLabel { label: String },
    DefaultLabel,
}

impl BranchHeader {
    pub fn kind(&self) -> BranchKind {
        match self {
            BranchHeader::IfHeader { .. } => BranchKind::If,
            BranchHeader::ElseIfHeader { .. } => BranchKind::ElseIf,
            BranchHeader::ElseHeader => BranchKind::Else,
            BranchHeader::SwitchHeader { .. } => BranchKind::Switch,
            BranchHeader::CaseLabel { .. } => BranchKind::Case,
            BranchHeader::DefaultLabel => BranchKind::Default,
        }
    }

    /// Display form, e.g. `if (x > 0)`, `case 1:` or `default:`.
    pub fn condition(&self) -> String {
        match self {
            BranchHeader::IfHeader { condition }
            | BranchHeader::ElseIfHeader { condition }
            | BranchHeader::SwitchHeader { condition } => condition.clone(),
            BranchHeader::CaseLabel { label } => label.clone(),
            BranchHeader::ElseHeader | BranchHeader::DefaultLabel => {
                self.kind().placeholder().to_string()
            }
        }
    }
}

/// A header found on a masked line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    /// Byte column where the keyword starts.
    pub column: usize,
    /// Byte offset just past the keyword and its condition, where a body
    /// on the same line would begin. `None` when the condition does not
    /// close on this line.
    pub body_start: Option<usize>,
    pub header: BranchHeader,
}

/// Find every branch header on a line, left to right.
///
/// `masked` is the line with strings and comments blanked; `raw` is the
/// original line and supplies the condition text.
pub fn scan_headers(masked: &str, raw: &str) -> Vec<HeaderMatch> {
    let mut headers = Vec::new();

    for caps in HEADER_REGEX.captures_iter(masked) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let column = whole.start();
        let open = whole.end().saturating_sub(1);

        let (header, body_start) = if caps.name("elseif").is_some() {
            let (condition, end) = parenthesized("else if", BranchKind::ElseIf, masked, raw, open);
            (BranchHeader::ElseIfHeader { condition }, end)
        } else if caps.name("if").is_some() {
            let (condition, end) = parenthesized("if", BranchKind::If, masked, raw, open);
            (BranchHeader::IfHeader { condition }, end)
        } else if caps.name("else").is_some() {
            (BranchHeader::ElseHeader, Some(whole.end()))
        } else if caps.name("switch").is_some() {
            let (condition, end) = parenthesized("switch", BranchKind::Switch, masked, raw, open);
            (BranchHeader::SwitchHeader { condition }, end)
        } else if caps.name("case").is_some() {
            let label = extract_label(masked, raw, column);
            (BranchHeader::CaseLabel { label }, Some(whole.end()))
        } else {
            (BranchHeader::DefaultLabel, Some(whole.end()))
        };

        headers.push(HeaderMatch {
            column,
            body_start,
            header,
        });
    }

    headers
}

/// Whether a block header's body is a single statement on its own line,
/// e.g. `if (a < 0) return -1;`: a `;` follows the header before any `{`.
pub fn has_inline_statement(masked: &str, header: &HeaderMatch) -> bool {
    if header.header.kind().is_label() {
        return false;
    }
    let Some(rest) = header.body_start.and_then(|start| masked.get(start..)) else {
        return false;
    };
    rest.chars()
        .find(|&c| c == '{' || c == ';')
        .is_some_and(|c| c == ';')
}

fn parenthesized(
    keyword: &str,
    kind: BranchKind,
    masked: &str,
    raw: &str,
    open: usize,
) -> (String, Option<usize>) {
    match extract_condition(masked, raw, open) {
        Ok((inner, close)) => (format!("{} ({})", keyword, inner), Some(close + 1)),
        Err(err) => {
            debug!("{}; using placeholder", err);
            (kind.placeholder().to_string(), None)
        }
    }
}
