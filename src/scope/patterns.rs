//! Declaration patterns matched against masked source lines.

use regex::Regex;
use std::sync::LazyLock;

/// Modifier keywords allowed before a type or member declaration.
const MODIFIERS: &str = "public|private|protected|internal|static|abstract|sealed|partial|\
virtual|override|async|extern|unsafe|readonly|new|const|volatile|file|required|ref";

/// Optional leading attributes such as `[Fact]` or `[Obsolete("x")]`.
const ATTRIBUTES: &str = r"(?:\[[^\]]*\]\s*)*";

static CLASS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^\s*{ATTRIBUTES}(?:(?:{MODIFIERS})\s+)*(?:class|struct|interface|record(?:\s+(?:class|struct))?)\s+(?P<name>[A-Za-z_]\w*)"
    );
    Regex::new(&pattern).expect("Invalid class declaration regex")
});

static METHOD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^\s*{ATTRIBUTES}(?:(?:{MODIFIERS})\s+)*(?P<ret>[A-Za-z_][\w\.]*(?:\s*<[^()=;]*>)?(?:\s*\[[,\s]*\])*\??)\s+(?P<name>[A-Za-z_]\w*)\s*(?:<[^()=;]*>)?\s*\("
    );
    Regex::new(&pattern).expect("Invalid method declaration regex")
});

/// Statement keywords that look like `<type> <name>(` to the method pattern.
const KEYWORDS: &[&str] = &[
    "if", "else", "for", "foreach", "while", "do", "switch", "case", "default", "try", "catch",
    "finally", "using", "lock", "fixed", "return", "new", "await", "throw", "yield", "goto",
    "typeof", "nameof", "sizeof", "checked", "unchecked", "when", "in", "is", "as", "out", "var",
    "delegate", "operator", "stackalloc",
];

/// Property and event accessor names.
const ACCESSORS: &[&str] = &["get", "set", "init", "add", "remove"];

/// A declaration that opens a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Class(String),
    Method(String),
}

/// Match a class-like declaration (`class`, `struct`, `record`, `interface`).
pub fn match_class(masked: &str) -> Option<String> {
    CLASS_REGEX
        .captures(masked)
        .map(|caps| caps["name"].to_string())
}

/// Match a method declaration: modifiers, return type, name, then `(`.
pub fn match_method(masked: &str) -> Option<String> {
    let caps = METHOD_REGEX.captures(masked)?;
    let ret = &caps["ret"];
    let name = &caps["name"];

    if KEYWORDS.contains(&ret) || KEYWORDS.contains(&name) || ACCESSORS.contains(&name) {
        return None;
    }

    // Expression-bodied member without a parameter list
    if let Some(arrow) = masked.find("=>")
        && masked.find('(').is_none_or(|paren| arrow < paren)
    {
        return None;
    }

    Some(name.to_string())
}

/// Classify a line; a method is only recognised while `in_class` is true.
pub fn match_declaration(masked: &str, in_class: bool) -> Option<Declaration> {
    if let Some(name) = match_class(masked) {
        return Some(Declaration::Class(name));
    }
    if in_class {
        return match_method(masked).map(Declaration::Method);
    }
    None
}
