//! Brace-depth scope tracking as a fold over source lines.

use serde::Serialize;
use tracing::trace;

use super::lexer::{Brace, Lexer, braces};
use super::patterns::{Declaration, match_declaration};

/// The class and method in effect on one source line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ScopeEntry {
    pub class_name: Option<String>,
    pub method_name: Option<String>,
}

impl ScopeEntry {
    pub fn new(class_name: Option<&str>, method_name: Option<&str>) -> Self {
        Self {
            class_name: class_name.map(str::to_string),
            method_name: method_name.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Class,
    Method,
}

/// An open scope and the names to restore when it closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeFrame {
    pub kind: ScopeKind,
    pub name: String,
    /// Brace depth before the declaration line's braces.
    pub entry_depth: usize,
    pub previous_class_name: Option<String>,
    pub previous_method_name: Option<String>,
}

/// State threaded through [`ScopeTracker::fold`].
#[derive(Debug, Clone, Default)]
pub struct ScopeState {
    pub lexer: Lexer,
    pub depth: usize,
    pub stack: Vec<ScopeFrame>,
    pub current: ScopeEntry,
}

impl ScopeState {
    /// Consume one line; returns the next state and the line's entry.
    pub fn advance(mut self, line: &str) -> (Self, ScopeEntry) {
        let masked = self.lexer.mask(line);

        let declared = match_declaration(&masked, self.current.class_name.is_some())
            .map(|declaration| (self.open(declaration), self.stack.len()));

        for brace in braces(&masked) {
            match brace {
                Brace::Open => self.depth += 1,
                Brace::Close => {
                    self.depth = self.depth.saturating_sub(1);
                    self.close_to_depth();
                }
            }
        }

        let entry = match declared {
            Some((entry, open_frames)) => {
                // Bodiless member (abstract, interface, expression-bodied)
                if masked.trim_end().ends_with(';') && self.stack.len() == open_frames {
                    self.pop();
                }
                entry
            }
            None => self.current.clone(),
        };

        (self, entry)
    }

    fn open(&mut self, declaration: Declaration) -> ScopeEntry {
        let previous = self.current.clone();
        let (kind, name) = match declaration {
            Declaration::Class(name) => {
                self.current = ScopeEntry {
                    class_name: Some(name.clone()),
                    method_name: None,
                };
                (ScopeKind::Class, name)
            }
            Declaration::Method(name) => {
                self.current.method_name = Some(name.clone());
                (ScopeKind::Method, name)
            }
        };

        trace!(?kind, %name, depth = self.depth, "scope opened");
        self.stack.push(ScopeFrame {
            kind,
            name,
            entry_depth: self.depth,
            previous_class_name: previous.class_name,
            previous_method_name: previous.method_name,
        });
        self.current.clone()
    }

    /// Pop every frame whose entry depth is at or below the current depth.
    fn close_to_depth(&mut self) {
        while self
            .stack
            .last()
            .is_some_and(|frame| frame.entry_depth >= self.depth)
        {
            self.pop();
        }
    }

    fn pop(&mut self) {
        if let Some(frame) = self.stack.pop() {
            trace!(kind = ?frame.kind, name = %frame.name, "scope closed");
            self.current = ScopeEntry {
                class_name: frame.previous_class_name,
                method_name: frame.previous_method_name,
            };
        }
    }
}

/// Forward pass over a file's lines.
pub struct ScopeTracker;

impl ScopeTracker {
    /// Fold `lines` into the final state and one [`ScopeEntry`] per line.
    pub fn fold<S: AsRef<str>>(lines: &[S]) -> (ScopeState, Vec<ScopeEntry>) {
        lines.iter().fold(
            (ScopeState::default(), Vec::with_capacity(lines.len())),
            |(state, mut entries), line| {
                let (state, entry) = state.advance(line.as_ref());
                entries.push(entry);
                (state, entries)
            },
        )
    }
}

/// Attribute every line of a file to its enclosing class and method.
///
/// The result is parallel to `source_lines`. Scoping is a brace-depth
/// heuristic over code with strings and comments masked out; it does not
/// parse the language grammar. A declaration line belongs to the scope it
/// declares and a closing brace line to the enclosing scope. Brace-less
/// bodies and signatures split across lines are not recognised.
///
/// # Example
///
/// ```
/// use diffcov::scope::{extract_scopes, ScopeEntry};
///
/// let lines = ["class Foo {", "  void Bar() {", "    Run();", "  }", "}"];
/// let scopes = extract_scopes(&lines);
/// assert_eq!(scopes[2], ScopeEntry::new(Some("Foo"), Some("Bar")));
/// assert_eq!(scopes[3], ScopeEntry::new(Some("Foo"), None));
/// ```
pub fn extract_scopes<S: AsRef<str>>(source_lines: &[S]) -> Vec<ScopeEntry> {
    ScopeTracker::fold(source_lines).1
}
