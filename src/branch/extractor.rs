//! Branch extraction restricted to changed methods.

use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use tracing::trace;

use crate::scope::{Brace, Lexer, ScopeEntry, braces};

use super::header::{BranchHeader, BranchKind, has_inline_statement, scan_headers};

/// A branch whose range touches at least one changed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchInfo {
    pub class_name: Option<String>,
    pub method_name: Option<String>,
    pub kind: BranchKind,
    /// Normalised header text, e.g. `if (x > 0)` or `case 1:`.
    pub condition: String,
    /// 1-based line of the header.
    pub start_line: usize,
    pub brace_depth_at_open: usize,
}

impl BranchInfo {
    /// Whether a closing brace that leaves `depth` ends this branch.
    ///
    /// A block header owns the block one level deeper than itself. A switch
    /// label sits inside the switch block and ends with it.
    fn is_closed_at(&self, depth: usize) -> bool {
        if self.kind.is_label() {
            self.brace_depth_at_open > depth
        } else {
            self.brace_depth_at_open >= depth
        }
    }
}

#[derive(Debug)]
struct OpenBranch {
    info: BranchInfo,
    emitted: bool,
    /// Body is a single statement on the header line; ends with the line.
    inline: bool,
}

/// Fold state of the extraction pass.
struct BranchState<'a> {
    changed: &'a BTreeSet<usize>,
    depth: usize,
    stack: Vec<OpenBranch>,
    accepted: Vec<BranchInfo>,
}

impl<'a> BranchState<'a> {
    fn new(changed: &'a BTreeSet<usize>) -> Self {
        Self {
            changed,
            depth: 0,
            stack: Vec::new(),
            accepted: Vec::new(),
        }
    }

    fn count_braces(&mut self, masked: &str, line: usize) {
        for brace in braces(masked) {
            match brace {
                Brace::Open => self.depth += 1,
                Brace::Close => {
                    self.depth = self.depth.saturating_sub(1);
                    let depth = self.depth;
                    self.close_while(line, |branch| branch.is_closed_at(depth));
                }
            }
        }
    }

    fn open(&mut self, header: BranchHeader, inline: bool, scope: &ScopeEntry, line: usize) {
        let kind = header.kind();
        if kind.is_label() {
            // A new label ends the previous label's body
            let depth = self.depth;
            self.close_while(line.saturating_sub(1), |branch| {
                branch.brace_depth_at_open >= depth
            });
        }

        let info = BranchInfo {
            class_name: scope.class_name.clone(),
            method_name: scope.method_name.clone(),
            kind,
            condition: header.condition(),
            start_line: line,
            brace_depth_at_open: self.depth,
        };

        let emitted = self.changed.contains(&line);
        if emitted {
            self.accept(info.clone());
        }
        self.stack.push(OpenBranch {
            info,
            emitted,
            inline,
        });
    }

    /// Close the branches whose whole body was on `line`.
    fn close_inline(&mut self, line: usize) {
        if !self.stack.iter().any(|open| open.inline) {
            return;
        }
        let (ended, still_open): (Vec<_>, Vec<_>) =
            self.stack.drain(..).partition(|open| open.inline);
        self.stack = still_open;
        for open in ended {
            self.close(open, line);
        }
    }

    /// Pop branches from the top of the stack while `closes` holds, testing
    /// each against `[start_line, end_line]`.
    fn close_while(&mut self, end_line: usize, closes: impl Fn(&BranchInfo) -> bool) {
        while self.stack.last().is_some_and(|open| closes(&open.info)) {
            if let Some(open) = self.stack.pop() {
                self.close(open, end_line);
            }
        }
    }

    fn close(&mut self, open: OpenBranch, end_line: usize) {
        if open.emitted || end_line < open.info.start_line {
            return;
        }
        if self
            .changed
            .range(open.info.start_line..=end_line)
            .next()
            .is_some()
        {
            self.accept(open.info);
        }
    }

    fn accept(&mut self, info: BranchInfo) {
        trace!(line = info.start_line, condition = %info.condition, "branch accepted");
        self.accepted.push(info);
    }

    fn finish(mut self, last_line: usize) -> Vec<BranchInfo> {
        while let Some(open) = self.stack.pop() {
            self.close(open, last_line);
        }
        self.accepted
    }
}

/// Extract the branches whose range touches a changed line.
///
/// `scopes` is the output of [`crate::scope::extract_scopes`] for the same
/// lines and `changed` holds 1-based line numbers. Headers are only detected
/// in methods that contain a changed line; braces are counted everywhere.
///
/// A branch is accepted as soon as its header line is changed, or when it
/// closes if any line from its header to its closing brace is changed.
/// Branches still open at the end of the file are tested up to the last
/// line. A block header whose body is a single statement on the header line
/// (`if (a < 0) return -1;`) ends with that line; a brace-less body on the
/// next line stays open until an enclosing `}`. Several headers on one line (`} else {`, `case 1: case 2:`) are
/// separate branches.
pub fn extract_branches<S: AsRef<str>>(
    lines: &[S],
    scopes: &[ScopeEntry],
    changed: &BTreeSet<usize>,
) -> Vec<BranchInfo> {
    if changed.is_empty() {
        return Vec::new();
    }

    let hot: HashSet<&ScopeEntry> = changed
        .iter()
        .filter_map(|line| line.checked_sub(1).and_then(|index| scopes.get(index)))
        .collect();

    let outside = ScopeEntry::default();
    let mut lexer = Lexer::new();
    let mut state = BranchState::new(changed);

    for (index, raw) in lines.iter().enumerate() {
        let raw = raw.as_ref();
        let line = index + 1;
        let masked = lexer.mask(raw);
        let scope = scopes.get(index).unwrap_or(&outside);

        if !hot.contains(scope) {
            state.count_braces(&masked, line);
            continue;
        }

        let mut counted = 0;
        for found in scan_headers(&masked, raw) {
            // Braces before the header decide its depth
            state.count_braces(&masked[counted..found.column], line);
            counted = found.column;
            let inline = has_inline_statement(&masked, &found);
            state.open(found.header, inline, scope, line);
        }
        state.count_braces(&masked[counted..], line);
        state.close_inline(line);
    }

    state.finish(lines.len())
}
