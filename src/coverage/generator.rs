//! Expansion of accepted branches into C0 test cases.

use std::collections::{BTreeSet, HashSet};

use crate::branch::{BranchInfo, BranchKind, extract_branches};
use crate::diff::split_lines;
use crate::scope::extract_scopes;

use super::types::C0TestCase;

const TRUE_SUFFIX: &str = " → true";
const FALSE_SUFFIX: &str = " → false";

/// Expand branches into deduplicated test cases, preserving first-seen order.
///
/// `if` and `else if` produce a true and a false case. A bare `else` is the
/// false outcome of its `if` and produces none. `switch`, `case` and
/// `default` produce one case each with the header text unchanged.
pub fn generate_cases<I>(branches: I) -> Vec<C0TestCase>
where
    I: IntoIterator<Item = BranchInfo>,
{
    let mut seen = HashSet::new();
    let mut cases = Vec::new();

    for branch in branches {
        for condition in expand(&branch) {
            let case = C0TestCase {
                class_name: branch.class_name.clone(),
                method_name: branch.method_name.clone(),
                branch_condition: condition,
            };
            if seen.insert(case.clone()) {
                cases.push(case);
            }
        }
    }

    cases
}

fn expand(branch: &BranchInfo) -> Vec<String> {
    match branch.kind {
        BranchKind::If | BranchKind::ElseIf => vec![
            format!("{}{}", branch.condition, TRUE_SUFFIX),
            format!("{}{}", branch.condition, FALSE_SUFFIX),
        ],
        BranchKind::Else => Vec::new(),
        BranchKind::Switch | BranchKind::Case | BranchKind::Default => {
            vec![branch.condition.clone()]
        }
    }
}

/// Generate the C0 cases for the changed lines of one file.
///
/// Composes scope attribution, branch extraction and case expansion.
/// `changed_line_numbers` are 1-based lines of `source_text`.
///
/// # Example
///
/// ```
/// use diffcov::coverage::generate_c0_cases;
/// use std::collections::BTreeSet;
///
/// let source = "class A {\n  int M(int x) {\n    if (x > 0) {\n      return 1;\n    }\n    return 0;\n  }\n}\n";
/// let changed = BTreeSet::from([4]);
///
/// let cases = generate_c0_cases(source, &changed);
/// assert_eq!(cases.len(), 2);
/// assert_eq!(cases[0].branch_condition, "if (x > 0) → true");
/// assert_eq!(cases[1].branch_condition, "if (x > 0) → false");
/// ```
pub fn generate_c0_cases(source_text: &str, changed_line_numbers: &BTreeSet<usize>) -> Vec<C0TestCase> {
    let lines = split_lines(source_text);
    let scopes = extract_scopes(&lines);
    generate_cases(extract_branches(&lines, &scopes, changed_line_numbers))
}
