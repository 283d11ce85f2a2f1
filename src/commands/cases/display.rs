//! Text output for the `cases` command.

use crate::coverage::{C0TestCase, CaseReport};

/// Table rows for one file's cases.
///
/// Each row is `class | method | condition`. A class or method equal to the
/// previous row's is left blank so groups read as a tree; a missing name is
/// shown as `-`.
pub fn format_case_rows(cases: &[C0TestCase]) -> Vec<String> {
    let mut rows = Vec::with_capacity(cases.len());
    let mut previous: Option<&C0TestCase> = None;

    for case in cases {
        let same_class = previous.is_some_and(|prev| prev.class_name == case.class_name);
        let same_method = same_class
            && previous.is_some_and(|prev| prev.method_name == case.method_name);

        let class = if same_class { "" } else { name_or_dash(&case.class_name) };
        let method = if same_method { "" } else { name_or_dash(&case.method_name) };

        rows.push(format!("{:<20} {:<20} {}", class, method, case.branch_condition)
            .trim_end()
            .to_string());
        previous = Some(case);
    }

    rows
}

fn name_or_dash(name: &Option<String>) -> &str {
    name.as_deref().unwrap_or("-")
}

/// Print the report as one table per file.
pub fn print_report(report: &CaseReport) {
    if report.files.is_empty() {
        println!(
            "No matching files changed between {} and {}.",
            report.old_revision, report.new_revision
        );
        return;
    }

    for file in &report.files {
        println!("{} ({} cases)", file.path, file.cases.len());
        if file.cases.is_empty() {
            println!("  no changed branches");
        }
        for row in format_case_rows(&file.cases) {
            println!("  {}", row);
        }
        println!();
    }

    println!("Total: {} cases", report.case_count());
}
