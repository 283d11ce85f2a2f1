//! C0 case and report types.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One outcome a test must exercise.
///
/// Always fully qualified; display code may omit repeated names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct C0TestCase {
    pub class_name: Option<String>,
    pub method_name: Option<String>,
    /// e.g. `if (x > 0) → true` or `case 1:`.
    pub branch_condition: String,
}

/// The cases generated for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCases {
    pub path: String,
    pub cases: Vec<C0TestCase>,
}

/// Cases for every file between two revisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    pub generated_at: DateTime<Utc>,
    pub old_revision: String,
    pub new_revision: String,
    pub files: Vec<FileCases>,
}

impl CaseReport {
    /// Create a report stamped with the current time.
    pub fn new(old_revision: &str, new_revision: &str, files: Vec<FileCases>) -> Self {
        Self {
            generated_at: Utc::now(),
            old_revision: old_revision.to_string(),
            new_revision: new_revision.to_string(),
            files,
        }
    }

    /// Total number of cases across files.
    pub fn case_count(&self) -> usize {
        self.files.iter().map(|file| file.cases.len()).sum()
    }
}
