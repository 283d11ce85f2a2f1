//! Core types produced by diff parsing.

use serde::Serialize;

/// Classification of one line of a unified diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffLineKind {
    /// Unchanged line present in both files (`' '` prefix).
    Context,
    /// Line only present in the new file (`'+'` prefix).
    Added,
    /// Line only present in the old file (`'-'` prefix).
    Deleted,
    /// A `@@ -a,b +c,d @@` header; content holds the raw header text.
    Hunk,
}

impl DiffLineKind {
    /// The prefix character this kind carries in patch text.
    ///
    /// Hunk headers carry their own `@@` text, so their marker is empty.
    pub fn marker(self) -> &'static str {
        match self {
            DiffLineKind::Context => " ",
            DiffLineKind::Added => "+",
            DiffLineKind::Deleted => "-",
            DiffLineKind::Hunk => "",
        }
    }
}

/// A single parsed line of a one-file unified diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffLine {
    pub kind: DiffLineKind,
    /// Line number in the old file (1-based); set for Context and Deleted.
    pub old_line_number: Option<usize>,
    /// Line number in the new file (1-based); set for Context and Added.
    pub new_line_number: Option<usize>,
    /// Line content without its prefix marker.
    pub content: String,
}

impl DiffLine {
    pub fn context(old: usize, new: usize, content: impl Into<String>) -> Self {
        Self {
            kind: DiffLineKind::Context,
            old_line_number: Some(old),
            new_line_number: Some(new),
            content: content.into(),
        }
    }

    pub fn added(new: usize, content: impl Into<String>) -> Self {
        Self {
            kind: DiffLineKind::Added,
            old_line_number: None,
            new_line_number: Some(new),
            content: content.into(),
        }
    }

    pub fn deleted(old: usize, content: impl Into<String>) -> Self {
        Self {
            kind: DiffLineKind::Deleted,
            old_line_number: Some(old),
            new_line_number: None,
            content: content.into(),
        }
    }

    pub fn hunk(header: impl Into<String>) -> Self {
        Self {
            kind: DiffLineKind::Hunk,
            old_line_number: None,
            new_line_number: None,
            content: header.into(),
        }
    }

    /// Rebuild the patch text of this line (`marker + content`).
    pub fn to_patch_line(&self) -> String {
        format!("{}{}", self.kind.marker(), self.content)
    }
}

/// Parsed ranges of a hunk header.
///
/// A range written without a length (`-5` instead of `-5,1`) has length 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkHeader {
    pub old_start: usize,
    pub old_len: usize,
    pub new_start: usize,
    pub new_len: usize,
}

/// Change status of a file between two revisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum FileStatus {
    Added,
    Modified,
    Deleted,
    Renamed { from: String },
    Copied { from: String },
    /// Type changes and other statuses git may report.
    Other { code: String },
}

impl FileStatus {
    /// Single-letter code as printed by `git diff --name-status`.
    pub fn letter(&self) -> &str {
        match self {
            FileStatus::Added => "A",
            FileStatus::Modified => "M",
            FileStatus::Deleted => "D",
            FileStatus::Renamed { .. } => "R",
            FileStatus::Copied { .. } => "C",
            FileStatus::Other { code } => code,
        }
    }

    /// Path the file had at the old revision, when it differs from the new path.
    pub fn previous_path(&self) -> Option<&str> {
        match self {
            FileStatus::Renamed { from } | FileStatus::Copied { from } => Some(from),
            _ => None,
        }
    }
}

/// A file that differs between two revisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangedFile {
    /// Repository-relative path at the new revision (forward slashes).
    pub path: String,
    #[serde(flatten)]
    pub status: FileStatus,
}

/// One file's section of a multi-file patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePatch {
    /// Path on the old side; `None` for `/dev/null` (new file).
    pub old_path: Option<String>,
    /// Path on the new side; `None` for `/dev/null` (deleted file).
    pub new_path: Option<String>,
    /// The section's patch text, starting at its `diff --git` line.
    pub text: String,
}
