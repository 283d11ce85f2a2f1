//! Tests for diff parsing.

use super::*;
use crate::error::DiffcovError;
use crate::test_support::{commit_files, create_test_repo, head_sha};
use proptest::prelude::*;

fn rejoin_after_first_hunk(lines: &[DiffLine]) -> String {
    lines
        .iter()
        .map(|line| format!("{}\n", line.to_patch_line()))
        .collect()
}

/// Test the numbering of a hunk with context, additions, and deletions.
#[test]
fn test_parse_numbers_lines_from_hunk_header() {
    let diff = "@@ -10,4 +10,4 @@ fn main() {\n ctx\n-old\n+new\n+extra\n tail\n";

    let result = parse_unified_diff(diff);

    assert_eq!(result.len(), 6);
    assert_eq!(result[0], DiffLine::hunk("@@ -10,4 +10,4 @@ fn main() {"));
    assert_eq!(result[1], DiffLine::context(10, 10, "ctx"));
    assert_eq!(result[2], DiffLine::deleted(11, "old"));
    assert_eq!(result[3], DiffLine::added(11, "new"));
    assert_eq!(result[4], DiffLine::added(12, "extra"));
    assert_eq!(result[5], DiffLine::context(12, 13, "tail"));
}

/// Test that the git preamble before the first hunk is skipped.
#[test]
fn test_preamble_is_skipped() {
    let diff = r#"diff --git a/src/Foo.cs b/src/Foo.cs
index abc1234..def5678 100644
--- a/src/Foo.cs
+++ b/src/Foo.cs
@@ -1,2 +1,2 @@
-a
+b
 c
"#;

    let result = parse_unified_diff(diff);

    assert_eq!(result.len(), 4);
    assert_eq!(result[0].kind, DiffLineKind::Hunk);
    assert_eq!(result[1], DiffLine::deleted(1, "a"));
    assert_eq!(result[2], DiffLine::added(1, "b"));
    assert_eq!(result[3], DiffLine::context(2, 2, "c"));
}

/// Test that `---`/`+++` inside a hunk are ordinary deleted/added lines.
#[test]
fn test_marker_lookalikes_inside_hunk() {
    let diff = "@@ -1,1 +1,1 @@\n--- comment\n+++ counter\n";

    let result = parse_unified_diff(diff);

    assert_eq!(result[1], DiffLine::deleted(1, "-- comment"));
    assert_eq!(result[2], DiffLine::added(1, "++ counter"));
}

/// Test CRLF line endings are tolerated.
#[test]
fn test_crlf_is_stripped() {
    let diff = "@@ -1,1 +1,2 @@\r\n a\r\n+b\r\n";

    let result = parse_unified_diff(diff);

    assert_eq!(result[0].content, "@@ -1,1 +1,2 @@");
    assert_eq!(result[1], DiffLine::context(1, 1, "a"));
    assert_eq!(result[2], DiffLine::added(2, "b"));
}

/// Test a malformed header is skipped without losing earlier or later hunks.
#[test]
fn test_malformed_hunk_header_recovers() {
    let diff = "@@ -1,1 +1,1 @@\n-a\n+b\n@@ -x,1 +y,1 @@\n-lost\n+lost\n@@ -20,1 +20,1 @@\n-c\n+d\n";

    let result = parse_unified_diff(diff);

    let contents: Vec<&str> = result.iter().map(|l| l.content.as_str()).collect();
    assert_eq!(
        contents,
        vec!["@@ -1,1 +1,1 @@", "a", "b", "@@ -20,1 +20,1 @@", "c", "d"]
    );
    assert_eq!(result[4], DiffLine::deleted(20, "c"));
    assert_eq!(result[5], DiffLine::added(20, "d"));
}

/// Test the "no newline" marker is not treated as a line of either file.
#[test]
fn test_no_newline_marker_skipped() {
    let diff = "@@ -1 +1 @@\n-a\n\\ No newline at end of file\n+a\n";

    let result = parse_unified_diff(diff);

    assert_eq!(result.len(), 3);
    assert_eq!(result[2], DiffLine::added(1, "a"));
}

/// Test an empty line inside a hunk counts as an empty context line.
#[test]
fn test_bare_empty_line_is_context() {
    let diff = "@@ -1,3 +1,3 @@\n a\n\n-b\n+c\n";

    let result = parse_unified_diff(diff);

    assert_eq!(result[2], DiffLine::context(2, 2, ""));
    assert_eq!(result[3], DiffLine::deleted(3, "b"));
}

/// Test a blank line after the hunk's counted lines is not a context line.
#[test]
fn test_blank_line_past_hunk_counts_is_skipped() {
    let diff = "@@ -1,2 +1,2 @@\n a\n-b\n+c\n\n";

    let result = parse_unified_diff(diff);

    assert_eq!(
        result,
        vec![
            DiffLine::hunk("@@ -1,2 +1,2 @@"),
            DiffLine::context(1, 1, "a"),
            DiffLine::deleted(2, "b"),
            DiffLine::added(2, "c"),
        ]
    );
}

/// Test the header counts are tracked per hunk.
#[test]
fn test_blank_line_counts_reset_at_next_hunk() {
    let diff = "@@ -1 +1 @@\n-a\n+A\n\n@@ -5,2 +5,2 @@\n\n x\n";

    let result = parse_unified_diff(diff);

    assert_eq!(result.len(), 6);
    assert_eq!(result[4], DiffLine::context(5, 5, ""));
    assert_eq!(result[5], DiffLine::context(6, 6, "x"));
}

/// Test empty diff returns empty results.
#[test]
fn test_empty_diff() {
    assert!(parse_unified_diff("").is_empty());
}

/// Test diff with only metadata lines (e.g. a pure rename).
#[test]
fn test_diff_metadata_only() {
    let diff = r#"diff --git a/old.cs b/new.cs
similarity index 100%
rename from old.cs
rename to new.cs
"#;

    assert!(parse_unified_diff(diff).is_empty());
}

/// Test that markers plus content reproduce the patch from the first hunk on.
#[test]
fn test_round_trip_after_first_hunk() {
    let body = "@@ -3,4 +3,5 @@ class Foo\n     int x;\n-    int y;\n+    long y;\n+    long z;\n \n     void Bar()\n@@ -40 +41 @@\n-}\n+ }\n";
    let diff = format!("diff --git a/Foo.cs b/Foo.cs\n--- a/Foo.cs\n+++ b/Foo.cs\n{}", body);

    let result = parse_unified_diff(&diff);

    assert_eq!(rejoin_after_first_hunk(&result), body);
}

proptest! {
    #[test]
    fn prop_round_trip_reproduces_patch(
        lines in prop::collection::vec(
            (prop_oneof![Just(' '), Just('+'), Just('-')], "[a-z {}@+-]{0,12}"),
            0..40,
        )
    ) {
        let mut body = String::from("@@ -1,5 +1,5 @@\n");
        for (marker, content) in &lines {
            body.push(*marker);
            body.push_str(content);
            body.push('\n');
        }

        let parsed = parse_unified_diff(&body);

        prop_assert_eq!(rejoin_after_first_hunk(&parsed), body);
    }
}

/// Test parsing hunk headers with various formats.
#[test]
fn test_parse_hunk_header_formats() {
    let header = parse_hunk_header("@@ -10,5 +20,3 @@").unwrap();
    assert_eq!(
        header,
        HunkHeader {
            old_start: 10,
            old_len: 5,
            new_start: 20,
            new_len: 3
        }
    );

    // Without lengths (single line change)
    let header = parse_hunk_header("@@ -1 +1 @@").unwrap();
    assert_eq!((header.old_len, header.new_len), (1, 1));

    // With context info after @@
    let header = parse_hunk_header("@@ -10,5 +20,3 @@ fn foo()").unwrap();
    assert_eq!((header.old_start, header.new_start), (10, 20));

    // Line 0 (new file, no prior content)
    let header = parse_hunk_header("@@ -0,0 +1,10 @@").unwrap();
    assert_eq!((header.old_start, header.old_len, header.new_start), (0, 0, 1));
}

#[test]
fn test_parse_hunk_header_rejects_garbage() {
    for line in [
        "@@ -a,1 +1,1 @@",
        "@@ -1,1 +1,1",
        "@@ 1,1 1,1 @@",
        "@@ -1,1 @@",
        "@@@ -1,1 -1,1 +1,1 @@@",
    ] {
        let err = parse_hunk_header(line).unwrap_err();
        assert!(
            matches!(err, DiffcovError::MalformedHunkHeader(ref raw) if raw == line),
            "expected malformed header for {line:?}"
        );
    }
}

#[test]
fn test_split_lines_strips_carriage_returns() {
    assert_eq!(split_lines("a\r\nb\nc\r"), vec!["a", "b", "c"]);
    assert!(split_lines("").is_empty());
}

#[test]
fn test_changed_lines_uses_added_new_numbers() {
    let diff = parse_unified_diff("@@ -1,3 +1,3 @@\n a\n-b\n+B\n+C\n-c\n");

    let changed = changed_lines(&diff);

    assert_eq!(changed.into_iter().collect::<Vec<_>>(), vec![2, 3]);
}

#[test]
fn test_changed_lines_pure_deletion_is_empty() {
    let diff = parse_unified_diff("@@ -1,2 +1,1 @@\n a\n-b\n");
    assert!(changed_lines(&diff).is_empty());
}

#[test]
fn test_all_lines_covers_new_file() {
    assert_eq!(all_lines(3).into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert!(all_lines(0).is_empty());
}

/// Test splitting multiple files, including added and deleted ones.
#[test]
fn test_split_file_patches() {
    let diff = r#"diff --git a/src/Foo.cs b/src/Foo.cs
index 111..222 100644
--- a/src/Foo.cs
+++ b/src/Foo.cs
@@ -1 +1 @@
--- not a header
+++ not a header either
diff --git a/src/New.cs b/src/New.cs
new file mode 100644
--- /dev/null
+++ b/src/New.cs
@@ -0,0 +1 @@
+class New {}
diff --git a/src/Gone.cs b/src/Gone.cs
deleted file mode 100644
--- a/src/Gone.cs
+++ /dev/null
@@ -1 +0,0 @@
-class Gone {}
"#;

    let patches = split_file_patches(diff);

    assert_eq!(patches.len(), 3);
    assert_eq!(patches[0].old_path.as_deref(), Some("src/Foo.cs"));
    assert_eq!(patches[0].new_path.as_deref(), Some("src/Foo.cs"));
    assert!(patches[0].text.ends_with("+++ not a header either\n"));
    assert_eq!(patches[1].old_path, None);
    assert_eq!(patches[1].new_path.as_deref(), Some("src/New.cs"));
    assert_eq!(patches[2].old_path.as_deref(), Some("src/Gone.cs"));
    assert_eq!(patches[2].new_path, None);

    // Each section parses on its own
    let lines = parse_unified_diff(&patches[1].text);
    assert_eq!(lines[1], DiffLine::added(1, "class New {}"));
}

/// Test file paths with spaces and renames.
#[test]
fn test_split_file_patches_rename_with_spaces() {
    let diff = r#"diff --git a/src/my old.cs b/src/my new.cs
similarity index 90%
rename from src/my old.cs
rename to src/my new.cs
--- a/src/my old.cs
+++ b/src/my new.cs
@@ -1 +1 @@
-a
+b
"#;

    let patches = split_file_patches(diff);

    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].old_path.as_deref(), Some("src/my old.cs"));
    assert_eq!(patches[0].new_path.as_deref(), Some("src/my new.cs"));
}

#[test]
fn test_parse_name_status() {
    let output = "M\tsrc/Foo.cs\nA\tsrc/New.cs\nD\tsrc/Gone.cs\nR087\tsrc/Old.cs\tsrc/Renamed.cs\nC100\ta.cs\tb.cs\nT\tlink\n\ngarbage\n";

    let files = parse_name_status(output);

    assert_eq!(files.len(), 6);
    assert_eq!(files[0].status, FileStatus::Modified);
    assert_eq!(files[1].status, FileStatus::Added);
    assert_eq!(files[2].status, FileStatus::Deleted);
    assert_eq!(files[3].path, "src/Renamed.cs");
    assert_eq!(files[3].status.previous_path(), Some("src/Old.cs"));
    assert_eq!(files[4].status.letter(), "C");
    assert_eq!(
        files[5].status,
        FileStatus::Other {
            code: "T".to_string()
        }
    );
}

/// Integration test: collaborator calls against a real repository.
#[test]
fn test_integration_with_git() {
    let temp_dir = create_test_repo();
    let path = temp_dir.path();

    let base = commit_files(path, &[("src/Foo.cs", Some("a\nc\n"))], "Add Foo");
    let head = commit_files(
        path,
        &[
            ("src/Foo.cs", Some("a\nb\nc\n")),
            ("src/New.cs", Some("class New {}\n")),
        ],
        "Change Foo",
    );
    assert_eq!(head, head_sha(path));

    let files = changed_files(path, &base, &head, true).unwrap();
    assert!(files.contains(&ChangedFile {
        path: "src/Foo.cs".to_string(),
        status: FileStatus::Modified
    }));
    assert!(files.contains(&ChangedFile {
        path: "src/New.cs".to_string(),
        status: FileStatus::Added
    }));

    let patch = file_diff(path, &base, &head, &["src/Foo.cs"], 3).unwrap();
    let lines = parse_unified_diff(&patch);
    assert_eq!(lines[0].kind, DiffLineKind::Hunk);
    assert!(lines.contains(&DiffLine::added(2, "b")));
    assert_eq!(changed_lines(&lines).into_iter().collect::<Vec<_>>(), vec![2]);

    let old = file_content(path, &base, "src/Foo.cs").unwrap();
    assert_eq!(old, Some(vec!["a".to_string(), "c".to_string()]));

    let absent = file_content(path, &base, "src/New.cs").unwrap();
    assert_eq!(absent, None);
}
