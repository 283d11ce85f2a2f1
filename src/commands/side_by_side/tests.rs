//! Tests for the side-by-side command.

use super::*;
use crate::cli::RevisionArgs;
use crate::exit_codes;
use crate::side_by_side::SideKind;
use crate::test_support::{commit_files, create_test_repo};

fn session(repo: &Path) -> Session {
    let revisions = RevisionArgs {
        old: "HEAD~1".to_string(),
        new: "HEAD".to_string(),
    };
    Session::open(Some(repo), &revisions).unwrap()
}

fn numbered(prefix: &str, count: usize) -> String {
    (1..=count).map(|n| format!("{} {}\n", prefix, n)).collect()
}

#[test]
fn test_view_of_modified_file() {
    let temp_dir = create_test_repo();
    commit_files(temp_dir.path(), &[("src/Calc.cs", Some("a\nc\n"))], "v1");
    commit_files(temp_dir.path(), &[("src/Calc.cs", Some("a\nb\nc\n"))], "v2");

    let view = build_view(&session(temp_dir.path()), "HEAD~1", "HEAD", "src/Calc.cs").unwrap();

    assert_eq!(view.old_path, "src/Calc.cs");
    assert_eq!(
        view.rows,
        vec![
            SideBySideLine::context(1, "a", 1, "a"),
            SideBySideLine::from_sides(
                None,
                Some(crate::side_by_side::Side::new(2, "b", SideKind::Added))
            ),
            SideBySideLine::context(2, "c", 3, "c"),
        ]
    );
}

#[test]
fn test_view_backfills_lines_outside_hunks() {
    let temp_dir = create_test_repo();
    let old = numbered("line", 30);
    let new = old.replace("line 15\n", "line fifteen\n");
    commit_files(temp_dir.path(), &[("Big.cs", Some(old.as_str()))], "v1");
    commit_files(temp_dir.path(), &[("Big.cs", Some(new.as_str()))], "v2");

    let view = build_view(&session(temp_dir.path()), "HEAD~1", "HEAD", "Big.cs").unwrap();

    assert_eq!(view.rows.len(), 30);
    let changes: Vec<_> = view.rows.iter().filter(|row| row.is_change()).collect();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].left_content, "line 15");
    assert_eq!(changes[0].right_content, "line fifteen");
    assert_eq!(view.rows[0].left_content, "line 1");
    assert_eq!(view.rows[29].right_line_number, Some(30));
}

#[test]
fn test_view_follows_rename() {
    let temp_dir = create_test_repo();
    let old = numbered("stmt", 10);
    let new = old.replace("stmt 10\n", "stmt ten\n");
    commit_files(temp_dir.path(), &[("src/Old.cs", Some(old.as_str()))], "v1");
    commit_files(
        temp_dir.path(),
        &[("src/Old.cs", None), ("src/New.cs", Some(new.as_str()))],
        "rename",
    );

    let view = build_view(&session(temp_dir.path()), "HEAD~1", "HEAD", "src/New.cs").unwrap();

    assert_eq!(view.old_path, "src/Old.cs");
    assert_eq!(view.rows.len(), 10);
    assert_eq!(view.rows.iter().filter(|row| row.is_change()).count(), 1);
}

#[test]
fn test_view_of_added_file() {
    let temp_dir = create_test_repo();
    commit_files(temp_dir.path(), &[("src/Keep.cs", Some("k\n"))], "v1");
    commit_files(temp_dir.path(), &[("src/New.cs", Some("x\ny\n"))], "v2");

    let view = build_view(&session(temp_dir.path()), "HEAD~1", "HEAD", "src/New.cs").unwrap();

    assert_eq!(view.rows.len(), 2);
    assert!(view.rows.iter().all(|row| row.left_kind == SideKind::Placeholder));
    assert!(view.rows.iter().all(|row| row.right_kind == SideKind::Added));
}

#[test]
fn test_view_of_deleted_file() {
    let temp_dir = create_test_repo();
    commit_files(temp_dir.path(), &[("src/Gone.cs", Some("x\ny\n"))], "v1");
    commit_files(temp_dir.path(), &[("src/Gone.cs", None)], "v2");

    let view = build_view(&session(temp_dir.path()), "HEAD~1", "HEAD", "src/Gone.cs").unwrap();

    assert_eq!(view.rows.len(), 2);
    assert!(view.rows.iter().all(|row| row.right_kind == SideKind::Placeholder));
}

#[test]
fn test_view_of_unchanged_file_is_all_context() {
    let temp_dir = create_test_repo();
    commit_files(temp_dir.path(), &[("Same.cs", Some("s\n"))], "v1");
    commit_files(temp_dir.path(), &[("Other.cs", Some("o\n"))], "v2");

    let view = build_view(&session(temp_dir.path()), "HEAD~1", "HEAD", "Same.cs").unwrap();

    assert_eq!(view.rows, vec![SideBySideLine::context(1, "s", 1, "s")]);
}

#[test]
fn test_missing_file_is_user_error() {
    let temp_dir = create_test_repo();
    commit_files(temp_dir.path(), &[("a.cs", Some("a\n"))], "v1");

    let err = build_view(&session(temp_dir.path()), "HEAD~1", "HEAD", "nope.cs").unwrap_err();

    assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    assert!(err.to_string().contains("nope.cs"));
}

#[test]
fn test_cmd_rejects_narrow_width() {
    let temp_dir = create_test_repo();
    commit_files(temp_dir.path(), &[("a.cs", Some("a\n"))], "v1");

    let args = SideBySideArgs {
        revisions: RevisionArgs {
            old: "HEAD~1".to_string(),
            new: "HEAD".to_string(),
        },
        path: "a.cs".to_string(),
        format: Some(OutputFormat::Text),
        width: Some(3),
    };

    let err = cmd_side_by_side(Some(temp_dir.path()), args).unwrap_err();
    assert!(err.to_string().contains("--width"));
}

#[test]
fn test_cmd_prints_json() {
    let temp_dir = create_test_repo();
    commit_files(temp_dir.path(), &[("a.cs", Some("a\n"))], "v1");

    let args = SideBySideArgs {
        revisions: RevisionArgs {
            old: "HEAD~1".to_string(),
            new: "HEAD".to_string(),
        },
        path: "a.cs".to_string(),
        format: Some(OutputFormat::Json),
        width: None,
    };

    cmd_side_by_side(Some(temp_dir.path()), args).unwrap();
}
