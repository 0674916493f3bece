//! Integration tests for path list masks loaded from files.

use masks::{ListMask, Mask, MaskError};
use test_support::{missing_file, write_lines, write_text};

/// Verifies relative lines are completed with the prefix.
#[test]
fn relative_lines_use_prefix() {
    let file = write_lines("list", ["etc/hosts", "/srv/data", ""]).expect("temp file");
    let list = ListMask::from_file(file.path(), "/", false, true).expect("loads");

    assert_eq!(list.len(), 2);
    assert_eq!(list.paths().collect::<Vec<_>>(), ["/etc/hosts", "/srv/data"]);
    let mask = Mask::from(list);
    assert!(mask.evaluate("/etc/hosts"));
    assert!(!mask.evaluate("/etc"));
}

/// Verifies including mode reaches listed entries through their parents.
#[test]
fn including_list_keeps_parents() {
    let file = write_text("list", "home/user/notes.txt\r\nhome/user/todo.txt\r\n").expect("temp file");
    let mask = Mask::from(ListMask::from_file(file.path(), "/", true, true).expect("loads"));

    assert!(mask.evaluate("/home"));
    assert!(mask.evaluate("/home/user"));
    assert!(mask.evaluate("/home/user/todo.txt"));
    assert!(!mask.evaluate("/home/other"));
}

/// Verifies an unreadable file is reported with its path.
#[test]
fn missing_file_is_reported() {
    let file = missing_file("absent").expect("temp dir");
    let error = ListMask::from_file(file.path(), "/", true, true).expect_err("missing");
    match error {
        MaskError::ListFile { path, .. } => assert_eq!(path, file.path()),
        other => panic!("unexpected error: {other}"),
    }
}
