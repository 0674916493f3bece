//! Integration tests for textual overwriting policies.
//!
//! Policies are parsed from their compact text form and resolved against
//! realistic entry pairs through the public API only.

use catalogue::{EntryDescriptor, EntryVariant, SavedStatus};
use policy::{AttrAction, DataAction, PolicyParseError, Resolution, parse_criterion, parse_policy};

fn file(name: &str, mtime: u64, size: u64) -> EntryDescriptor {
    EntryDescriptor::new(name, EntryVariant::PlainFile)
        .with_perm(0o644)
        .with_owner(1000, 1000)
        .with_mtime(mtime)
        .with_size(size)
}

fn symlink(target: &str) -> EntryDescriptor {
    EntryDescriptor::new("link", EntryVariant::Symlink)
        .with_perm(0o777)
        .with_link_target(target)
}

// ============================================================================
// Typical merge policies
// ============================================================================

/// Verifies the usual "keep the newest copy" policy.
#[test]
fn newest_copy_wins() {
    let policy = parse_policy("{~R}[Oo]Pp", 0).expect("valid");

    let older = file("a", 100, 1);
    let newer = file("a", 200, 1);
    assert_eq!(
        policy.resolve(&older, &newer),
        Resolution::new(DataAction::Overwrite, AttrAction::Overwrite)
    );
    assert_eq!(
        policy.resolve(&newer, &older),
        Resolution::new(DataAction::Preserve, AttrAction::Preserve)
    );
}

/// Verifies that entries with identical dates are marked as already saved.
#[test]
fn unchanged_inodes_are_marked_saved() {
    let policy = parse_policy("{T&R&~R}[Ss]Oo", 0).expect("valid");
    let a = file("a", 100, 4);
    assert_eq!(
        policy.resolve(&a, &a),
        Resolution::new(
            DataAction::PreserveMarkAlreadySaved,
            AttrAction::PreserveMarkAlreadySaved
        )
    );
    assert_eq!(policy.resolve(&a, &file("a", 200, 4)).data, DataAction::Overwrite);
}

/// Verifies that stray characters inside a criterion are rejected.
#[test]
fn stray_characters_are_rejected() {
    let policy = parse_policy("{(I&~I)&(\n)}[Ss]", 0);
    assert!(matches!(policy, Err(PolicyParseError::UnknownCriterion { .. })));
    assert!(parse_policy("Pp;", 0).is_err());
}

/// Verifies that a dirty in-place file is always replaced.
#[test]
fn dirty_files_are_replaced() {
    let policy = parse_policy("{Y}[Oo]Pp", 0).expect("valid");
    let dirty = file("a", 500, 1).with_dirty(true);
    let clean = file("a", 100, 1);
    assert_eq!(policy.resolve(&dirty, &clean).data, DataAction::Overwrite);
    assert_eq!(policy.resolve(&clean, &dirty).data, DataAction::Preserve);
}

/// Verifies that attribute-only rules leave data to the default.
#[test]
fn attribute_rules_leave_data_undefined() {
    let policy = parse_policy("{r}[*p]*o", 0).expect("valid");
    let a = file("a", 1, 1);
    assert_eq!(
        policy.resolve(&a, &a),
        Resolution::new(DataAction::Preserve, AttrAction::Preserve)
    );
    let asking = policy.resolve_with(&a, &a, Resolution::new(DataAction::Ask, AttrAction::Ask));
    assert_eq!(asking.data, DataAction::Ask);
}

// ============================================================================
// Inode comparisons
// ============================================================================

/// Verifies that metadata differences break inode equality.
#[test]
fn same_inode_data_compares_metadata() {
    let criterion = parse_criterion("T&(S|!S)", 0).expect("valid");
    let a = file("a", 100, 10);
    assert!(criterion.evaluate(&a, &a));

    let same = policy::Criterion::SameInodeData;
    assert!(same.evaluate(&a, &a));
    assert!(!same.evaluate(&a, &file("a", 101, 10)));
    assert!(!same.evaluate(&a, &file("a", 100, 11)));
    assert!(!same.evaluate(&a, &a.clone().with_perm(0o600)));
}

/// Verifies that saved symlinks also compare their targets.
#[test]
fn saved_symlinks_compare_targets() {
    let same = policy::Criterion::SameInodeData;
    assert!(same.evaluate(&symlink("/a"), &symlink("/a")));
    assert!(!same.evaluate(&symlink("/a"), &symlink("/b")));

    let unsaved = symlink("/b").with_saved(SavedStatus::InodeOnly);
    assert!(same.evaluate(&symlink("/a"), &unsaved));
}

/// Verifies that a removed placeholder only matches another placeholder.
#[test]
fn removed_entries_share_a_type() {
    let removed = EntryDescriptor::new("old", EntryVariant::RemovedEntry {
        original: catalogue::TypeTag::SYMLINK,
    });
    let criterion = parse_criterion("T", 0).expect("valid");
    assert!(criterion.evaluate(&removed, &removed));
    assert!(!criterion.evaluate(&removed, &file("old", 0, 0)));
}
