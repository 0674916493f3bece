//! Integration tests for catalogue construction, walking and listing.
//!
//! These tests build catalogues through the public API only and check the
//! ordering, path construction and line format seen by callers.

use logging::{LineMode, LineSink};

use catalogue::{
    Catalogue, CatalogueBuilder, CatalogueStats, EntryDescriptor, EntryVariant, ListingOptions,
    NumericOwners, RawEntry, TypeTag, classify,
};

fn dir(name: &str) -> EntryDescriptor {
    EntryDescriptor::new(name, EntryVariant::Directory).with_perm(0o755)
}

fn file(name: &str) -> EntryDescriptor {
    EntryDescriptor::new(name, EntryVariant::PlainFile).with_perm(0o644)
}

// ============================================================================
// Walking
// ============================================================================

/// Verifies that nested directories produce path-appended children.
#[test]
fn walk_builds_nested_paths() {
    let mut builder = CatalogueBuilder::new();
    builder.open_directory(dir("usr")).expect("valid");
    builder.open_directory(dir("share")).expect("valid");
    builder.add(file("README")).expect("valid");
    let catalogue = builder.build();

    let paths: Vec<String> = catalogue.walk().map(|(path, _)| path).collect();
    assert_eq!(paths, ["/usr", "/usr/share", "/usr/share/README"]);
}

/// Verifies that `&Catalogue` iterates like `walk()`.
#[test]
fn catalogue_reference_is_iterable() {
    let catalogue = Catalogue::from_records([file("a"), file("b")]).expect("valid");
    let mut names = Vec::new();
    for (_, entry) in &catalogue {
        names.push(entry.name().to_owned());
    }
    assert_eq!(names, ["a", "b"]);
}

/// Verifies that skipping a subtree resumes at the directory's next sibling.
#[test]
fn skipping_a_subtree_resumes_at_sibling() {
    let catalogue = Catalogue::from_records([
        dir("a"),
        dir("b"),
        file("deep"),
        EntryDescriptor::end_of_directory(),
        EntryDescriptor::end_of_directory(),
        file("c"),
    ])
    .expect("balanced");

    let mut walk = catalogue.walk();
    let (first, _) = walk.next().expect("a");
    assert_eq!(first, "/a");
    walk.skip_subtree();
    assert_eq!(walk.depth(), 0);
    let rest: Vec<String> = walk.map(|(path, _)| path).collect();
    assert_eq!(rest, ["/c"]);
}

// ============================================================================
// Listing
// ============================================================================

/// Verifies that listing a classified record stream prints removed entries
/// with their original type.
#[test]
fn listing_of_classified_records() {
    let records = [
        (RawEntry::new(TypeTag::PLAIN_FILE), "kept"),
        (RawEntry::removed(TypeTag::SYMLINK), "link"),
        (RawEntry::new(TypeTag::new(b'?')), "odd"),
    ]
    .into_iter()
    .map(|(raw, name)| EntryDescriptor::new(name, classify(raw)).with_perm(0o600));
    let catalogue = Catalogue::from_records(records).expect("valid");

    let lines: Vec<String> = catalogue
        .listing_with_owners(ListingOptions::new(), NumericOwners)
        .collect();
    assert_eq!(
        lines,
        [
            " frw------- kept 0/0 1970/01/01 00:00:00",
            " Removed entry which was of type l link",
            " Removed entry which was of type ? odd",
        ]
    );
}

/// Verifies that the listing never descends past an end-of-directory
/// sentinel.
#[test]
fn listing_depth_returns_after_sentinel() {
    let catalogue = Catalogue::from_records([
        dir("outer"),
        dir("inner"),
        EntryDescriptor::end_of_directory(),
        file("after_inner"),
        EntryDescriptor::end_of_directory(),
        file("after_outer"),
    ])
    .expect("balanced");

    let indents: Vec<usize> = catalogue
        .listing(ListingOptions::new())
        .map(|line| line.len() - line.trim_start().len())
        .collect();
    assert_eq!(indents, [1, 4, 4, 1]);
}

/// Verifies that a listing written through a line sink keeps one line per
/// entry, terminated or not according to the sink's mode.
#[test]
fn listing_through_line_sink_modes() {
    let catalogue = Catalogue::from_records([
        dir("etc"),
        file("hosts"),
        EntryDescriptor::end_of_directory(),
        file("vmlinuz"),
    ])
    .expect("balanced");
    let expected: Vec<String> = catalogue.listing(ListingOptions::new()).collect();

    let mut terminated = LineSink::with_line_mode(Vec::new(), LineMode::WithNewline);
    let count = catalogue
        .list_to(ListingOptions::new(), &mut terminated)
        .expect("in-memory writer");
    assert_eq!(count, 3);
    let text = String::from_utf8(terminated.into_inner()).expect("utf-8");
    assert!(text.ends_with('\n'));
    assert_eq!(text.lines().collect::<Vec<_>>(), expected);

    let mut raw = LineSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
    catalogue
        .list_to(ListingOptions::new(), &mut raw)
        .expect("in-memory writer");
    let text = String::from_utf8(raw.into_inner()).expect("utf-8");
    assert!(!text.contains('\n'));
    assert_eq!(text, expected.concat());
}

// ============================================================================
// Statistics
// ============================================================================

/// Verifies the distribution report header and counts.
#[test]
fn stats_report_through_vec_sink() {
    let catalogue = Catalogue::from_records([
        dir("d"),
        file("f"),
        EntryDescriptor::new("s", EntryVariant::UnixSocket),
        EntryDescriptor::new("door", EntryVariant::DoorInode),
    ])
    .expect("valid");

    let mut report: Vec<String> = Vec::new();
    CatalogueStats::from_catalogue(&catalogue)
        .listing(&mut report)
        .expect("vec sink");

    assert_eq!(report.first().map(String::as_str), Some("CATALOGUE CONTENTS :"));
    assert!(report.iter().any(|line| line == "total number of inode : 4"));
    assert!(report.iter().any(|line| line == " - unix sockets       : 1"));
    assert!(report.iter().any(|line| line == " - Door entries       : 1"));
}
