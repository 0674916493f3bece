use catalogue::{AttrStatus, EntryDescriptor, EntryVariant, SavedStatus};
use infinint::BigUint;
use masks::Mask;

use crate::debug_policy::trace_criterion;

const SECONDS_PER_HOUR: u64 = 3600;

/// Reports whether two dates are equal once an integral shift of at most
/// `hourshift` hours is allowed between them.
///
/// With a zero `hourshift` this is plain equality.
///
/// # Examples
///
/// ```
/// use policy::equal_with_hourshift;
///
/// assert!(equal_with_hourshift(1, 7_200, 10_800));
/// assert!(!equal_with_hourshift(1, 0, 7_200));
/// assert!(!equal_with_hourshift(2, 0, 3_601));
/// ```
#[must_use]
pub const fn equal_with_hourshift(hourshift: u64, first: u64, second: u64) -> bool {
    let diff = first.abs_diff(second);
    diff % SECONDS_PER_HOUR == 0 && diff / SECONDS_PER_HOUR <= hourshift
}

/// Predicate over a conflicting pair: the entry already in place and the
/// entry about to be added.
///
/// Unless stated otherwise a criterion inspects the in-place entry, and an
/// entry that is not an inode (a removed-entry placeholder) is treated the
/// way the archive format treats a missing inode.
#[derive(Clone, Debug)]
pub enum Criterion {
    /// In-place entry is an inode (not a removed-entry placeholder).
    IsInode,
    /// In-place entry is a directory.
    IsDirectory,
    /// In-place entry is a plain file.
    IsPlainFile,
    /// In-place entry is a symbolic link.
    IsSymlink,
    /// In-place entry is a hard-link alias.
    IsHardLinked,
    /// In-place entry is the first alias of a hard-linked inode.
    IsFirstHardLink,
    /// In-place data is as recent as or more recent than the added data.
    DataMoreRecent {
        /// Tolerated whole-hour shift.
        hourshift: u64,
    },
    /// In-place data is at least as recent as a fixed date.
    DataMoreRecentOrEqualTo {
        /// Date in seconds since the epoch.
        date: u64,
        /// Tolerated whole-hour shift.
        hourshift: u64,
    },
    /// In-place data is at least as large as the added data; true unless
    /// both sides carry file data.
    DataBigger,
    /// In-place data is fully stored.
    DataSaved,
    /// In-place data changed while it was read.
    DataDirty,
    /// In-place data was scanned for holes.
    DataSparse,
    /// In-place data has a delta signature.
    HasDeltaSignature,
    /// Both sides are the same kind of inode with equal ownership,
    /// permissions, date and type-specific content.
    SameInodeData,
    /// In-place attributes exist.
    AttrsPresent,
    /// In-place attributes are as recent as or more recent than the added
    /// ones.
    AttrsMoreRecent {
        /// Tolerated whole-hour shift.
        hourshift: u64,
    },
    /// In-place attributes are at least as recent as a fixed date.
    AttrsMoreRecentOrEqualTo {
        /// Date in seconds since the epoch.
        date: u64,
        /// Tolerated whole-hour shift.
        hourshift: u64,
    },
    /// In-place entry has at least as many attributes.
    MoreAttrs,
    /// In-place attributes use at least as much space.
    AttrsBigger,
    /// In-place attributes are fully stored.
    AttrsSaved,
    /// Both sides are of the same kind.
    SameType,
    /// In-place entry name matches a mask.
    NameMatches(Mask),
    /// Negation.
    Not(Box<Criterion>),
    /// True when every child is true; true when empty.
    And(Vec<Criterion>),
    /// True when any child is true; false when empty.
    Or(Vec<Criterion>),
    /// Evaluates the child with the two sides swapped.
    Invert(Box<Criterion>),
}

impl Criterion {
    /// Conjunction.
    #[must_use]
    pub fn all(criteria: impl IntoIterator<Item = Self>) -> Self {
        Self::And(criteria.into_iter().collect())
    }

    /// Disjunction.
    #[must_use]
    pub fn any(criteria: impl IntoIterator<Item = Self>) -> Self {
        Self::Or(criteria.into_iter().collect())
    }

    /// Wraps the criterion so that it inspects the entry being added.
    #[must_use]
    pub fn inverted(self) -> Self {
        Self::Invert(Box::new(self))
    }

    /// Short name used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::IsInode => "is_inode",
            Self::IsDirectory => "is_directory",
            Self::IsPlainFile => "is_plain_file",
            Self::IsSymlink => "is_symlink",
            Self::IsHardLinked => "is_hard_linked",
            Self::IsFirstHardLink => "is_first_hard_link",
            Self::DataMoreRecent { .. } => "data_more_recent",
            Self::DataMoreRecentOrEqualTo { .. } => "data_more_recent_or_equal_to",
            Self::DataBigger => "data_bigger",
            Self::DataSaved => "data_saved",
            Self::DataDirty => "data_dirty",
            Self::DataSparse => "data_sparse",
            Self::HasDeltaSignature => "has_delta_signature",
            Self::SameInodeData => "same_inode_data",
            Self::AttrsPresent => "attrs_present",
            Self::AttrsMoreRecent { .. } => "attrs_more_recent",
            Self::AttrsMoreRecentOrEqualTo { .. } => "attrs_more_recent_or_equal_to",
            Self::MoreAttrs => "more_attrs",
            Self::AttrsBigger => "attrs_bigger",
            Self::AttrsSaved => "attrs_saved",
            Self::SameType => "same_type",
            Self::NameMatches(_) => "name_matches",
            Self::Not(_) => "not",
            Self::And(_) => "and",
            Self::Or(_) => "or",
            Self::Invert(_) => "invert",
        }
    }

    /// Evaluates the criterion for one conflicting pair.
    ///
    /// `And` stops at the first false child and `Or` at the first true one.
    #[must_use]
    pub fn evaluate(&self, in_place: &EntryDescriptor, to_be_added: &EntryDescriptor) -> bool {
        let result = match self {
            Self::IsInode => in_place.variant().is_inode(),
            Self::IsDirectory => in_place.variant() == EntryVariant::Directory,
            Self::IsPlainFile => in_place.variant() == EntryVariant::PlainFile,
            Self::IsSymlink => in_place.variant() == EntryVariant::Symlink,
            Self::IsHardLinked => in_place.is_hard_linked(),
            Self::IsFirstHardLink => in_place.hard_link().is_some_and(|link| link.first),
            Self::DataMoreRecent { hourshift } => {
                data_more_recent(in_place, to_be_added, *hourshift)
            }
            Self::DataMoreRecentOrEqualTo { date, hourshift } => {
                inode(in_place).is_none_or(|entry| {
                    entry.mtime() >= *date || equal_with_hourshift(*hourshift, entry.mtime(), *date)
                })
            }
            Self::DataBigger => match (file_data(in_place), file_data(to_be_added)) {
                (Some(first), Some(second)) => first.size() >= second.size(),
                _ => true,
            },
            Self::DataSaved => {
                inode(in_place).is_none_or(|entry| entry.saved() == SavedStatus::Saved)
            }
            Self::DataDirty => file_data(in_place).is_some_and(EntryDescriptor::is_dirty),
            Self::DataSparse => file_data(in_place).is_some_and(EntryDescriptor::is_sparse),
            Self::HasDeltaSignature => {
                file_data(in_place).is_some_and(EntryDescriptor::has_delta_signature)
            }
            Self::SameInodeData => same_inode_data(in_place, to_be_added),
            Self::AttrsPresent => {
                inode(in_place).is_some_and(|entry| entry.attrs().status.is_present())
            }
            Self::AttrsMoreRecent { hourshift } => {
                attrs_more_recent(in_place, to_be_added, *hourshift)
            }
            Self::AttrsMoreRecentOrEqualTo { date, hourshift } => {
                let first = attr_change(in_place).unwrap_or(0);
                first >= *date || equal_with_hourshift(*hourshift, first, *date)
            }
            Self::MoreAttrs => attr_count(in_place) >= attr_count(to_be_added),
            Self::AttrsBigger => attr_space(in_place) >= attr_space(to_be_added),
            Self::AttrsSaved => {
                inode(in_place).is_some_and(|entry| entry.attrs().status == AttrStatus::Full)
            }
            Self::SameType => same_type(in_place, to_be_added),
            Self::NameMatches(mask) => mask.evaluate(in_place.name()),
            Self::Not(inner) => !inner.evaluate(in_place, to_be_added),
            Self::And(children) => children
                .iter()
                .all(|child| child.evaluate(in_place, to_be_added)),
            Self::Or(children) => children
                .iter()
                .any(|child| child.evaluate(in_place, to_be_added)),
            Self::Invert(inner) => inner.evaluate(to_be_added, in_place),
        };
        trace_criterion(self.kind(), in_place.name(), result);
        result
    }
}

impl std::ops::Not for Criterion {
    type Output = Self;

    fn not(self) -> Self {
        Self::Not(Box::new(self))
    }
}

fn inode(entry: &EntryDescriptor) -> Option<&EntryDescriptor> {
    entry.variant().is_inode().then_some(entry)
}

fn file_data(entry: &EntryDescriptor) -> Option<&EntryDescriptor> {
    entry.has_file_data().then_some(entry)
}

fn data_more_recent(first: &EntryDescriptor, second: &EntryDescriptor, hourshift: u64) -> bool {
    let Some(first) = inode(first) else {
        return true;
    };
    let second_date = inode(second).map_or(0, EntryDescriptor::mtime);
    first.mtime() >= second_date || equal_with_hourshift(hourshift, first.mtime(), second_date)
}

/// Change date of a present attribute set.
fn attr_change(entry: &EntryDescriptor) -> Option<u64> {
    inode(entry)
        .filter(|entry| entry.attrs().status.is_present())
        .map(|entry| entry.attrs().last_change)
}

fn attrs_more_recent(first: &EntryDescriptor, second: &EntryDescriptor, hourshift: u64) -> bool {
    let Some(second) = attr_change(second) else {
        return true;
    };
    let first = attr_change(first).unwrap_or(0);
    first >= second || equal_with_hourshift(hourshift, first, second)
}

fn attr_count(entry: &EntryDescriptor) -> u64 {
    inode(entry)
        .filter(|entry| entry.attrs().status == AttrStatus::Full)
        .map_or(0, |entry| entry.attrs().count)
}

fn attr_space(entry: &EntryDescriptor) -> BigUint {
    inode(entry)
        .filter(|entry| entry.attrs().status == AttrStatus::Full)
        .map_or_else(BigUint::zero, |entry| entry.attrs().space.clone())
}

/// Kind used by [`Criterion::SameType`]; doors count as plain files.
fn type_family(variant: EntryVariant) -> Option<u8> {
    Some(match variant {
        EntryVariant::PlainFile | EntryVariant::DoorInode => 0,
        EntryVariant::Symlink => 1,
        EntryVariant::Directory => 2,
        EntryVariant::CharDevice => 3,
        EntryVariant::BlockDevice => 4,
        EntryVariant::NamedPipe => 5,
        EntryVariant::UnixSocket => 6,
        EntryVariant::RemovedEntry { .. } => 7,
        EntryVariant::EndOfDirectory => return None,
    })
}

fn same_type(first: &EntryDescriptor, second: &EntryDescriptor) -> bool {
    match (type_family(first.variant()), type_family(second.variant())) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn same_inode_data(first: &EntryDescriptor, second: &EntryDescriptor) -> bool {
    if !same_type(first, second) || !first.variant().is_inode() {
        return false;
    }
    if first.uid() != second.uid()
        || first.gid() != second.gid()
        || first.perm() != second.perm()
        || first.mtime() != second.mtime()
    {
        return false;
    }
    if first.has_file_data() && first.size() != second.size() {
        return false;
    }
    let both_saved =
        first.saved() == SavedStatus::Saved && second.saved() == SavedStatus::Saved;
    match first.variant() {
        EntryVariant::CharDevice | EntryVariant::BlockDevice if both_saved => {
            first.device() == second.device()
        }
        EntryVariant::Symlink if both_saved => first.link_target() == second.link_target(),
        _ => true,
    }
}
