use std::fmt;

/// One named counter of [`Statistics`](crate::Statistics).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Counter {
    /// Entries fully processed.
    Treated,
    /// Hard-link aliases met after the first one.
    HardLinks,
    /// Entries left aside because they did not change.
    Skipped,
    /// Entries whose metadata only was processed.
    InodeOnly,
    /// Entries excluded by the selection masks.
    Ignored,
    /// Entries refused because they were older than the existing copy.
    TooOld,
    /// Entries that failed.
    Errored,
    /// Entries recorded as deleted.
    Deleted,
    /// Entries whose extended attributes were processed.
    EaTreated,
    /// Byte amount wasted by re-saved data.
    ByteAmount,
    /// Entries whose filesystem-specific attributes were processed.
    FsaTreated,
}

impl Counter {
    /// Every counter, in report order.
    pub const ALL: [Self; 11] = [
        Self::Treated,
        Self::HardLinks,
        Self::Skipped,
        Self::InodeOnly,
        Self::Ignored,
        Self::TooOld,
        Self::Errored,
        Self::Deleted,
        Self::EaTreated,
        Self::ByteAmount,
        Self::FsaTreated,
    ];

    /// Label used by [`Statistics::dump`](crate::Statistics::dump).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Treated => "treated",
            Self::HardLinks => "hard_links",
            Self::Skipped => "skipped",
            Self::InodeOnly => "inode only",
            Self::Ignored => "ignored",
            Self::TooOld => "tooold",
            Self::Errored => "errored",
            Self::Deleted => "deleted",
            Self::EaTreated => "ea_treated",
            Self::ByteAmount => "byte_amount",
            Self::FsaTreated => "fsa_treated",
        }
    }

    /// True for the categories summed by
    /// [`Statistics::total`](crate::Statistics::total).
    ///
    /// Hard links, attribute counters and the byte amount describe entries
    /// already counted elsewhere.
    #[must_use]
    pub const fn counts_toward_total(self) -> bool {
        matches!(
            self,
            Self::Treated
                | Self::Skipped
                | Self::InodeOnly
                | Self::Ignored
                | Self::TooOld
                | Self::Errored
                | Self::Deleted
        )
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
