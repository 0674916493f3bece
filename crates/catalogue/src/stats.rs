use std::io;

use infinint::BigUint;
use logging::UserInteraction;
use rustc_hash::FxHashSet;

use crate::catalogue::Catalogue;
use crate::entry::{EntryDescriptor, SavedStatus};
use crate::variant::EntryVariant;

/// Per-type distribution of the entries of a catalogue.
///
/// An inode reachable through several hard links is counted once; every
/// alias still increments [`CatalogueStats::hard_link_entries`].
///
/// # Examples
///
/// ```
/// use catalogue::{Catalogue, CatalogueStats, EntryDescriptor, EntryVariant};
///
/// let catalogue = Catalogue::from_records([
///     EntryDescriptor::new("a", EntryVariant::PlainFile).with_hard_link(7, true),
///     EntryDescriptor::new("b", EntryVariant::PlainFile).with_hard_link(7, false),
/// ])?;
/// let stats = CatalogueStats::from_catalogue(&catalogue);
///
/// assert_eq!(stats.plain_files().to_u64(), Some(1));
/// assert_eq!(stats.hard_link_entries().to_u64(), Some(2));
/// # Ok::<(), catalogue::CatalogueError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct CatalogueStats {
    directories: BigUint,
    plain_files: BigUint,
    symlinks: BigUint,
    named_pipes: BigUint,
    unix_sockets: BigUint,
    char_devices: BigUint,
    block_devices: BigUint,
    doors: BigUint,
    removed: BigUint,
    hard_linked_inodes: BigUint,
    hard_link_entries: BigUint,
    saved: BigUint,
    patched: BigUint,
    inode_only: BigUint,
    total: BigUint,
    seen_inodes: FxHashSet<u64>,
}

impl CatalogueStats {
    /// Empty distribution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Distribution of every entry of `catalogue`.
    #[must_use]
    pub fn from_catalogue(catalogue: &Catalogue) -> Self {
        let mut stats = Self::new();
        for entry in catalogue.records() {
            stats.add(entry);
        }
        stats
    }

    /// Accounts for one entry. Sentinels are ignored.
    pub fn add(&mut self, entry: &EntryDescriptor) {
        let variant = entry.variant();
        if variant == EntryVariant::EndOfDirectory {
            return;
        }
        if let Some(link) = entry.hard_link() {
            self.hard_link_entries.increment();
            if !self.seen_inodes.insert(link.inode) {
                return;
            }
            self.hard_linked_inodes.increment();
        }
        if variant.is_inode() {
            self.total.increment();
            match entry.saved() {
                SavedStatus::Saved => self.saved.increment(),
                SavedStatus::InodeOnly => self.inode_only.increment(),
                SavedStatus::Delta => self.patched.increment(),
                SavedStatus::Fake => {}
            }
        }
        let counter = match variant {
            EntryVariant::Directory => &mut self.directories,
            EntryVariant::PlainFile => &mut self.plain_files,
            EntryVariant::Symlink => &mut self.symlinks,
            EntryVariant::CharDevice => &mut self.char_devices,
            EntryVariant::BlockDevice => &mut self.block_devices,
            EntryVariant::UnixSocket => &mut self.unix_sockets,
            EntryVariant::NamedPipe => &mut self.named_pipes,
            EntryVariant::DoorInode => &mut self.doors,
            EntryVariant::RemovedEntry { .. } => &mut self.removed,
            EntryVariant::EndOfDirectory => return,
        };
        counter.increment();
    }

    /// Directories.
    #[must_use]
    pub const fn directories(&self) -> &BigUint {
        &self.directories
    }

    /// Plain files.
    #[must_use]
    pub const fn plain_files(&self) -> &BigUint {
        &self.plain_files
    }

    /// Symbolic links.
    #[must_use]
    pub const fn symlinks(&self) -> &BigUint {
        &self.symlinks
    }

    /// Named pipes.
    #[must_use]
    pub const fn named_pipes(&self) -> &BigUint {
        &self.named_pipes
    }

    /// Unix sockets.
    #[must_use]
    pub const fn unix_sockets(&self) -> &BigUint {
        &self.unix_sockets
    }

    /// Character devices.
    #[must_use]
    pub const fn char_devices(&self) -> &BigUint {
        &self.char_devices
    }

    /// Block devices.
    #[must_use]
    pub const fn block_devices(&self) -> &BigUint {
        &self.block_devices
    }

    /// Doors.
    #[must_use]
    pub const fn doors(&self) -> &BigUint {
        &self.doors
    }

    /// Removed-entry placeholders.
    #[must_use]
    pub const fn removed(&self) -> &BigUint {
        &self.removed
    }

    /// Distinct inodes reached through hard links.
    #[must_use]
    pub const fn hard_linked_inodes(&self) -> &BigUint {
        &self.hard_linked_inodes
    }

    /// Catalogue positions that are hard-link aliases.
    #[must_use]
    pub const fn hard_link_entries(&self) -> &BigUint {
        &self.hard_link_entries
    }

    /// Inodes with fully stored data.
    #[must_use]
    pub const fn saved(&self) -> &BigUint {
        &self.saved
    }

    /// Inodes stored as a delta patch.
    #[must_use]
    pub const fn patched(&self) -> &BigUint {
        &self.patched
    }

    /// Inodes with metadata only.
    #[must_use]
    pub const fn inode_only(&self) -> &BigUint {
        &self.inode_only
    }

    /// Distinct inodes.
    #[must_use]
    pub const fn total(&self) -> &BigUint {
        &self.total
    }

    /// Emits the distribution as a report through `sink`.
    pub fn listing<U: UserInteraction>(&self, mut sink: U) -> io::Result<()> {
        let lines = [
            "CATALOGUE CONTENTS :".to_owned(),
            String::new(),
            format!("total number of inode : {}", self.total),
            format!("fully saved           : {}", self.saved),
            format!("binary delta patch    : {}", self.patched),
            format!("inode metadata only   : {}", self.inode_only),
            "distribution of inode(s)".to_owned(),
            format!(" - directories        : {}", self.directories),
            format!(" - plain files        : {}", self.plain_files),
            format!(" - symbolic links     : {}", self.symlinks),
            format!(" - named pipes        : {}", self.named_pipes),
            format!(" - unix sockets       : {}", self.unix_sockets),
            format!(" - character devices  : {}", self.char_devices),
            format!(" - block devices      : {}", self.block_devices),
            format!(" - Door entries       : {}", self.doors),
            "hard links information".to_owned(),
            format!(
                " - number of inode with hard link           : {}",
                self.hard_linked_inodes
            ),
            format!(
                " - number of reference to hard linked inodes: {}",
                self.hard_link_entries
            ),
            "destroyed entries information".to_owned(),
            format!(
                "   {} file(s) have been recorded as destroyed since backup of reference",
                self.removed
            ),
            String::new(),
        ];
        for line in &lines {
            sink.emit(line)?;
        }
        Ok(())
    }
}
