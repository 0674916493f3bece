use crate::debug_catalogue::trace_unknown_tag;
use crate::tag::{RawEntry, TypeTag};

/// Classification of one catalogue record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntryVariant {
    /// Directory; its children follow it up to the matching
    /// [`EntryVariant::EndOfDirectory`].
    Directory,
    /// Plain file.
    PlainFile,
    /// Symbolic link.
    Symlink,
    /// Character device.
    CharDevice,
    /// Block device.
    BlockDevice,
    /// Unix domain socket.
    UnixSocket,
    /// Named pipe.
    NamedPipe,
    /// Solaris door.
    DoorInode,
    /// Placeholder for an entry that no longer exists, or whose kind is not
    /// supported here.
    RemovedEntry {
        /// Signature of the entry that was removed or not understood.
        original: TypeTag,
    },
    /// Sentinel closing the current directory.
    EndOfDirectory,
}

impl EntryVariant {
    /// Signature byte of the variant. A removed entry reports
    /// [`TypeTag::REMOVED`], not its original kind.
    #[must_use]
    pub const fn tag(self) -> TypeTag {
        match self {
            Self::Directory => TypeTag::DIRECTORY,
            Self::PlainFile => TypeTag::PLAIN_FILE,
            Self::Symlink => TypeTag::SYMLINK,
            Self::CharDevice => TypeTag::CHAR_DEVICE,
            Self::BlockDevice => TypeTag::BLOCK_DEVICE,
            Self::UnixSocket => TypeTag::UNIX_SOCKET,
            Self::NamedPipe => TypeTag::NAMED_PIPE,
            Self::DoorInode => TypeTag::DOOR,
            Self::RemovedEntry { .. } => TypeTag::REMOVED,
            Self::EndOfDirectory => TypeTag::END_OF_DIRECTORY,
        }
    }

    /// True for every variant that stands for a filesystem object.
    #[must_use]
    pub const fn is_inode(self) -> bool {
        !matches!(self, Self::RemovedEntry { .. } | Self::EndOfDirectory)
    }

    /// True for [`EntryVariant::Directory`].
    #[must_use]
    pub const fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }

    /// Character used in the first column of a listing line.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Directory => 'd',
            Self::PlainFile => 'f',
            Self::Symlink => 'l',
            Self::CharDevice => 'c',
            Self::BlockDevice => 'b',
            Self::UnixSocket => 's',
            Self::NamedPipe => 'p',
            Self::DoorInode => 'D',
            Self::RemovedEntry { .. } => 'x',
            Self::EndOfDirectory => 'z',
        }
    }

    /// Variant for a known inode signature, `None` for anything else.
    #[must_use]
    pub const fn from_inode_tag(tag: TypeTag) -> Option<Self> {
        Some(match tag.byte() {
            b'd' => Self::Directory,
            b'f' => Self::PlainFile,
            b'l' => Self::Symlink,
            b'c' => Self::CharDevice,
            b'b' => Self::BlockDevice,
            b's' => Self::UnixSocket,
            b'p' => Self::NamedPipe,
            b'D' => Self::DoorInode,
            _ => return None,
        })
    }
}

/// Maps a raw record to exactly one [`EntryVariant`].
///
/// Unrecognised signatures never fail: they become
/// [`EntryVariant::RemovedEntry`] carrying the signature that was seen.
///
/// # Examples
///
/// ```
/// use catalogue::{EntryVariant, RawEntry, TypeTag, classify};
///
/// assert_eq!(classify(RawEntry::new(TypeTag::PLAIN_FILE)), EntryVariant::PlainFile);
/// assert_eq!(
///     classify(RawEntry::new(TypeTag::new(b'?'))),
///     EntryVariant::RemovedEntry { original: TypeTag::new(b'?') },
/// );
/// ```
#[must_use]
pub fn classify(raw: RawEntry) -> EntryVariant {
    if let Some(variant) = EntryVariant::from_inode_tag(raw.tag) {
        return variant;
    }
    match raw.tag {
        TypeTag::END_OF_DIRECTORY => EntryVariant::EndOfDirectory,
        TypeTag::REMOVED => EntryVariant::RemovedEntry {
            original: raw.removed_kind.unwrap_or(TypeTag::REMOVED),
        },
        unknown => {
            trace_unknown_tag(unknown.byte());
            EntryVariant::RemovedEntry { original: unknown }
        }
    }
}
