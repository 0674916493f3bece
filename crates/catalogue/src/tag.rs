use std::fmt;

/// One-byte type signature of an archived entry.
///
/// The known signatures are the archive format's: `d` directory, `f` plain
/// file, `l` symlink, `c`/`b` character and block devices, `s` socket, `p`
/// named pipe, `D` door, `x` removed entry and `z` end of directory. Any other
/// byte is carried as-is so that classification can report it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TypeTag(u8);

impl TypeTag {
    /// Directory.
    pub const DIRECTORY: Self = Self(b'd');
    /// Plain file.
    pub const PLAIN_FILE: Self = Self(b'f');
    /// Symbolic link.
    pub const SYMLINK: Self = Self(b'l');
    /// Character device.
    pub const CHAR_DEVICE: Self = Self(b'c');
    /// Block device.
    pub const BLOCK_DEVICE: Self = Self(b'b');
    /// Unix domain socket.
    pub const UNIX_SOCKET: Self = Self(b's');
    /// Named pipe.
    pub const NAMED_PIPE: Self = Self(b'p');
    /// Solaris door.
    pub const DOOR: Self = Self(b'D');
    /// Entry recorded as removed since the reference archive.
    pub const REMOVED: Self = Self(b'x');
    /// Closes the current directory.
    pub const END_OF_DIRECTORY: Self = Self(b'z');

    /// Wraps a raw signature byte.
    #[must_use]
    pub const fn new(byte: u8) -> Self {
        Self(byte)
    }

    /// Raw signature byte.
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    /// Reports whether the tag names an inode kind this crate understands.
    #[must_use]
    pub const fn is_known_inode(self) -> bool {
        matches!(self.0, b'd' | b'f' | b'l' | b'c' | b'b' | b's' | b'p' | b'D')
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_ascii_graphic() {
            write!(f, "{}", char::from(self.0))
        } else {
            write!(f, "\\x{:02x}", self.0)
        }
    }
}

impl From<u8> for TypeTag {
    fn from(byte: u8) -> Self {
        Self(byte)
    }
}

/// Record as read from an archive or produced by a filesystem scan, before
/// classification.
///
/// A removed-entry record (`x`) additionally carries the tag of the entry it
/// replaces in `removed_kind`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawEntry {
    /// Signature of the record.
    pub tag: TypeTag,
    /// For removed entries, the signature the entry had before removal.
    pub removed_kind: Option<TypeTag>,
}

impl RawEntry {
    /// Record with the given signature.
    #[must_use]
    pub const fn new(tag: TypeTag) -> Self {
        Self {
            tag,
            removed_kind: None,
        }
    }

    /// Removed-entry record remembering the removed entry's signature.
    #[must_use]
    pub const fn removed(original: TypeTag) -> Self {
        Self {
            tag: TypeTag::REMOVED,
            removed_kind: Some(original),
        }
    }
}
