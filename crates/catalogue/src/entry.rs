use infinint::BigUint;

use crate::variant::EntryVariant;

/// How much of an inode's data the archive holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SavedStatus {
    /// Data is stored in full.
    #[default]
    Saved,
    /// Only metadata is stored; data is unchanged since the reference.
    InodeOnly,
    /// Neither data nor metadata is stored; the entry is known by name only.
    Fake,
    /// Data is stored as a binary patch against the reference.
    Delta,
}

/// State of the extended attribute set of an inode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttrStatus {
    /// The inode has no attributes.
    #[default]
    None,
    /// Attributes exist but were unchanged, so only their date is stored.
    Partial,
    /// Attributes are recorded without their content.
    Fake,
    /// Attributes are stored in full.
    Full,
    /// Attributes were removed since the reference.
    Removed,
}

impl AttrStatus {
    /// True unless the set is absent or was removed.
    #[must_use]
    pub const fn is_present(self) -> bool {
        !matches!(self, Self::None | Self::Removed)
    }
}

/// Extended and filesystem-specific attributes of an inode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttrInfo {
    /// Storage state of the set.
    pub status: AttrStatus,
    /// Number of attributes in the set.
    pub count: u64,
    /// Bytes used by names and values.
    pub space: BigUint,
    /// Inode change time (seconds since the epoch) when the set was read.
    pub last_change: u64,
}

impl AttrInfo {
    /// Fully stored attribute set.
    #[must_use]
    pub fn full(count: u64, space: impl Into<BigUint>, last_change: u64) -> Self {
        Self {
            status: AttrStatus::Full,
            count,
            space: space.into(),
            last_change,
        }
    }
}

/// Hard-link identity shared by every catalogue position naming one inode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HardLinkInfo {
    /// Identifier shared by all aliases of the inode.
    pub inode: u64,
    /// True for the first alias met in catalogue order, the one that
    /// carries the data.
    pub first: bool,
}

/// Major and minor numbers of a device node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceId {
    /// Major number.
    pub major: u32,
    /// Minor number.
    pub minor: u32,
}

/// One classified catalogue record with its metadata.
///
/// Descriptors are plain values. The setters follow the builder pattern so
/// tests and drivers can spell out only the fields they care about.
///
/// # Examples
///
/// ```
/// use catalogue::{EntryDescriptor, EntryVariant};
///
/// let entry = EntryDescriptor::new("hosts", EntryVariant::PlainFile)
///     .with_perm(0o644)
///     .with_owner(0, 0)
///     .with_mtime(1_700_000_000)
///     .with_size(158u32);
///
/// assert_eq!(entry.name(), "hosts");
/// assert!(entry.variant().is_inode());
/// assert_eq!(entry.size().to_u64(), Some(158));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryDescriptor {
    name: String,
    variant: EntryVariant,
    perm: u32,
    uid: u32,
    gid: u32,
    mtime: u64,
    size: BigUint,
    saved: SavedStatus,
    dirty: bool,
    sparse: bool,
    delta_signature: bool,
    attrs: AttrInfo,
    hard_link: Option<HardLinkInfo>,
    link_target: Option<String>,
    device: Option<DeviceId>,
}

impl EntryDescriptor {
    /// Entry with the given name and variant and every other field zeroed.
    #[must_use]
    pub fn new(name: impl Into<String>, variant: EntryVariant) -> Self {
        Self {
            name: name.into(),
            variant,
            perm: 0,
            uid: 0,
            gid: 0,
            mtime: 0,
            size: BigUint::zero(),
            saved: SavedStatus::Saved,
            dirty: false,
            sparse: false,
            delta_signature: false,
            attrs: AttrInfo::default(),
            hard_link: None,
            link_target: None,
            device: None,
        }
    }

    /// Sentinel closing a directory.
    #[must_use]
    pub fn end_of_directory() -> Self {
        Self::new(String::new(), EntryVariant::EndOfDirectory)
    }

    /// Sets the permission bits (`0o7777` mask applied).
    #[must_use]
    pub const fn with_perm(mut self, perm: u32) -> Self {
        self.perm = perm & 0o7777;
        self
    }

    /// Sets the owning user and group identifiers.
    #[must_use]
    pub const fn with_owner(mut self, uid: u32, gid: u32) -> Self {
        self.uid = uid;
        self.gid = gid;
        self
    }

    /// Sets the last modification time, in seconds since the epoch.
    #[must_use]
    pub const fn with_mtime(mut self, mtime: u64) -> Self {
        self.mtime = mtime;
        self
    }

    /// Sets the data size in bytes.
    #[must_use]
    pub fn with_size(mut self, size: impl Into<BigUint>) -> Self {
        self.size = size.into();
        self
    }

    /// Sets the data storage state.
    #[must_use]
    pub const fn with_saved(mut self, saved: SavedStatus) -> Self {
        self.saved = saved;
        self
    }

    /// Marks the data as changed while it was being read.
    #[must_use]
    pub const fn with_dirty(mut self, dirty: bool) -> Self {
        self.dirty = dirty;
        self
    }

    /// Marks the data as having been scanned for holes.
    #[must_use]
    pub const fn with_sparse(mut self, sparse: bool) -> Self {
        self.sparse = sparse;
        self
    }

    /// Marks a binary-delta signature as available for the data.
    #[must_use]
    pub const fn with_delta_signature(mut self, available: bool) -> Self {
        self.delta_signature = available;
        self
    }

    /// Sets the attribute set description.
    #[must_use]
    pub fn with_attrs(mut self, attrs: AttrInfo) -> Self {
        self.attrs = attrs;
        self
    }

    /// Declares the entry an alias of hard-linked inode `inode`.
    #[must_use]
    pub const fn with_hard_link(mut self, inode: u64, first: bool) -> Self {
        self.hard_link = Some(HardLinkInfo { inode, first });
        self
    }

    /// Sets the symlink target.
    #[must_use]
    pub fn with_link_target(mut self, target: impl Into<String>) -> Self {
        self.link_target = Some(target.into());
        self
    }

    /// Sets device numbers.
    #[must_use]
    pub const fn with_device(mut self, major: u32, minor: u32) -> Self {
        self.device = Some(DeviceId { major, minor });
        self
    }

    /// Display name, the last path component.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Classification.
    #[must_use]
    pub const fn variant(&self) -> EntryVariant {
        self.variant
    }

    /// Permission bits.
    #[must_use]
    pub const fn perm(&self) -> u32 {
        self.perm
    }

    /// Owning user identifier.
    #[must_use]
    pub const fn uid(&self) -> u32 {
        self.uid
    }

    /// Owning group identifier.
    #[must_use]
    pub const fn gid(&self) -> u32 {
        self.gid
    }

    /// Last modification time in seconds since the epoch.
    #[must_use]
    pub const fn mtime(&self) -> u64 {
        self.mtime
    }

    /// Data size in bytes.
    #[must_use]
    pub const fn size(&self) -> &BigUint {
        &self.size
    }

    /// Data storage state.
    #[must_use]
    pub const fn saved(&self) -> SavedStatus {
        self.saved
    }

    /// Whether the data changed while being read.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether the data was scanned for holes.
    #[must_use]
    pub const fn is_sparse(&self) -> bool {
        self.sparse
    }

    /// Whether a delta signature is available.
    #[must_use]
    pub const fn has_delta_signature(&self) -> bool {
        self.delta_signature
    }

    /// Attribute set description.
    #[must_use]
    pub const fn attrs(&self) -> &AttrInfo {
        &self.attrs
    }

    /// Hard-link identity, when the entry is one alias of a shared inode.
    #[must_use]
    pub const fn hard_link(&self) -> Option<HardLinkInfo> {
        self.hard_link
    }

    /// Shorthand for `hard_link().is_some()`.
    #[must_use]
    pub const fn is_hard_linked(&self) -> bool {
        self.hard_link.is_some()
    }

    /// Symlink target.
    #[must_use]
    pub fn link_target(&self) -> Option<&str> {
        self.link_target.as_deref()
    }

    /// Device numbers.
    #[must_use]
    pub const fn device(&self) -> Option<DeviceId> {
        self.device
    }

    /// True for plain files and doors, the variants that carry data bytes.
    #[must_use]
    pub const fn has_file_data(&self) -> bool {
        matches!(
            self.variant,
            EntryVariant::PlainFile | EntryVariant::DoorInode
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::TypeTag;

    #[test]
    fn new_entry_is_zeroed() {
        let entry = EntryDescriptor::new("a", EntryVariant::PlainFile);
        assert_eq!(entry.perm(), 0);
        assert_eq!(entry.mtime(), 0);
        assert!(entry.size().is_zero());
        assert_eq!(entry.saved(), SavedStatus::Saved);
        assert_eq!(entry.attrs().status, AttrStatus::None);
        assert!(!entry.is_hard_linked());
    }

    #[test]
    fn perm_is_masked() {
        let entry = EntryDescriptor::new("a", EntryVariant::Directory).with_perm(0o40755);
        assert_eq!(entry.perm(), 0o755);
    }

    #[test]
    fn hard_link_identity() {
        let entry = EntryDescriptor::new("a", EntryVariant::PlainFile).with_hard_link(42, true);
        assert_eq!(
            entry.hard_link(),
            Some(HardLinkInfo {
                inode: 42,
                first: true
            })
        );
    }

    #[test]
    fn attr_presence() {
        assert!(!AttrStatus::None.is_present());
        assert!(!AttrStatus::Removed.is_present());
        assert!(AttrStatus::Partial.is_present());
        assert!(AttrStatus::Full.is_present());
    }

    #[test]
    fn file_data_variants() {
        assert!(EntryDescriptor::new("f", EntryVariant::PlainFile).has_file_data());
        assert!(EntryDescriptor::new("d", EntryVariant::DoorInode).has_file_data());
        assert!(!EntryDescriptor::new("l", EntryVariant::Symlink).has_file_data());
        let removed = EntryVariant::RemovedEntry {
            original: TypeTag::PLAIN_FILE,
        };
        assert!(!EntryDescriptor::new("x", removed).has_file_data());
    }

    #[test]
    fn end_of_directory_sentinel() {
        let eod = EntryDescriptor::end_of_directory();
        assert_eq!(eod.variant(), EntryVariant::EndOfDirectory);
        assert!(eod.name().is_empty());
    }
}
