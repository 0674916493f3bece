#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `catalogue` models the table of contents of a disk archive: which entries
//! it holds, what kind each one is, and how to print them. Raw records are
//! mapped to an [`EntryVariant`] by [`classify`], described by an
//! [`EntryDescriptor`], and arranged in a [`Catalogue`] tree that can be
//! walked, listed line by line, or summarised with [`CatalogueStats`].
//!
//! # Design
//!
//! - A [`Catalogue`] is a flat vector in pre-order. Directory contents are
//!   closed by an [`EntryVariant::EndOfDirectory`] sentinel, so walking and
//!   listing need no recursion, only a stack of parent paths.
//! - [`Catalogue::walk`] yields `(path, entry)` pairs and can skip the
//!   subtree of the directory it just yielded.
//! - [`Listing`] is a lazy iterator of formatted lines; [`Catalogue::list_to`]
//!   pushes them through a [`logging::UserInteraction`] sink.
//! - Owner names come from an [`OwnerResolver`]: [`NumericOwners`] or the
//!   system account database through [`SystemOwners`].
//!
//! # Invariants
//!
//! - Classification is total: unknown signatures become
//!   [`EntryVariant::RemovedEntry`] carrying the signature that was seen.
//! - Every catalogue is balanced; [`CatalogueBuilder::build`] closes open
//!   directories.
//! - [`CatalogueStats`] counts an inode shared by hard links once.
//!
//! # Errors
//!
//! [`CatalogueError`] reports malformed record sequences given to
//! [`CatalogueBuilder`]. Listing sinks report [`std::io::Error`].
//!
//! # Examples
//!
//! ```
//! use catalogue::{Catalogue, EntryDescriptor, EntryVariant, ListingOptions};
//!
//! let catalogue = Catalogue::from_records([
//!     EntryDescriptor::new("etc", EntryVariant::Directory).with_perm(0o755),
//!     EntryDescriptor::new("hosts", EntryVariant::PlainFile).with_perm(0o644),
//! ])?;
//!
//! let lines: Vec<String> = catalogue.listing(ListingOptions::new()).collect();
//! assert_eq!(lines[0], " drwxr-xr-x etc 0/0 1970/01/01 00:00:00");
//! assert_eq!(lines[1], "    frw-r--r-- hosts 0/0 1970/01/01 00:00:00");
//! # Ok::<(), catalogue::CatalogueError>(())
//! ```
//!
//! # See also
//!
//! - `policy`, whose criteria inspect [`EntryDescriptor`] pairs.
//! - `statistics`, which counts classification outcomes.

mod catalogue;
mod debug_catalogue;
mod entry;
mod error;
mod listing;
mod owner;
mod stats;
mod tag;
mod variant;

pub use catalogue::{Catalogue, CatalogueBuilder, ROOT_PATH, Walk, append_path};
pub use entry::{AttrInfo, AttrStatus, DeviceId, EntryDescriptor, HardLinkInfo, SavedStatus};
pub use error::CatalogueError;
pub use listing::{DEFAULT_INDENT_WIDTH, Listing, ListingOptions, format_mtime, permission_string};
pub use owner::{NumericOwners, OwnerResolver, SystemOwners};
pub use stats::CatalogueStats;
pub use tag::{RawEntry, TypeTag};
pub use variant::{EntryVariant, classify};
