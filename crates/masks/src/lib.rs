#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `masks` decides which filesystem entries take part in an archive
//! operation. A [`Mask`] is a boolean predicate over one string, normally a
//! bare file name or a full path. Leaves compare names with shell wildcards
//! or regular expressions, compare paths by subtree containment, or consult an
//! explicit path list; [`Mask::Not`], [`Mask::And`] and [`Mask::Or`] combine
//! them.
//!
//! # Design
//!
//! - [`Mask`] is a single enum evaluated by one recursive function. Children
//!   are owned, so a mask has no cross references and is freely cloneable and
//!   shareable between threads.
//! - [`MaskBuilder`] appends children to an `And`/`Or` composite before it is
//!   frozen with [`MaskBuilder::build`].
//! - Glob leaves are compiled with [`globset`], regular expressions with
//!   [`regex`]. Compilation happens once, at construction.
//! - [`Selection`] bundles the name mask and the subtree mask used by an
//!   operation and applies the directory rules described on the type.
//!
//! # Invariants
//!
//! - `And([])` is true and `Or([])` is false.
//! - `And` stops at the first false child and `Or` at the first true child.
//! - Every leaf carries its own case-sensitivity flag. When comparisons ignore
//!   case, folding applies to both the stored text and the candidate.
//! - [`Mask::SubtreeOf`] is bidirectional: `/etc` and `/etc/ssh/x` relate in
//!   both directions, while `/etc` and `/etcetera` never do. [`Mask::ExactPath`]
//!   and [`Mask::UnderDir`] are not bidirectional.
//!
//! # Errors
//!
//! Construction reports [`MaskError`]: malformed globs or regular expressions,
//! unreadable list files, or a relative prefix for list entries. Evaluation
//! never fails.
//!
//! # Examples
//!
//! Keep everything under `/etc` except the SSH and GRUB configuration:
//!
//! ```
//! use masks::Mask;
//!
//! let subtree = Mask::all([
//!     !Mask::subtree_of("/etc/ssh", false),
//!     !Mask::subtree_of("/etc/grub.d", false),
//! ]);
//!
//! assert!(subtree.evaluate("/etc/hosts"));
//! assert!(!subtree.evaluate("/etc/ssh/sshd_config"));
//! assert!(!subtree.evaluate("/ETC/GRUB.D/00_header"));
//! ```
//!
//! # See also
//!
//! - `dar_engine::Operation`, which prunes catalogue walks with a
//!   [`Selection`].

mod builder;
mod debug_mask;
mod error;
mod glob;
mod list;
mod mask;
mod path;
mod path_mask;
mod regex_mask;
mod selection;

pub use builder::MaskBuilder;
pub use error::MaskError;
pub use glob::GlobMask;
pub use list::ListMask;
pub use mask::Mask;
pub use path::basename;
pub use path_mask::PathMask;
pub use regex_mask::RegexMask;
pub use selection::Selection;
