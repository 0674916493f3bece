#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `dar-engine` is the decision core of a disk archiver. For every entry an
//! operation meets it answers three questions: does the entry take part
//! ([`masks`]), which copy wins when the entry exists on both sides
//! ([`policy`]), and how is the outcome counted ([`statistics`]). Sizes and
//! counts are arbitrary-precision integers ([`infinint`]) and entries are
//! described by [`catalogue`].
//!
//! # Design
//!
//! - Each concern lives in its own crate, re-exported here.
//! - [`OperationConfig`] is the serde-loadable description of one
//!   operation. [`OperationConfig::build`] compiles it into an
//!   [`Operation`], the only step that can fail.
//! - [`Operation::walk`] prunes rejected directories with their whole
//!   subtree, [`Operation::resolve_conflict`] applies the overwriting policy
//!   and counts the outcome.
//!
//! # Invariants
//!
//! - Evaluation never fails once an operation is built.
//! - Descendants of a pruned directory are never visited.
//! - An undefined policy axis resolves to preserve.
//!
//! # Errors
//!
//! [`EngineError`] gathers mask, policy, configuration and I/O failures.
//!
//! # Examples
//!
//! ```
//! use dar_engine::catalogue::{Catalogue, EntryDescriptor, EntryVariant};
//! use dar_engine::statistics::Statistics;
//! use dar_engine::OperationConfig;
//!
//! let operation = OperationConfig::from_json_str(
//!     r#"{ "exclude_subtrees": ["/etc/ssh"], "overwrite_policy": "{~R}[Oo]Pp" }"#,
//! )?
//! .build()?;
//!
//! let catalogue = Catalogue::from_records([
//!     EntryDescriptor::new("etc", EntryVariant::Directory),
//!     EntryDescriptor::new("ssh", EntryVariant::Directory),
//!     EntryDescriptor::new("ssh_config", EntryVariant::PlainFile),
//!     EntryDescriptor::end_of_directory(),
//!     EntryDescriptor::new("hosts", EntryVariant::PlainFile),
//! ])?;
//!
//! let mut stats = Statistics::new();
//! operation.account(&catalogue, &mut stats);
//! assert_eq!(stats.treated_str(), "2");
//! assert_eq!(stats.ignored_str(), "1");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # See also
//!
//! - [`logging`] for verbosity and tracing set-up.

mod config;
mod debug_operation;
mod error;
mod operation;

pub use catalogue;
pub use infinint;
pub use logging;
pub use masks;
pub use policy;
pub use statistics;

pub use config::OperationConfig;
pub use error::EngineError;
pub use operation::{Operation, SelectedEntries};
