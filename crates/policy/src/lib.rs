#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `policy` decides what happens when an entry being added meets an entry
//! already in place. A [`Criterion`] answers a yes/no question about the
//! pair; an [`Action`] turns criteria into an [`Outcome`] that settles the
//! data axis ([`DataAction`]) and the attribute axis ([`AttrAction`])
//! independently. Policies can be assembled in code or parsed from the
//! compact text form with [`parse_policy`].
//!
//! # Design
//!
//! - Criteria and actions are plain enums evaluated by one recursive
//!   function each. `And` and `Or` short-circuit.
//! - [`Criterion::Invert`] swaps the two sides for its nested criterion only.
//! - An [`Action::Chain`] fills each axis from the first member that defines
//!   it and stops once both axes are defined.
//! - An axis may stay undefined after evaluation. [`Action::resolve`] fills
//!   it with [`Resolution::DEFAULT`]; [`Action::resolve_with`] takes caller
//!   defaults.
//! - Date comparisons honour an hourshift: two timestamps that differ by a
//!   whole number of hours, at most `hourshift`, compare equal
//!   ([`equal_with_hourshift`]).
//!
//! # Invariants
//!
//! - Evaluation never fails and has no side effect besides tracing.
//! - An empty chain yields [`Outcome::UNDEFINED`].
//! - An empty `And` is true and an empty `Or` is false.
//!
//! # Errors
//!
//! Only parsing fails. [`PolicyParseError`] carries the fragment that was
//! rejected.
//!
//! # Examples
//!
//! ```
//! use catalogue::{EntryDescriptor, EntryVariant};
//! use policy::{Action, AttrAction, Criterion, DataAction, Outcome, Resolution};
//!
//! // Keep directories, overwrite everything else; merge attributes.
//! let policy = Action::chain([
//!     Action::conditional(
//!         Criterion::IsDirectory,
//!         Action::Constant(Outcome { data: Some(DataAction::Preserve), attrs: None }),
//!         Action::Constant(Outcome { data: Some(DataAction::Overwrite), attrs: None }),
//!     ),
//!     Action::Constant(Outcome { data: None, attrs: Some(AttrAction::MergeOverwrite) }),
//! ]);
//!
//! let file = EntryDescriptor::new("notes", EntryVariant::PlainFile);
//! assert_eq!(
//!     policy.resolve(&file, &file),
//!     Resolution::new(DataAction::Overwrite, AttrAction::MergeOverwrite),
//! );
//! ```
//!
//! # See also
//!
//! - `catalogue` for [`catalogue::EntryDescriptor`], the input of every
//!   criterion.
//! - `masks` for the name masks used by [`Criterion::NameMatches`].

mod action;
mod criterion;
mod debug_policy;
mod error;
mod parse;
mod policy;

pub use action::{AttrAction, DataAction, Outcome, Resolution};
pub use criterion::{Criterion, equal_with_hourshift};
pub use error::PolicyParseError;
pub use parse::{parse_criterion, parse_date, parse_policy};
pub use policy::{Action, ChainBuilder};

#[cfg(test)]
mod tests;
