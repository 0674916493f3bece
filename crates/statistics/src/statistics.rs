use std::io;

use catalogue::{EntryDescriptor, EntryVariant};
use infinint::{BigUint, Deci, InfinintError};
use logging::UserInteraction;

use crate::counter::Counter;
use crate::debug_stats::{trace_classification, trace_underflow};

/// First line of [`Statistics::dump`].
pub const DUMP_HEADER: &str = "--------- Statistics DUMP ----------";
/// Last line of [`Statistics::dump`].
pub const DUMP_FOOTER: &str = "------------------------------------";

/// Counters of one archive operation.
///
/// Every counter is an arbitrary-precision [`BigUint`], so no amount of
/// entries or bytes can wrap. Increments and additions cannot fail;
/// decrements and subtractions refuse to go below zero and leave the counter
/// untouched when they do.
///
/// # Examples
///
/// ```
/// use catalogue::EntryVariant;
/// use infinint::BigUint;
/// use statistics::{Counter, Statistics};
///
/// let mut stats = Statistics::new();
/// stats.record_classification(EntryVariant::PlainFile);
/// stats.incr_skipped();
/// stats.add_to_byte_amount(&BigUint::from(4096_u64));
///
/// assert_eq!(stats.treated_str(), "1");
/// assert_eq!(stats.total(), BigUint::from(2_u64));
/// assert!(stats.decr_deleted().is_err());
/// assert_eq!(stats.get(Counter::ByteAmount), &BigUint::from(4096_u64));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    treated: BigUint,
    hard_links: BigUint,
    skipped: BigUint,
    inode_only: BigUint,
    ignored: BigUint,
    tooold: BigUint,
    errored: BigUint,
    deleted: BigUint,
    ea_treated: BigUint,
    byte_amount: BigUint,
    fsa_treated: BigUint,
}

impl Statistics {
    /// All counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            treated: BigUint::zero(),
            hard_links: BigUint::zero(),
            skipped: BigUint::zero(),
            inode_only: BigUint::zero(),
            ignored: BigUint::zero(),
            tooold: BigUint::zero(),
            errored: BigUint::zero(),
            deleted: BigUint::zero(),
            ea_treated: BigUint::zero(),
            byte_amount: BigUint::zero(),
            fsa_treated: BigUint::zero(),
        }
    }

    /// Current value of `counter`.
    #[must_use]
    pub const fn get(&self, counter: Counter) -> &BigUint {
        match counter {
            Counter::Treated => &self.treated,
            Counter::HardLinks => &self.hard_links,
            Counter::Skipped => &self.skipped,
            Counter::InodeOnly => &self.inode_only,
            Counter::Ignored => &self.ignored,
            Counter::TooOld => &self.tooold,
            Counter::Errored => &self.errored,
            Counter::Deleted => &self.deleted,
            Counter::EaTreated => &self.ea_treated,
            Counter::ByteAmount => &self.byte_amount,
            Counter::FsaTreated => &self.fsa_treated,
        }
    }

    fn slot(&mut self, counter: Counter) -> &mut BigUint {
        match counter {
            Counter::Treated => &mut self.treated,
            Counter::HardLinks => &mut self.hard_links,
            Counter::Skipped => &mut self.skipped,
            Counter::InodeOnly => &mut self.inode_only,
            Counter::Ignored => &mut self.ignored,
            Counter::TooOld => &mut self.tooold,
            Counter::Errored => &mut self.errored,
            Counter::Deleted => &mut self.deleted,
            Counter::EaTreated => &mut self.ea_treated,
            Counter::ByteAmount => &mut self.byte_amount,
            Counter::FsaTreated => &mut self.fsa_treated,
        }
    }

    /// Decimal text of `counter`.
    #[must_use]
    pub fn get_str(&self, counter: Counter) -> String {
        Deci::from(self.get(counter)).human()
    }

    /// Adds one to `counter`.
    pub fn increment(&mut self, counter: Counter) {
        self.slot(counter).increment();
    }

    /// Adds `value` to `counter`.
    pub fn add_to(&mut self, counter: Counter, value: &BigUint) {
        *self.slot(counter) += value;
    }

    /// Removes one from `counter`.
    ///
    /// # Errors
    ///
    /// [`InfinintError::Underflow`] when the counter is zero; the counter is
    /// left unchanged.
    pub fn decrement(&mut self, counter: Counter) -> Result<(), InfinintError> {
        let slot = self.slot(counter);
        if let Err(error) = slot.checked_decrement() {
            trace_underflow(counter.label(), &slot.to_string());
            return Err(error);
        }
        Ok(())
    }

    /// Subtracts `value` from `counter`.
    ///
    /// # Errors
    ///
    /// [`InfinintError::Underflow`] when `value` exceeds the counter; the
    /// counter is left unchanged.
    pub fn sub_from(&mut self, counter: Counter, value: &BigUint) -> Result<(), InfinintError> {
        let slot = self.slot(counter);
        if let Err(error) = slot.checked_sub_assign(value) {
            trace_underflow(counter.label(), &slot.to_string());
            return Err(error);
        }
        Ok(())
    }

    /// Overwrites `counter`.
    pub fn set(&mut self, counter: Counter, value: BigUint) {
        *self.slot(counter) = value;
    }

    /// Resets every counter to zero.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Sum of the treated, skipped, inode-only, ignored, too-old, errored and
    /// deleted counters.
    #[must_use]
    pub fn total(&self) -> BigUint {
        Counter::ALL
            .into_iter()
            .filter(|counter| counter.counts_toward_total())
            .map(|counter| self.get(counter))
            .sum()
    }

    /// Counts one classified entry and returns the counter it landed in.
    ///
    /// Inodes count as treated and removed-entry placeholders as deleted.
    /// End-of-directory sentinels are not entries and count nowhere.
    pub fn record_classification(&mut self, variant: EntryVariant) -> Option<Counter> {
        let counter = match variant {
            EntryVariant::EndOfDirectory => None,
            EntryVariant::RemovedEntry { .. } => Some(Counter::Deleted),
            _ => Some(Counter::Treated),
        };
        if let Some(counter) = counter {
            self.increment(counter);
        }
        trace_classification(variant.glyph(), counter.map(Counter::label));
        counter
    }

    /// Counts one catalogue entry: its classification, plus
    /// [`Counter::HardLinks`] for every alias of an inode after the first.
    pub fn record_entry(&mut self, entry: &EntryDescriptor) -> Option<Counter> {
        if entry.hard_link().is_some_and(|link| !link.first) {
            self.increment(Counter::HardLinks);
        }
        self.record_classification(entry.variant())
    }

    /// Writes every counter, one `label = value` line each, between
    /// [`DUMP_HEADER`] and [`DUMP_FOOTER`].
    pub fn dump<U: UserInteraction>(&self, mut sink: U) -> io::Result<()> {
        sink.emit(DUMP_HEADER)?;
        for counter in Counter::ALL {
            sink.emit(&format!("{} = {}", counter.label(), self.get_str(counter)))?;
        }
        sink.emit(DUMP_FOOTER)
    }
}

macro_rules! named_counter {
    ($counter:ident, $get:ident, $as_str:ident, $incr:ident, $decr:ident) => {
        #[doc = concat!("Value of [`Counter::", stringify!($counter), "`].")]
        #[must_use]
        pub const fn $get(&self) -> &BigUint {
            self.get(Counter::$counter)
        }

        #[doc = concat!("Decimal text of [`Counter::", stringify!($counter), "`].")]
        #[must_use]
        pub fn $as_str(&self) -> String {
            self.get_str(Counter::$counter)
        }

        #[doc = concat!("Adds one to [`Counter::", stringify!($counter), "`].")]
        pub fn $incr(&mut self) {
            self.increment(Counter::$counter);
        }

        #[doc = concat!("Removes one from [`Counter::", stringify!($counter), "`].")]
        pub fn $decr(&mut self) -> Result<(), InfinintError> {
            self.decrement(Counter::$counter)
        }
    };
}

impl Statistics {
    named_counter!(Treated, treated, treated_str, incr_treated, decr_treated);
    named_counter!(HardLinks, hard_links, hard_links_str, incr_hard_links, decr_hard_links);
    named_counter!(Skipped, skipped, skipped_str, incr_skipped, decr_skipped);
    named_counter!(InodeOnly, inode_only, inode_only_str, incr_inode_only, decr_inode_only);
    named_counter!(Ignored, ignored, ignored_str, incr_ignored, decr_ignored);
    named_counter!(TooOld, tooold, tooold_str, incr_tooold, decr_tooold);
    named_counter!(Errored, errored, errored_str, incr_errored, decr_errored);
    named_counter!(Deleted, deleted, deleted_str, incr_deleted, decr_deleted);
    named_counter!(EaTreated, ea_treated, ea_treated_str, incr_ea_treated, decr_ea_treated);
    named_counter!(FsaTreated, fsa_treated, fsa_treated_str, incr_fsa_treated, decr_fsa_treated);

    /// Value of [`Counter::ByteAmount`].
    #[must_use]
    pub const fn byte_amount(&self) -> &BigUint {
        &self.byte_amount
    }

    /// Decimal text of [`Counter::ByteAmount`].
    #[must_use]
    pub fn byte_amount_str(&self) -> String {
        self.get_str(Counter::ByteAmount)
    }

    /// Overwrites the wasted byte amount.
    pub fn set_byte_amount(&mut self, value: BigUint) {
        self.byte_amount = value;
    }

    /// Adds to the wasted byte amount.
    pub fn add_to_byte_amount(&mut self, value: &BigUint) {
        self.add_to(Counter::ByteAmount, value);
    }

    /// Adds a batch of ignored entries.
    pub fn add_to_ignored(&mut self, value: &BigUint) {
        self.add_to(Counter::Ignored, value);
    }

    /// Adds a batch of failed entries.
    pub fn add_to_errored(&mut self, value: &BigUint) {
        self.add_to(Counter::Errored, value);
    }

    /// Adds a batch of deleted entries.
    pub fn add_to_deleted(&mut self, value: &BigUint) {
        self.add_to(Counter::Deleted, value);
    }

    /// Withdraws treated entries, e.g. when a step is rolled back.
    pub fn sub_from_treated(&mut self, value: &BigUint) -> Result<(), InfinintError> {
        self.sub_from(Counter::Treated, value)
    }

    /// Withdraws hard-link aliases.
    pub fn sub_from_hard_links(&mut self, value: &BigUint) -> Result<(), InfinintError> {
        self.sub_from(Counter::HardLinks, value)
    }

    /// Withdraws entries whose extended attributes were counted.
    pub fn sub_from_ea_treated(&mut self, value: &BigUint) -> Result<(), InfinintError> {
        self.sub_from(Counter::EaTreated, value)
    }

    /// Withdraws entries whose filesystem attributes were counted.
    pub fn sub_from_fsa_treated(&mut self, value: &BigUint) -> Result<(), InfinintError> {
        self.sub_from(Counter::FsaTreated, value)
    }
}
