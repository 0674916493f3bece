use catalogue::{EntryVariant, RawEntry, TypeTag, classify};
use infinint::BigUint;
use proptest::prelude::*;

use super::*;

#[test]
fn plain_directory_and_unknown_give_three() {
    let mut stats = Statistics::new();
    let landed: Vec<Option<Counter>> = [
        RawEntry::new(TypeTag::PLAIN_FILE),
        RawEntry::new(TypeTag::DIRECTORY),
        RawEntry::new(TypeTag::new(0x7f)),
    ]
    .into_iter()
    .map(|raw| stats.record_classification(classify(raw)))
    .collect();

    assert_eq!(
        landed,
        [Some(Counter::Treated), Some(Counter::Treated), Some(Counter::Deleted)]
    );
    assert_eq!(stats.treated(), &BigUint::from(2_u32));
    assert_eq!(stats.deleted(), &BigUint::from(1_u32));
    assert_eq!(stats.total(), BigUint::from(3_u32));
}

#[test]
fn counters_grow_past_machine_words() {
    let mut stats = Statistics::new();
    let huge: BigUint = "340282366920938463463374607431768211455".parse().expect("u128::MAX");
    stats.add_to_byte_amount(&huge);
    stats.add_to_byte_amount(&BigUint::one());
    assert_eq!(stats.byte_amount_str(), "340282366920938463463374607431768211456");
}

#[test]
fn observer_reads_consistent_snapshots() {
    use std::thread;

    let shared = SharedStatistics::new();
    let reader = shared.reader();

    let driver = {
        let shared = shared.clone();
        thread::spawn(move || {
            for _ in 0..1_000 {
                shared.update(|stats| {
                    stats.incr_treated();
                    stats.incr_ea_treated();
                });
            }
        })
    };

    let observer = thread::spawn(move || {
        let mut last = BigUint::zero();
        for _ in 0..200 {
            let snapshot = reader.snapshot();
            assert_eq!(snapshot.treated(), snapshot.ea_treated());
            assert!(snapshot.treated() >= &last);
            last = snapshot.treated().clone();
        }
    });

    driver.join().expect("driver");
    observer.join().expect("observer");
    assert_eq!(shared.snapshot().treated_str(), "1000");
}

#[cfg(feature = "serde")]
#[test]
fn snapshot_serializes_counters_as_decimal() {
    let mut stats = Statistics::new();
    stats.incr_treated();
    let json = serde_json::to_value(&stats).expect("serialize");
    assert_eq!(json["treated"], "1");
    let back: Statistics = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, stats);
}

fn arb_counter() -> impl Strategy<Value = Counter> {
    proptest::sample::select(Counter::ALL.to_vec())
}

proptest! {
    #[test]
    fn total_matches_category_sum(ops in prop::collection::vec((arb_counter(), 0_u32..50), 0..40)) {
        let mut stats = Statistics::new();
        let mut expected = 0_u64;
        for (counter, amount) in ops {
            stats.add_to(counter, &BigUint::from(amount));
            if counter.counts_toward_total() {
                expected += u64::from(amount);
            }
        }
        prop_assert_eq!(stats.total(), BigUint::from(expected));
    }

    #[test]
    fn increments_then_decrements_return_to_zero(counter in arb_counter(), times in 0_usize..64) {
        let mut stats = Statistics::new();
        for _ in 0..times {
            stats.increment(counter);
        }
        for _ in 0..times {
            prop_assert!(stats.decrement(counter).is_ok());
        }
        prop_assert!(stats.get(counter).is_zero());
        prop_assert!(stats.decrement(counter).is_err());
    }
}

#[test]
fn classify_every_known_tag() {
    let mut stats = Statistics::new();
    for tag in [
        TypeTag::DIRECTORY,
        TypeTag::PLAIN_FILE,
        TypeTag::SYMLINK,
        TypeTag::CHAR_DEVICE,
        TypeTag::BLOCK_DEVICE,
        TypeTag::UNIX_SOCKET,
        TypeTag::NAMED_PIPE,
        TypeTag::DOOR,
    ] {
        stats.record_classification(classify(RawEntry::new(tag)));
    }
    stats.record_classification(classify(RawEntry::removed(TypeTag::SYMLINK)));
    stats.record_classification(EntryVariant::EndOfDirectory);
    assert_eq!(stats.treated_str(), "8");
    assert_eq!(stats.deleted_str(), "1");
}
