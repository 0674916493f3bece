use catalogue::{AttrInfo, AttrStatus, EntryDescriptor, EntryVariant, TypeTag};
use masks::Mask;
use proptest::prelude::*;

use super::*;

fn file(mtime: u64, size: u64) -> EntryDescriptor {
    EntryDescriptor::new("data.bin", EntryVariant::PlainFile)
        .with_mtime(mtime)
        .with_size(size)
}

fn removed() -> EntryDescriptor {
    EntryDescriptor::new("gone", EntryVariant::RemovedEntry {
        original: TypeTag::PLAIN_FILE,
    })
}

#[test]
fn undefined_member_then_constant() {
    let chain = parse_policy("**;OP", 0).expect_err("attribute letters are lower case");
    assert!(matches!(chain, PolicyParseError::UnknownAction { .. }));

    let chain = parse_policy("**;Op", 0).expect("valid");
    assert_eq!(
        chain.resolve(&file(1, 1), &file(2, 2)),
        Resolution::new(DataAction::Overwrite, AttrAction::Preserve)
    );
}

#[test]
fn first_defined_data_wins_attrs_come_later() {
    let chain = parse_policy("R*;Oo;Pm", 0).expect("valid");
    assert_eq!(
        chain.evaluate(&file(1, 1), &file(2, 2)),
        Outcome::new(DataAction::Remove, AttrAction::Overwrite)
    );
}

#[test]
fn undefined_after_exhaustion_uses_default() {
    let chain = parse_policy("{D}[Oo];*s", 0).expect("valid");
    let outcome = chain.evaluate(&file(1, 1), &file(1, 1));
    assert_eq!(outcome.data, None);
    assert_eq!(outcome.attrs, Some(AttrAction::PreserveMarkAlreadySaved));
    assert_eq!(
        chain.resolve(&file(1, 1), &file(1, 1)),
        Resolution::new(DataAction::Preserve, AttrAction::PreserveMarkAlreadySaved)
    );
}

#[test]
fn nested_conditionals_inside_branches() {
    let policy = parse_policy("{I}[{R}[Pp]{B}[Oo]Ss]Rr", 0).expect("valid");

    // Newer in-place data is kept.
    assert_eq!(
        policy.resolve(&file(20, 1), &file(10, 9)),
        Resolution::new(DataAction::Preserve, AttrAction::Preserve)
    );
    // Older but bigger.
    assert_eq!(
        policy.resolve(&file(10, 9), &file(20, 1)),
        Resolution::new(DataAction::Overwrite, AttrAction::Overwrite)
    );
    // Older and smaller.
    assert_eq!(
        policy.resolve(&file(10, 1), &file(20, 9)),
        Resolution::new(
            DataAction::PreserveMarkAlreadySaved,
            AttrAction::PreserveMarkAlreadySaved
        )
    );
    // Not an inode.
    assert_eq!(
        policy.resolve(&removed(), &file(20, 9)),
        Resolution::new(DataAction::Remove, AttrAction::Clear)
    );
}

#[test]
fn chain_inside_a_branch_stays_scoped() {
    let policy = parse_policy("{D}[O*;*o]P*;*p", 0).expect("valid");
    let Action::Chain(members) = &policy else {
        panic!("expected top-level chain");
    };
    assert_eq!(members.len(), 2);

    let dir = EntryDescriptor::new("d", EntryVariant::Directory);
    assert_eq!(
        policy.resolve(&dir, &dir),
        Resolution::new(DataAction::Overwrite, AttrAction::Overwrite)
    );
    assert_eq!(
        policy.resolve(&file(1, 1), &file(1, 1)),
        Resolution::new(DataAction::Preserve, AttrAction::Preserve)
    );
}

#[test]
fn invert_inspects_the_entry_being_added() {
    let dir = EntryDescriptor::new("d", EntryVariant::Directory);
    let criterion = parse_criterion("~D", 0).expect("valid");
    assert!(criterion.evaluate(&file(1, 1), &dir));
    assert!(!criterion.evaluate(&dir, &file(1, 1)));

    // Only the nested criterion sees the swap.
    let mixed = Criterion::all([Criterion::IsPlainFile, Criterion::IsDirectory.inverted()]);
    assert!(mixed.evaluate(&file(1, 1), &dir));
}

#[test]
fn hourshift_absorbs_timezone_moves() {
    let earlier = file(10_000, 1);
    let later = file(10_000 + 3_600, 1);
    assert!(!Criterion::DataMoreRecent { hourshift: 0 }.evaluate(&earlier, &later));
    assert!(Criterion::DataMoreRecent { hourshift: 1 }.evaluate(&earlier, &later));

    let two_hours = file(10_000 + 7_200, 1);
    assert!(!Criterion::DataMoreRecent { hourshift: 1 }.evaluate(&earlier, &two_hours));

    let parsed = parse_policy("{R}[Pp]Oo", 1).expect("valid");
    assert_eq!(
        parsed.resolve(&earlier, &later),
        Resolution::new(DataAction::Preserve, AttrAction::Preserve)
    );
}

#[test]
fn date_threshold_criteria() {
    let policy = parse_policy("{R(1970/01/02)}[Pp]Oo", 0).expect("valid");
    assert_eq!(policy.resolve(&file(86_400, 1), &file(0, 1)).data, DataAction::Preserve);
    assert_eq!(policy.resolve(&file(86_399, 1), &file(0, 1)).data, DataAction::Overwrite);

    let recent_attrs = EntryDescriptor::new("a", EntryVariant::PlainFile)
        .with_attrs(AttrInfo::full(2, 64_u64, 500));
    assert!(parse_criterion("r(500)", 0).expect("valid").evaluate(&recent_attrs, &recent_attrs));
    assert!(!parse_criterion("r(501)", 0).expect("valid").evaluate(&recent_attrs, &recent_attrs));
}

#[test]
fn attribute_criteria_only_count_full_sets() {
    let full = EntryDescriptor::new("a", EntryVariant::PlainFile)
        .with_attrs(AttrInfo::full(1, 10_u64, 0));
    let mut partial_info = AttrInfo::full(5, 100_u64, 0);
    partial_info.status = AttrStatus::Partial;
    let partial = EntryDescriptor::new("a", EntryVariant::PlainFile).with_attrs(partial_info);

    let more = parse_criterion("m&b", 0).expect("valid");
    assert!(more.evaluate(&full, &partial));
    assert!(parse_criterion("e", 0).expect("valid").evaluate(&partial, &full));
    assert!(!parse_criterion("s", 0).expect("valid").evaluate(&partial, &full));
}

#[test]
fn name_masks_combine_with_parsed_criteria() -> Result<(), Box<dyn std::error::Error>> {
    let policy = Action::conditional(
        Criterion::all([
            Criterion::NameMatches(Mask::glob("*.bin", true)?),
            parse_criterion("R", 0)?,
        ]),
        Action::constant(DataAction::Preserve, AttrAction::MergePreserve),
        parse_policy("Oo", 0)?,
    );
    assert_eq!(
        policy.resolve(&file(5, 1), &file(1, 1)),
        Resolution::new(DataAction::Preserve, AttrAction::MergePreserve)
    );
    assert_eq!(
        policy.resolve(&file(1, 1), &file(5, 1)),
        Resolution::new(DataAction::Overwrite, AttrAction::Overwrite)
    );
    Ok(())
}

#[test]
fn errors_name_the_offending_fragment() {
    let cases = [
        ("", "overwriting policy"),
        ("{R}", "missing [ after }"),
        ("{R[Pp]", "missing }"),
        ("{R}[Pp", "missing ]"),
    ];
    for (text, expected) in cases {
        let err = parse_policy(text, 0).expect_err(text);
        let message = err.to_string();
        assert!(message.contains(expected), "{text:?}: {message}");
    }

    let err = parse_policy("{R&Q}[Pp]", 0).expect_err("unknown atom");
    assert_eq!(err.fragment(), Some("Q"));
    let err = parse_policy("{R(1969/12/31)}[Pp]", 0).expect_err("before epoch");
    assert!(matches!(err, PolicyParseError::InvalidDate { .. }));
    let err = parse_criterion("Z(5)", 0).expect_err("no date form for Z");
    assert_eq!(err.fragment(), Some("Z(5)"));
    let err = parse_criterion("R)|(B", 0).expect_err("unbalanced");
    assert!(matches!(err, PolicyParseError::Unbalanced { .. }));
}

#[test]
fn whitespace_around_the_policy_is_ignored() {
    let policy = parse_policy("  Pp\n", 0).expect("valid");
    assert!(matches!(policy, Action::Constant(outcome) if outcome.is_complete()));
}

fn arb_variant() -> impl Strategy<Value = EntryVariant> {
    prop_oneof![
        Just(EntryVariant::Directory),
        Just(EntryVariant::PlainFile),
        Just(EntryVariant::Symlink),
        Just(EntryVariant::CharDevice),
        Just(EntryVariant::NamedPipe),
        Just(EntryVariant::DoorInode),
        Just(EntryVariant::RemovedEntry {
            original: TypeTag::DIRECTORY
        }),
    ]
}

fn arb_entry() -> impl Strategy<Value = EntryDescriptor> {
    (arb_variant(), 0_u64..100_000, 0_u64..1_000, any::<bool>()).prop_map(
        |(variant, mtime, size, dirty)| {
            EntryDescriptor::new("x", variant)
                .with_mtime(mtime)
                .with_size(size)
                .with_dirty(dirty)
        },
    )
}

proptest! {
    #[test]
    fn hourshift_equality_is_symmetric(a in 0_u64..1_000_000, b in 0_u64..1_000_000, shift in 0_u64..5) {
        prop_assert_eq!(
            equal_with_hourshift(shift, a, b),
            equal_with_hourshift(shift, b, a)
        );
    }

    #[test]
    fn double_negation_is_identity(first in arb_entry(), second in arb_entry()) {
        for atom in ["I", "D", "F", "R", "B", "S", "Y", "T", "e", "r"] {
            let plain = parse_criterion(atom, 0).expect("atom");
            let twice = parse_criterion(&format!("!!{atom}"), 0).expect("negated atom");
            prop_assert_eq!(
                plain.evaluate(&first, &second),
                twice.evaluate(&first, &second)
            );
        }
    }

    #[test]
    fn parsed_operators_agree_with_builders(first in arb_entry(), second in arb_entry()) {
        let parsed = parse_criterion("(D|F)&!~B", 0).expect("valid");
        let built = Criterion::all([
            Criterion::any([Criterion::IsDirectory, Criterion::IsPlainFile]),
            !Criterion::DataBigger.inverted(),
        ]);
        prop_assert_eq!(parsed.evaluate(&first, &second), built.evaluate(&first, &second));
    }

    #[test]
    fn same_type_is_symmetric(first in arb_entry(), second in arb_entry()) {
        prop_assert_eq!(
            Criterion::SameType.evaluate(&first, &second),
            Criterion::SameType.evaluate(&second, &first)
        );
    }

    #[test]
    fn resolution_is_always_complete(first in arb_entry(), second in arb_entry()) {
        let policy = parse_policy("{T}[{R}[P*]O*]R*;{e}[*m]", 0).expect("valid");
        let resolved = policy.resolve(&first, &second);
        let outcome = policy.evaluate(&first, &second);
        prop_assert_eq!(outcome.data.unwrap_or(DataAction::Preserve), resolved.data);
        prop_assert_eq!(outcome.attrs.unwrap_or(AttrAction::Preserve), resolved.attrs);
    }
}
