use proptest::prelude::*;

use super::*;

fn big(value: u128) -> BigUint {
    BigUint::from(value)
}

#[test]
fn parse_and_display_are_inverse_for_large_values() {
    let text = "123456789012345678901234567890123456789012345678901234567890";
    let value: BigUint = text.parse().expect("digits");
    assert_eq!(value.to_string(), text);
    assert_eq!(Deci::from(&value).human(), text);
}

#[test]
fn parse_rejects_empty_and_non_digits() {
    assert!(matches!("".parse::<BigUint>(), Err(InfinintError::Parse { .. })));
    let error = "12x4".parse::<BigUint>().expect_err("non digit");
    assert!(error.to_string().contains("12x4"));
}

#[test]
fn subtraction_underflow_is_reported() {
    let small = big(3);
    let large = big(4);
    assert!(matches!(small.checked_sub(&large), Err(InfinintError::Underflow)));

    let mut value = big(3);
    assert!(value.checked_sub_assign(&large).is_err());
    assert_eq!(value, big(3));
}

#[test]
fn division_by_zero_is_reported() {
    assert!(matches!(
        big(10).euclide(&BigUint::zero()),
        Err(InfinintError::DivideByZero)
    ));
    assert!(big(10).checked_rem(&BigUint::zero()).is_err());
}

#[test]
fn euclide_with_multi_limb_divisor() {
    let dividend: BigUint = "1000000000000000000000000000000".parse().expect("digits");
    let divisor: BigUint = "12345678901234567890".parse().expect("digits");
    let (quotient, remainder) = dividend.euclide(&divisor).expect("nonzero divisor");
    assert!(remainder < divisor);
    assert_eq!(quotient * &divisor + remainder, dividend);
}

#[test]
fn euclide_of_smaller_dividend_is_zero_quotient() {
    let (quotient, remainder) = big(7).euclide(&big(1 << 40)).expect("nonzero divisor");
    assert!(quotient.is_zero());
    assert_eq!(remainder, big(7));
}

#[test]
fn ordering_compares_magnitude() {
    assert!(big(u128::from(u64::MAX)) < big(u128::from(u64::MAX) + 1));
    assert!(BigUint::zero() < BigUint::one());
    assert_eq!(big(5).cmp(&big(5)), std::cmp::Ordering::Equal);
}

#[test]
fn to_u64_fails_for_wide_values() {
    assert_eq!(big(u128::from(u64::MAX)).to_u64(), Some(u64::MAX));
    assert_eq!(big(u128::from(u64::MAX) + 1).to_u64(), None);
}

proptest! {
    #[test]
    fn addition_matches_u128(a in any::<u64>(), b in any::<u64>()) {
        let sum = BigUint::from(a) + BigUint::from(b);
        prop_assert_eq!(sum.to_u128(), Some(u128::from(a) + u128::from(b)));
    }

    #[test]
    fn multiplication_matches_u128(a in any::<u64>(), b in any::<u64>()) {
        let product = BigUint::from(a) * BigUint::from(b);
        prop_assert_eq!(product.to_u128(), Some(u128::from(a) * u128::from(b)));
    }

    #[test]
    fn subtraction_matches_u128(a in any::<u128>(), b in any::<u128>()) {
        let (high, low) = if a >= b { (a, b) } else { (b, a) };
        let difference = big(high).checked_sub(&big(low)).expect("ordered operands");
        prop_assert_eq!(difference.to_u128(), Some(high - low));
    }

    #[test]
    fn euclide_matches_u128(a in any::<u128>(), b in 1u128..) {
        let (quotient, remainder) = big(a).euclide(&big(b)).expect("nonzero divisor");
        prop_assert_eq!(quotient.to_u128(), Some(a / b));
        prop_assert_eq!(remainder.to_u128(), Some(a % b));
    }

    #[test]
    fn euclide_reconstructs_wide_dividends(
        high in any::<u128>(),
        low in any::<u128>(),
        divisor in any::<u128>(),
    ) {
        prop_assume!(divisor != 0);
        let dividend = (big(high) << 128) + big(low);
        let divisor = big(divisor);
        let (quotient, remainder) = dividend.euclide(&divisor).expect("nonzero divisor");
        prop_assert!(remainder < divisor);
        prop_assert_eq!(quotient * divisor + remainder, dividend);
    }

    #[test]
    fn shifts_match_u128(value in any::<u64>(), shift in 0u32..64) {
        prop_assert_eq!((big(u128::from(value)) << shift).to_u128(), Some(u128::from(value) << shift));
        prop_assert_eq!((big(u128::from(value)) >> shift).to_u128(), Some(u128::from(value) >> shift));
    }

    #[test]
    fn decimal_text_matches_builtin(value in any::<u128>()) {
        let text = value.to_string();
        prop_assert_eq!(big(value).to_string(), text.clone());
        prop_assert_eq!(text.parse::<BigUint>().expect("digits"), big(value));
        prop_assert_eq!(text.parse::<Deci>().expect("digits").computer(), big(value));
    }

    #[test]
    fn decode_consumes_exactly_the_encoding(value in any::<u128>(), tail in proptest::collection::vec(any::<u8>(), 0..8)) {
        let mut encoded = Vec::new();
        encode_infinint_to_vec(&big(value), &mut encoded);
        let encoded_len = encoded.len();
        encoded.extend_from_slice(&tail);
        let (decoded, rest) = decode_infinint(&encoded).expect("well formed");
        prop_assert_eq!(decoded, big(value));
        prop_assert_eq!(rest, &encoded[encoded_len..]);
    }
}
