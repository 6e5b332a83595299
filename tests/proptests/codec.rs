//! Property tests for numeral decoding

use num_bigint::BigInt;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use secret_quorum::codec::{decode, encode};

/// Wrapper for supported bases (2..=16)
#[derive(Clone, Copy, Debug)]
struct ValidBase(u32);

impl Arbitrary for ValidBase {
    fn arbitrary(g: &mut Gen) -> Self {
        ValidBase(u32::arbitrary(g) % 15 + 2)
    }
}

/// Non-negative value up to 256 bits, built from four random limbs
#[derive(Clone, Debug)]
struct WideValue(BigInt);

impl Arbitrary for WideValue {
    fn arbitrary(g: &mut Gen) -> Self {
        let limbs: Vec<u64> = (0..4).map(|_| u64::arbitrary(g)).collect();
        let value = limbs
            .iter()
            .fold(BigInt::from(0), |acc, &limb| (acc << 64u32) + limb);
        WideValue(value)
    }
}

/// Test that encoding then decoding returns the original value
#[quickcheck]
fn prop_encode_decode_round_trip(value: WideValue, base: ValidBase) -> bool {
    let WideValue(value) = value;
    let ValidBase(base) = base;

    let Ok(digits) = encode(&value, base) else {
        return false;
    };
    decode(&digits, base) == Ok(value)
}

/// Test that decoding agrees with the standard parser for u64 values
#[quickcheck]
fn prop_decode_matches_from_str_radix(value: u64, base: ValidBase) -> bool {
    let ValidBase(base) = base;
    let digits = BigInt::from(value).to_str_radix(base);

    decode(&digits, base) == Ok(BigInt::from(value))
        && decode(&digits.to_uppercase(), base) == Ok(BigInt::from(value))
}

/// Test that a digit equal to the base is always rejected
#[quickcheck]
fn prop_digit_equal_to_base_rejected(prefix: u32, base: ValidBase) -> bool {
    let ValidBase(base) = base;
    if base == 16 {
        // 'g' has no value at all, still rejected
        return decode(&format!("{prefix:x}g"), 16).is_err();
    }

    let Some(bad) = char::from_digit(base, 16) else {
        return false;
    };
    let digits = format!("{}{bad}", BigInt::from(prefix).to_str_radix(base));
    decode(&digits, base).is_err()
}
