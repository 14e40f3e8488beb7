//! Golden-value integration tests for the multiplication pipeline.

use num_bigint::BigInt;

use fourmul_bigint::{fft_mul, mul_bytes};

fn via_bytes(a: &BigInt, b: &BigInt) -> BigInt {
    let bytes = mul_bytes(&a.to_signed_bytes_be(), &b.to_signed_bytes_be()).unwrap();
    BigInt::from_signed_bytes_be(&bytes)
}

#[test]
fn known_product() {
    let a = BigInt::from(123_456_789u64);
    let b = BigInt::from(987_654_321u64);
    assert_eq!(via_bytes(&a, &b), BigInt::from(121_932_631_112_635_269u64));
}

#[test]
fn power_of_two_square() {
    let a = BigInt::from(1) << 1000;
    assert_eq!(via_bytes(&a, &a), BigInt::from(1) << 2000);
}

#[test]
fn identity_elements() {
    let a = BigInt::parse_bytes(b"987654321098765432109876543210", 10).unwrap();
    assert_eq!(via_bytes(&a, &BigInt::from(1)), a);
    assert_eq!(via_bytes(&a, &BigInt::ZERO), BigInt::ZERO);
}

#[test]
fn repunit_squares() {
    // 111...1^2 has a palindromic digit pattern; good carry stress
    for digits in [9usize, 30, 100] {
        let repunit = BigInt::parse_bytes(&vec![b'1'; digits], 10).unwrap();
        assert_eq!(via_bytes(&repunit, &repunit), &repunit * &repunit);
    }
}

#[test]
fn kilobyte_operands() {
    // Deterministic byte patterns, one operand with every byte value
    let a_bytes: Vec<u8> = std::iter::once(0x01)
        .chain((0..=255u8).cycle().take(1024))
        .collect();
    let b_bytes: Vec<u8> = std::iter::once(0x02)
        .chain((0..1024u32).map(|i| (i.wrapping_mul(2_654_435_761) >> 24) as u8))
        .collect();

    let a = BigInt::from_signed_bytes_be(&a_bytes);
    let b = BigInt::from_signed_bytes_be(&b_bytes);
    assert_eq!(fft_mul(&a, &b).unwrap(), &a * &b);
}
