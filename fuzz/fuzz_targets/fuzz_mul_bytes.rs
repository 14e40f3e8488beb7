#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigInt;

use fourmul_bigint::mul_bytes;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte splits the rest into the two operands, capped for speed
    let data = &data[..data.len().min(512)];
    let split = 1 + usize::from(data[0]) % data.len();
    let (a, b) = (&data[1..split.min(data.len())], &data[split.min(data.len())..]);

    // Force both operands non-negative by clearing the top bit
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    if let Some(first) = a.first_mut() {
        *first &= 0x7F;
    }
    if let Some(first) = b.first_mut() {
        *first &= 0x7F;
    }

    let result = mul_bytes(&a, &b).expect("in-range operands must multiply");
    let expected = BigInt::from_signed_bytes_be(&pad_nonneg(&a))
        * BigInt::from_signed_bytes_be(&pad_nonneg(&b));
    assert_eq!(BigInt::from_signed_bytes_be(&result), expected);
});

/// An empty operand means zero to mul_bytes; give the reference the same view.
fn pad_nonneg(bytes: &[u8]) -> Vec<u8> {
    if bytes.is_empty() {
        vec![0]
    } else {
        bytes.to_vec()
    }
}
