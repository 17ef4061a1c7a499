//! Town hash buckets
//!
//! Town names are free text with high cardinality, so they are folded into
//! a fixed number of buckets: `sha256(trim(town))` read as a 256-bit
//! big-endian integer, modulo [`TOWN_BUCKETS`].
//!
//! Casing is preserved: "Kandy" and "kandy" may land in different buckets.
//! The model was trained with this behavior.

use sha2::{Digest, Sha256};

use super::layout::TOWN_BUCKETS;

/// Bucket index in `[0, TOWN_BUCKETS)`
pub fn town_bucket(town: &str) -> usize {
    let digest = Sha256::digest(town.trim().as_bytes());
    digest_mod(&digest, TOWN_BUCKETS)
}

/// Big-endian byte string modulo `m`, without a bignum
fn digest_mod(bytes: &[u8], m: usize) -> usize {
    let m = m as u64;
    bytes
        .iter()
        .fold(0u64, |acc, &b| (acc * 256 + b as u64) % m) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_mod_matches_integer_arithmetic() {
        // 0x01_02_03 = 66051; 66051 % 219 = 132
        assert_eq!(digest_mod(&[0x01, 0x02, 0x03], 219), 66051 % 219);
        // u64::MAX as bytes
        assert_eq!(
            digest_mod(&u64::MAX.to_be_bytes(), 219),
            (u64::MAX % 219) as usize
        );
        assert_eq!(digest_mod(&[], 219), 0);
    }

    #[test]
    fn test_digest_mod_wide_value() {
        // 2^128 - 1 checked with u128 arithmetic
        let bytes = u128::MAX.to_be_bytes();
        assert_eq!(digest_mod(&bytes, 219), (u128::MAX % 219) as usize);
    }

    #[test]
    fn test_bucket_in_range_and_stable() {
        for town in ["Peradeniya", "Kadawatha", "Nugegoda", "Galle Fort", "කොළඹ"] {
            let bucket = town_bucket(town);
            assert!(bucket < TOWN_BUCKETS);
            assert_eq!(bucket, town_bucket(town));
        }
    }

    #[test]
    fn test_bucket_ignores_surrounding_whitespace() {
        assert_eq!(town_bucket("Peradeniya"), town_bucket("  Peradeniya\n"));
    }

    #[test]
    fn test_known_buckets() {
        assert_eq!(town_bucket("Peradeniya"), 89);
        assert_eq!(town_bucket("Nugegoda"), 65);
        assert_eq!(town_bucket("Colombo 07"), 92);
        // Case-sensitive by construction
        assert_eq!(town_bucket("Kandy"), 208);
        assert_eq!(town_bucket("kandy"), 163);
    }

    #[test]
    fn test_bucket_matches_manual_digest() {
        let digest = Sha256::digest(b"Peradeniya");
        let expected = digest.iter().fold(0u128, |acc, &b| (acc * 256 + b as u128) % 219);
        assert_eq!(town_bucket("Peradeniya") as u128, expected);
    }
}
