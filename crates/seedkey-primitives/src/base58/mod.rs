//! Base58 encoding and decoding with optional checksum support.
//!
//! Provides raw Base58 encode/decode and Base58Check encode/decode (with
//! double-SHA-256 checksum) used for WIF private keys and P2PKH addresses.
//!
//! The input is treated as one big-endian unsigned integer held in a
//! [`BigUint`], so the value can never pick up a sign byte. Leading zero
//! bytes carry no numeric weight and are carried separately as leading
//! `'1'` characters.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::hash::sha256d;
use crate::PrimitivesError;

/// Bitcoin's modified Base58 alphabet.
///
/// Excludes 0, O, I, l to reduce visual ambiguity.
const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const BASE: u32 = 58;

/// Length of the Base58Check checksum in bytes.
pub const CHECKSUM_LEN: usize = 4;

/// Minimum decoded length of a Base58Check string: one version byte plus checksum.
pub const MIN_CHECK_LEN: usize = 1 + CHECKSUM_LEN;

/// Reverse lookup from ASCII byte to digit value; `0xff` marks bytes outside the alphabet.
const DIGITS: [u8; 128] = {
    let mut table = [0xff_u8; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Encode a byte slice to a Base58 string.
///
/// Leading zero bytes are encoded as leading '1' characters. An empty
/// slice encodes to the empty string.
///
/// # Arguments
/// * `data` - The bytes to encode.
///
/// # Returns
/// A Base58-encoded string.
pub fn encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|&&b| b == 0).count();
    let value = BigUint::from_bytes_be(&data[zeros..]);

    // Base58 needs ~1.37 characters per byte.
    let mut out = String::with_capacity(zeros + (data.len() - zeros) * 138 / 100 + 1);
    out.extend(std::iter::repeat(ALPHABET[0] as char).take(zeros));

    if !value.is_zero() {
        // Digits come out least significant first.
        let digits = value.to_radix_le(BASE);
        out.extend(digits.iter().rev().map(|&d| ALPHABET[d as usize] as char));
    }
    out
}

/// Decode a Base58 string to a byte vector.
///
/// Leading '1' characters decode to leading zero bytes; the remainder is
/// decoded as a big-endian integer whose minimal byte representation is
/// appended after those zeros.
///
/// # Arguments
/// * `s` - The Base58 string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` on success, or `InvalidCharacter` naming the first
/// character outside the alphabet.
pub fn decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    let mut digits = Vec::with_capacity(s.len());
    for (index, character) in s.char_indices() {
        let digit = u8::try_from(character)
            .ok()
            .and_then(|b| DIGITS.get(b as usize).copied())
            .filter(|&d| d != 0xff)
            .ok_or(PrimitivesError::InvalidCharacter { character, index })?;
        digits.push(digit);
    }

    let zeros = digits.iter().take_while(|&&d| d == 0).count();
    let mut out = vec![0u8; zeros];

    let rest = &digits[zeros..];
    if !rest.is_empty() {
        let value = rest
            .iter()
            .fold(BigUint::zero(), |acc, &d| acc * BASE + u32::from(d));
        out.extend_from_slice(&value.to_bytes_be());
    }
    Ok(out)
}

/// Compute the 4-byte Base58Check checksum of `data`.
///
/// The checksum is the first 4 bytes of SHA-256d(data).
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = sha256d(data);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&hash[..CHECKSUM_LEN]);
    out
}

/// Encode a byte slice with a 4-byte double-SHA-256 checksum appended (Base58Check).
///
/// The result is `encode(data || checksum(data))`.
///
/// # Arguments
/// * `data` - The bytes to encode (typically version byte + payload).
///
/// # Returns
/// A Base58Check-encoded string.
pub fn check_encode(data: &[u8]) -> String {
    let mut payload = Vec::with_capacity(data.len() + CHECKSUM_LEN);
    payload.extend_from_slice(data);
    payload.extend_from_slice(&checksum(data));
    encode(&payload)
}

/// Decode a Base58Check string, verifying the 4-byte checksum.
///
/// # Arguments
/// * `s` - The Base58Check string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` of the payload (version byte included, checksum removed) on
/// success. Fails with `InvalidCharacter`, `TooShort` when fewer than 5 bytes
/// decode, or `ChecksumMismatch`.
pub fn check_decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    let mut decoded = decode(s)?;
    if decoded.len() < MIN_CHECK_LEN {
        return Err(PrimitivesError::TooShort { len: decoded.len() });
    }
    let split = decoded.len() - CHECKSUM_LEN;
    if decoded[split..] != checksum(&decoded[..split]) {
        return Err(PrimitivesError::ChecksumMismatch);
    }
    decoded.truncate(split);
    Ok(decoded)
}

/// Report whether `s` is a well-formed Base58Check string with a valid checksum.
pub fn is_valid_check(s: &str) -> bool {
    check_decode(s).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base58_empty_string() {
        assert_eq!(encode(&[]), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_base58_single_zero_byte() {
        assert_eq!(encode(&[0]), "1");
        assert_eq!(decode("1").unwrap(), vec![0]);
    }

    #[test]
    fn test_base58_decoded_address() {
        let input = hex::decode("00010966776006953D5567439E5E39F86A0D273BEED61967F6").unwrap();
        assert_eq!(encode(&input), "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM");
        assert_eq!(decode("16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM").unwrap(), input);
    }

    #[test]
    fn test_base58_decoded_hash() {
        let input = hex::decode("0123456789ABCDEF").unwrap();
        assert_eq!(encode(&input), "C3CPq7c8PY");
        assert_eq!(decode("C3CPq7c8PY").unwrap(), input);
    }

    #[test]
    fn test_base58_leading_zeros() {
        let input = hex::decode("000000287FB4CD").unwrap();
        assert_eq!(encode(&input), "111233QC4");
        assert_eq!(decode("111233QC4").unwrap(), input);
    }

    #[test]
    fn test_base58_two_leading_zeros_then_one() {
        let encoded = encode(&[0x00, 0x00, 0x01]);
        assert_eq!(encoded, "112");
        assert!(encoded.starts_with("11"));
        assert!(!encoded.starts_with("111"));
    }

    #[test]
    fn test_base58_encode_all_zeros() {
        assert_eq!(encode(&[0, 0, 0, 0]), "1111");
        assert_eq!(decode("1111").unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_base58_encode_large_number() {
        assert_eq!(encode(&[255, 255, 255, 255]), "7YXq9G");
    }

    #[test]
    fn test_base58_high_bit_has_no_sign_byte() {
        // 0x80.. would need a sign byte in a two's-complement representation.
        let input = [0x80, 0x00, 0x00, 0x01];
        assert_eq!(decode(&encode(&input)).unwrap(), input);
        let input = [0x00, 0xff];
        assert_eq!(decode(&encode(&input)).unwrap(), input);
    }

    #[test]
    fn test_base58_decode_invalid_character() {
        assert_eq!(
            decode("invalid!@#$%"),
            Err(PrimitivesError::InvalidCharacter { character: 'l', index: 4 })
        );
    }

    #[test]
    fn test_base58_decode_excluded_characters() {
        for bad in ["0", "O", "I", "l"] {
            assert!(matches!(
                decode(bad),
                Err(PrimitivesError::InvalidCharacter { index: 0, .. })
            ));
        }
    }

    #[test]
    fn test_base58_decode_non_ascii() {
        assert_eq!(
            decode("12é"),
            Err(PrimitivesError::InvalidCharacter { character: 'é', index: 2 })
        );
    }

    // -- Base58Check --

    #[test]
    fn test_base58_check_roundtrip() {
        let payload = hex::decode("00f54a5851e9372b87810a8e60cdd2e7cfd80b6e31").unwrap();
        let encoded = check_encode(&payload);
        assert_eq!(check_decode(&encoded).unwrap(), payload);
        assert!(is_valid_check(&encoded));
    }

    #[test]
    fn test_base58_check_known_vectors() {
        assert_eq!(check_encode(&[0x00]), "1Wh4bh");
        assert_eq!(check_encode(&[]), "3QJmnh");
    }

    #[test]
    fn test_base58_check_bad_checksum() {
        let payload = vec![0x80, 0x01, 0x02, 0x03];
        let mut encoded = check_encode(&payload);
        let last = encoded.pop().unwrap();
        let replacement = if last == '1' { '2' } else { '1' };
        encoded.push(replacement);
        assert_eq!(check_decode(&encoded), Err(PrimitivesError::ChecksumMismatch));
        assert!(!is_valid_check(&encoded));
    }

    #[test]
    fn test_base58_check_too_short() {
        assert_eq!(check_decode("1"), Err(PrimitivesError::TooShort { len: 1 }));
        // "3QJmnh" is the checksum of an empty payload: four bytes, no version byte.
        assert_eq!(check_decode("3QJmnh"), Err(PrimitivesError::TooShort { len: 4 }));
        assert_eq!(check_decode(""), Err(PrimitivesError::TooShort { len: 0 }));
    }

    #[test]
    fn test_base58_check_invalid_character() {
        assert!(matches!(
            check_decode("5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuD0"),
            Err(PrimitivesError::InvalidCharacter { character: '0', .. })
        ));
    }

    #[test]
    fn test_base58_check_wif_of_scalar_one() {
        let mut payload = vec![0x80];
        payload.extend_from_slice(&[0u8; 31]);
        payload.push(1);
        assert_eq!(
            check_encode(&payload),
            "5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDf"
        );
    }
}
