//! Base58 and Base58Check encoding.
//!
//! NEO addresses and WIF private keys are Base58Check strings: the payload
//! followed by the first four bytes of its SHA-256d, encoded with Bitcoin's
//! Base58 alphabet.

use crate::hash::sha256d;
use crate::PrimitivesError;

/// Length of the Base58Check checksum suffix.
pub const CHECKSUM_LEN: usize = 4;

/// Encode a byte slice to a Base58 string.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).with_alphabet(bs58::Alphabet::BITCOIN).into_string()
}

/// Decode a Base58 string to a byte vector.
///
/// # Returns
/// `Ok(Vec<u8>)` on success, or `InvalidBase58` for characters outside the
/// alphabet.
pub fn decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    bs58::decode(s)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| PrimitivesError::InvalidBase58(e.to_string()))
}

/// Encode `data || sha256d(data)[..4]` as Base58.
///
/// # Arguments
/// * `data` - Version byte followed by the payload.
///
/// # Returns
/// A Base58Check-encoded string.
pub fn check_encode(data: &[u8]) -> String {
    let checksum = sha256d(data);
    let mut payload = Vec::with_capacity(data.len() + CHECKSUM_LEN);
    payload.extend_from_slice(data);
    payload.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    encode(&payload)
}

/// Decode a Base58Check string and verify its checksum.
///
/// # Returns
/// The payload without its checksum, `InvalidBase58` for malformed input,
/// or `ChecksumMismatch` when the trailing four bytes do not match.
pub fn check_decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    let decoded = decode(s)?;
    if decoded.len() < CHECKSUM_LEN {
        return Err(PrimitivesError::InvalidBase58(
            "data too short for checksum".to_string(),
        ));
    }
    let (payload, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    let expected = sha256d(payload);
    if checksum != &expected[..CHECKSUM_LEN] {
        return Err(PrimitivesError::ChecksumMismatch);
    }
    Ok(payload.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "AK2nJJpJr6o664CWJKi1QRXjqeic2zRp8y";
    const ADDRESS_PAYLOAD: &str = "1723ba2703c53263e8d6e522dc32203339dcd8eee9";

    #[test]
    fn test_encode_leading_zeros() {
        assert_eq!(encode(&[0, 0, 0, 0]), "1111");
        assert_eq!(decode("111233QC4").unwrap(), hex::decode("000000287FB4CD").unwrap());
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]), "");
        assert!(decode("").unwrap().is_empty());
    }

    #[test]
    fn test_decode_invalid_character() {
        // '0', 'O', 'I' and 'l' are not part of the alphabet.
        assert!(matches!(decode("A0Il"), Err(PrimitivesError::InvalidBase58(_))));
    }

    #[test]
    fn test_check_encode_address() {
        let payload = hex::decode(ADDRESS_PAYLOAD).unwrap();
        assert_eq!(check_encode(&payload), ADDRESS);
    }

    #[test]
    fn test_check_decode_address() {
        let payload = check_decode(ADDRESS).unwrap();
        assert_eq!(hex::encode(payload), ADDRESS_PAYLOAD);
    }

    #[test]
    fn test_check_decode_bad_checksum() {
        let mut tampered = ADDRESS.to_string();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'y' { 'z' } else { 'y' });
        assert!(check_decode(&tampered).is_err());
    }

    #[test]
    fn test_check_decode_too_short() {
        assert!(matches!(check_decode("1"), Err(PrimitivesError::InvalidBase58(_))));
    }
}
