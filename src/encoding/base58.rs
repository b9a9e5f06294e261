use crate::{
    encoding::{
        version_prefix::VersionPrefix
    },
    error::{Error, Result},
    hash
};
use std::iter;

const BASE58_ALPHABET: &'static [u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const MAP_BASE58: [i8; 256] = [
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1, 0, 1, 2, 3, 4, 5, 6,  7, 8,-1,-1,-1,-1,-1,-1,
        -1, 9,10,11,12,13,14,15, 16,-1,17,18,19,20,21,-1,
        22,23,24,25,26,27,28,29, 30,31,32,-1,-1,-1,-1,-1,
        -1,33,34,35,36,37,38,39, 40,41,42,43,-1,44,45,46,
        47,48,49,50,51,52,53,54, 55,56,57,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
        -1,-1,-1,-1,-1,-1,-1,-1, -1,-1,-1,-1,-1,-1,-1,-1,
];

/// Largest payload (in bytes) the codec accepts. Extended keys are 82.
pub const MAX_PAYLOAD_LEN: usize = 1024;

/// Longest text `decode` accepts, the encoded size of a maximal payload.
pub const MAX_ENCODED_LEN: usize = MAX_PAYLOAD_LEN * 138 / 100 + 1;

/// Payload with an optional version prefix, encoded as prefix || payload.
#[derive(Debug)]
pub struct Base58 {
    prefix: Option<VersionPrefix>,
    payload: Vec<u8>
}

impl Base58 {
    pub fn new(prefix: Option<VersionPrefix>, payload: &[u8]) -> Base58 {
        Base58 {
            prefix,
            payload: payload.to_vec()
        }
    }

    fn bytes(self) -> Vec<u8> {
        match self.prefix {
            Some(x) => {
                let mut d = x.to_bytes();
                d.extend_from_slice(&self.payload);
                d
            },
            None => self.payload
        }
    }

    /// Check encode data by appending the checksum and then encoding it.
    pub fn check_encode(self) -> Result<String> {
        check_encode(&self.bytes())
    }

    /// Encode data in base58 format.
    pub fn encode(self) -> Result<String> {
        encode(&self.bytes())
    }

    pub fn decode(encoded: &str) -> Result<Vec<u8>> {
        decode(encoded)
    }

    pub fn validate_checksum(encoded: &str) -> Result<bool> {
        validate_checksum(encoded)
    }

    pub fn check_decode(encoded: &str) -> Result<Vec<u8>> {
        check_decode(encoded)
    }
}

/**
    Encodes bytes as base58 text.

    Leading zero bytes become leading '1's. The rest is treated as a
    big-endian integer that is divided by 58 until it reaches zero,
    the remainders giving the digits least significant first.
*/
pub fn encode(data: &[u8]) -> Result<String> {
    if data.len() > MAX_PAYLOAD_LEN {
        return Err(Error::length(format!("at most {} bytes", MAX_PAYLOAD_LEN), data.len()));
    }

    let zcount = data.iter().take_while(|b| **b == 0).count();

    //Scratch space: log(256)/log(58) ~ 1.37 digits per byte
    let capacity = (data.len() - zcount) * 138 / 100 + 1;
    let mut number: Vec<u8> = data[zcount..].to_vec();
    let mut digits: Vec<u8> = Vec::with_capacity(capacity);

    let mut start = 0;
    while start < number.len() {
        //Long division of the remaining number by 58
        let mut remainder: u32 = 0;
        for byte in number[start..].iter_mut() {
            let acc = (remainder << 8) | *byte as u32;
            *byte = (acc / 58) as u8;
            remainder = acc % 58;
        }
        digits.push(remainder as u8);

        while start < number.len() && number[start] == 0 {
            start += 1;
        }
    }
    debug_assert!(digits.len() <= capacity);

    let mut result = String::with_capacity(zcount + digits.len());
    result.extend(iter::repeat('1').take(zcount));
    result.extend(digits.iter().rev().map(|d| BASE58_ALPHABET[*d as usize] as char));
    Ok(result)
}

/// Decodes base58 text into bytes. Inverse of `encode`.
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    if encoded.len() > MAX_ENCODED_LEN {
        return Err(Error::length(format!("at most {} characters", MAX_ENCODED_LEN), encoded.len()));
    }

    //Skip and count leading '1's
    let zeroes = encoded.bytes().take_while(|c| *c == b'1').count();

    //Allocate enough space in big-endian base256 representation.
    let size = (encoded.len() - zeroes) * 733 / 1000 + 1; // log(58) / log(256), rounded up.
    let mut b256: Vec<u8> = vec![0; size];

    for (index, character) in encoded.char_indices().skip(zeroes) {
        let digit = if character.is_ascii() { MAP_BASE58[character as usize] } else { -1 };
        if digit < 0 {
            return Err(Error::InvalidCharacter { character, index });
        }

        let mut carry = digit as u32;
        for byte in b256.iter_mut().rev() {
            carry += 58 * (*byte as u32);
            *byte = (carry % 256) as u8;
            carry /= 256;
        }
        debug_assert_eq!(carry, 0);
    }

    //Skip leading zeroes in b256
    let j = b256.iter().take_while(|b| **b == 0).count();
    let len = zeroes + b256.len() - j;
    if len > MAX_PAYLOAD_LEN {
        return Err(Error::length(format!("at most {} bytes", MAX_PAYLOAD_LEN), len));
    }
    let mut result: Vec<u8> = vec![0x00; zeroes];
    result.extend_from_slice(&b256[j..]);
    Ok(result)
}

/**
    Returns the Base58Check encoding of `data`: data || sha256d(data)[0..4].
*/
pub fn check_encode(data: &[u8]) -> Result<String> {
    let mut bytes: Vec<u8> = Vec::with_capacity(data.len() + 4);
    bytes.extend_from_slice(data);
    bytes.extend_from_slice(&hash::checksum(data));
    encode(&bytes)
}

/// Checks if a base58 check encoded string is valid
pub fn validate_checksum(encoded: &str) -> Result<bool> {
    let bytes = decode(encoded)?;
    if bytes.len() < 4 {
        return Err(Error::length("at least 4 bytes", bytes.len()));
    }
    let (payload, checksum) = bytes.split_at(bytes.len() - 4);

    //Check derived_checksum == extracted_checksum
    Ok(hash::checksum(payload)[..] == checksum[..])
}

/// Returns the decoded payload with the checksum removed.
/// Version prefix is NOT removed as it is variable length depending on context.
pub fn check_decode(encoded: &str) -> Result<Vec<u8>> {
    let mut bytes = decode(encoded)?;
    if bytes.len() < 4 {
        return Err(Error::length("at least 4 bytes", bytes.len()));
    }
    let payload_len = bytes.len() - 4;
    if hash::checksum(&bytes[..payload_len])[..] != bytes[payload_len..] {
        return Err(Error::ChecksumMismatch);
    }
    bytes.truncate(payload_len);
    Ok(bytes)
}
