use crate::error::{Error, Result};

/*
    Decodes hex strings into a byte vector.
    Case-insensitive, no separators.
*/
pub fn decode_02x(hex: &str) -> Result<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return Err(Error::length("an even number of hex characters", hex.len()));
    }
    Ok(hex::decode(hex)?)
}

/*
    Decodes a hex string that must describe exactly N bytes.
*/
pub fn decode_02x_exact<const N: usize>(hex: &str) -> Result<[u8; N]> {
    if hex.len() != N * 2 {
        return Err(Error::length(format!("{} hex characters", N * 2), hex.len()));
    }
    let mut out = [0u8; N];
    hex::decode_to_slice(hex, &mut out)?;
    Ok(out)
}

/*
    Encodes byte slices into hex string
*/
pub fn encode_02x(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/**
    Copies a slice into an array, failing if the lengths differ.
*/
pub fn try_into<T: Copy + Default, const N: usize>(v: &[T]) -> Result<[T; N]> {
    if v.len() != N {
        return Err(Error::length(N, v.len()));
    }
    let mut out = [T::default(); N];
    out.copy_from_slice(v);
    Ok(out)
}

//Converts a byte array to int
pub fn as_u32_be(array: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*array)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Network {
    Bitcoin,
    Testnet
}

impl Default for Network {
    fn default() -> Self {
        Network::Bitcoin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let bytes = decode_02x("00ff10Ab").unwrap();
        assert_eq!(bytes, vec![0x00, 0xff, 0x10, 0xab]);
        assert_eq!(encode_02x(&bytes), "00ff10ab");
    }

    #[test]
    fn hex_errors() {
        assert!(matches!(decode_02x("abc"), Err(Error::InvalidInputLength { .. })));
        assert!(matches!(decode_02x("zz"), Err(Error::InvalidHexEncoding(_))));
        assert!(matches!(decode_02x_exact::<4>("0011"), Err(Error::InvalidInputLength { got: 4, .. })));
        assert!(matches!(decode_02x_exact::<2>("00g1"), Err(Error::InvalidHexEncoding(_))));
        assert_eq!(decode_02x_exact::<2>("BEEF").unwrap(), [0xbe, 0xef]);
    }

    #[test]
    fn slice_to_array() {
        let arr: [u8; 3] = try_into(&[1, 2, 3]).unwrap();
        assert_eq!(arr, [1, 2, 3]);
        assert!(try_into::<u8, 4>(&[1, 2, 3]).is_err());
        assert_eq!(as_u32_be(&[0x04, 0x88, 0xad, 0xe4]), 0x0488ade4);
    }
}
