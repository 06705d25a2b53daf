//! Big-endian property wire codec
//!
//! Serialized properties arrive as flat buffers of IEEE-754 32-bit floats
//! in big-endian byte order, one buffer per property name. The length must
//! be exactly arity x 4 bytes; anything else is a hard decode failure, not
//! a best-effort parse.

use crate::error::{Result, WickError};

/// Decode exactly `N` big-endian floats from `data`.
pub fn decode_floats<const N: usize>(data: &[u8]) -> Result<[f32; N]> {
    if data.len() != N * 4 {
        return Err(WickError::Decode(format!(
            "expected {} bytes for {} floats, got {}",
            N * 4,
            N,
            data.len()
        )));
    }

    let mut out = [0.0f32; N];
    for (slot, chunk) in out.iter_mut().zip(data.chunks_exact(4)) {
        *slot = f32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    Ok(out)
}

/// Pack floats into the big-endian wire layout. Used by resource loaders
/// and tests to build property buffers.
pub fn encode_floats(values: &[f32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * 4);
    for v in values {
        out.extend_from_slice(&v.to_be_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_exact() {
        let values = [0.0f32, -1.5, 3.25, f32::MIN_POSITIVE];
        let decoded: [f32; 4] = decode_floats(&encode_floats(&values)).unwrap();
        // No arithmetic in transit, so bit-exact equality holds.
        assert_eq!(decoded, values);
    }

    #[test]
    fn big_endian_layout() {
        // 1.0f32 is 0x3F800000
        assert_eq!(encode_floats(&[1.0]), vec![0x3F, 0x80, 0x00, 0x00]);
        let decoded: [f32; 1] = decode_floats(&[0x3F, 0x80, 0x00, 0x00]).unwrap();
        assert_eq!(decoded, [1.0]);
    }

    #[test]
    fn wrong_length_is_decode_error() {
        let short = [0u8; 11];
        assert!(matches!(
            decode_floats::<3>(&short),
            Err(WickError::Decode(_))
        ));
        let long = [0u8; 13];
        assert!(matches!(decode_floats::<3>(&long), Err(WickError::Decode(_))));
    }
}
