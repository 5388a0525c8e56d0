// Path: crates/types/src/codec.rs

//! Defines the canonical, deterministic binary codec for all call and state bytes.
//!
//! Thin wrappers around `parity-scale-codec` (SCALE). Request envelopes,
//! method parameters, results and stored records all pass through here, so a
//! byte string produced by one component decodes identically in every other.

use parity_scale_codec::{Decode, DecodeAll, Encode};

/// Encodes a value into its canonical SCALE byte representation.
pub fn to_bytes_canonical<T: Encode>(v: &T) -> Result<Vec<u8>, String> {
    Ok(v.encode())
}

/// Decodes a value from its canonical SCALE byte representation.
///
/// Trailing bytes are rejected, so a buffer decodes as `T` only if it is
/// exactly one encoded `T`.
pub fn from_bytes_canonical<T: Decode>(b: &[u8]) -> Result<T, String> {
    T::decode_all(&mut &*b).map_err(|e| format!("canonical decode failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Encode, Decode, Debug, PartialEq, Eq)]
    struct Sample {
        id: u64,
        title: String,
    }

    #[test]
    fn test_canonical_decode_rejects_truncated_input() {
        let mut encoded = to_bytes_canonical(&Sample {
            id: 7,
            title: "groceries".to_string(),
        })
        .unwrap();
        encoded.pop();

        let err = from_bytes_canonical::<Sample>(&encoded).unwrap_err();
        assert!(err.contains("canonical decode failed"));
    }

    #[test]
    fn test_canonical_decode_rejects_trailing_bytes() {
        let mut encoded = to_bytes_canonical(&42u64).unwrap();
        encoded.push(0);
        assert!(from_bytes_canonical::<u64>(&encoded).is_err());
    }

    #[test]
    fn test_unit_encodes_to_nothing() {
        assert!(to_bytes_canonical(&()).unwrap().is_empty());
        from_bytes_canonical::<()>(&[]).unwrap();
    }
}
