// Path: crates/types/src/app/mod.rs

//! Application-level identities and the request envelope understood by every contract.

mod identity;

pub use identity::*;

use parity_scale_codec::{Decode, Encode};

/// The raw request envelope carried by a call: a versioned method selector
/// (e.g. `create_note@v1`) plus its SCALE-encoded parameters.
///
/// The encoded form of this struct is the "raw request" a forwarding contract
/// relays byte-for-byte.
#[derive(Encode, Decode, Debug, Clone, PartialEq, Eq)]
pub struct CallData {
    /// The versioned method selector.
    pub method: String,
    /// The SCALE-encoded method parameters.
    pub params: Vec<u8>,
}

impl CallData {
    /// Builds an envelope from a selector and a typed parameter value.
    pub fn new<P: Encode>(method: &str, params: &P) -> Self {
        Self {
            method: method.to_string(),
            params: params.encode(),
        }
    }

    /// Encodes the envelope into the raw request bytes sent to a contract.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.encode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;

    #[test]
    fn test_call_data_carries_params_verbatim() {
        let call = CallData::new("get_note_by_id@v1", &3u64);
        let decoded: CallData = codec::from_bytes_canonical(&call.to_bytes()).unwrap();
        assert_eq!(decoded.method, "get_note_by_id@v1");
        assert_eq!(codec::from_bytes_canonical::<u64>(&decoded.params).unwrap(), 3);
    }
}
