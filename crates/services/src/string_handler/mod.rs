// Path: crates/services/src/string_handler/mod.rs
//! String primitives shared by the contracts.

use dnote_api::contract::{Contract, ContractHost};
use dnote_types::codec;
use dnote_types::error::TransactionError;
use dnote_types::service_configs::MethodPermission;
use parity_scale_codec::{Decode, Encode};
use std::any::Any;

pub const EQUALS: &str = "equals@v1";
pub const CONCAT: &str = "concat@v1";

/// Byte-wise string equality.
pub fn equals(a: &str, b: &str) -> bool {
    a == b
}

/// Concatenates `a` and `b`. The empty string is an identity on both sides.
pub fn concat(a: &str, b: &str) -> String {
    let mut out = String::with_capacity(a.len() + b.len());
    out.push_str(a);
    out.push_str(b);
    out
}

#[derive(Encode, Decode, Debug, Clone, PartialEq, Eq)]
pub struct StringPairParams {
    pub a: String,
    pub b: String,
}

/// The string primitives exposed as a stateless library contract.
#[derive(Debug, Clone, Default)]
pub struct StringHandler;

impl Contract for StringHandler {
    fn id(&self) -> &str {
        "string_handler"
    }

    fn abi_version(&self) -> u32 {
        1
    }

    fn state_schema(&self) -> &str {
        "none"
    }

    fn abi(&self) -> &'static [(&'static str, MethodPermission)] {
        &[(EQUALS, MethodPermission::User), (CONCAT, MethodPermission::User)]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn handle_call(
        &self,
        _host: &mut dyn ContractHost,
        method: &str,
        params: &[u8],
    ) -> Result<Vec<u8>, TransactionError> {
        match method {
            EQUALS => {
                let p: StringPairParams = codec::from_bytes_canonical(params)?;
                Ok(equals(&p.a, &p.b).encode())
            }
            CONCAT => {
                let p: StringPairParams = codec::from_bytes_canonical(params)?;
                Ok(concat(&p.a, &p.b).encode())
            }
            _ => Err(TransactionError::Unsupported(format!(
                "StringHandler does not support method '{}'",
                method
            ))),
        }
    }
}
