//! Entry-point selector derivation.
//!
//! A selector is the keccak-256 of the ASCII function name truncated to
//! 250 bits, so it always fits in an L2 field element.

use alloy::primitives::{keccak256, B256, U256};
use std::fmt;

use crate::messaging::types::{MessagingError, MessagingResult};

/// Names that resolve to the zero selector.
const DEFAULT_ENTRY_POINTS: [&str; 2] = ["__default__", "__l1_default__"];

/// A 250-bit function selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector(U256);

impl Selector {
    /// Derive the selector for a human-readable function name.
    pub fn from_name(name: &str) -> MessagingResult<Self> {
        if name.is_empty() {
            return Err(MessagingError::InvalidSelectorName {
                name: name.to_string(),
                reason: "name is empty",
            });
        }
        if !name.is_ascii() {
            return Err(MessagingError::InvalidSelectorName {
                name: name.to_string(),
                reason: "name must be ASCII",
            });
        }
        if DEFAULT_ENTRY_POINTS.contains(&name) {
            return Ok(Self(U256::ZERO));
        }

        let mut hash = keccak256(name.as_bytes()).0;
        hash[0] &= 0x03;
        Ok(Self(U256::from_be_bytes(hash)))
    }

    pub fn as_u256(&self) -> U256 {
        self.0
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", B256::from(self.0.to_be_bytes::<32>()))
    }
}
