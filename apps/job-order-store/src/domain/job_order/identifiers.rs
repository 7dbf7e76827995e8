//! Job order identifiers.
//!
//! Ids are plain strings on the wire. Two generators are offered: a short
//! base-36 id matching what existing clients produce, and a UUID v4 for
//! callers that need practical global uniqueness.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of ids produced by [`JobOrderId::generate`].
pub const SHORT_ID_LEN: usize = 9;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Identifier of a job order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobOrderId(String);

impl JobOrderId {
    /// Create an identifier from a string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generate a short random base-36 identifier.
    ///
    /// Drawn from a non-cryptographic source with no collision check.
    #[must_use]
    pub fn generate() -> Self {
        let upper = 36_u64.pow(SHORT_ID_LEN as u32);
        let value = rand::rng().random_range(0..upper);
        Self(encode_base36(value, SHORT_ID_LEN))
    }

    /// Generate an identifier from a UUID v4.
    #[must_use]
    pub fn generate_uuid() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Render `value` as exactly `width` lowercase base-36 digits.
///
/// Higher digits beyond `width` are dropped; shorter values are zero padded.
fn encode_base36(mut value: u64, width: usize) -> String {
    let mut digits: Vec<char> = (0..width)
        .map(|_| {
            let digit = BASE36_DIGITS[(value % 36) as usize];
            value /= 36;
            char::from(digit)
        })
        .collect();
    digits.reverse();
    digits.into_iter().collect()
}

impl fmt::Display for JobOrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for JobOrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for JobOrderId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for JobOrderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
