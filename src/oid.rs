//! Storage-layer object identifiers.
//!
//! The persistence layer assigns each stored document a 12-byte identifier,
//! rendered in text as a 24-character lowercase hexadecimal string. The
//! validator treats this module as the authority on identifier syntax: it
//! calls [`ObjectId::is_valid`] instead of re-encoding the rules itself.

use std::fmt;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Number of raw bytes in an object id.
pub const OBJECT_ID_LEN: usize = 12;

/// Length of the hexadecimal text form.
pub const OBJECT_ID_HEX_LEN: usize = 2 * OBJECT_ID_LEN;

/// Errors produced when parsing an object id from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectIdError {
    /// Text form was not exactly 24 characters
    #[error("object id must be {OBJECT_ID_HEX_LEN} hex characters, got {0}")]
    InvalidLength(usize),
    /// Text form contained a non-hexadecimal character
    #[error("object id contains non-hexadecimal character '{0}'")]
    InvalidCharacter(char),
}

/// A 12-byte document identifier assigned by the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId {
    bytes: [u8; OBJECT_ID_LEN],
}

impl ObjectId {
    /// Wraps raw identifier bytes.
    pub fn from_bytes(bytes: [u8; OBJECT_ID_LEN]) -> Self {
        Self { bytes }
    }

    /// Returns the raw identifier bytes.
    pub fn bytes(&self) -> &[u8; OBJECT_ID_LEN] {
        &self.bytes
    }

    /// Parses the 24-character hexadecimal text form.
    ///
    /// Both cases are accepted; the canonical rendering is lowercase.
    pub fn parse_str(s: &str) -> Result<Self, ObjectIdError> {
        if s.len() != OBJECT_ID_HEX_LEN {
            return Err(ObjectIdError::InvalidLength(s.len()));
        }
        if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ObjectIdError::InvalidCharacter(c));
        }

        // All characters are ASCII hex digits at this point.
        let raw = s.as_bytes();
        let mut bytes = [0u8; OBJECT_ID_LEN];
        for (byte, pair) in bytes.iter_mut().zip(raw.chunks_exact(2)) {
            *byte = (hex_val(pair[0]) << 4) | hex_val(pair[1]);
        }
        Ok(Self { bytes })
    }

    /// Syntactic validity predicate for the text form.
    ///
    /// This is the check the type validator delegates to for identifier
    /// fields supplied as strings.
    pub fn is_valid(s: &str) -> bool {
        s.len() == OBJECT_ID_HEX_LEN && s.chars().all(|c| c.is_ascii_hexdigit())
    }
}

fn hex_val(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.bytes {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ObjectId::parse_str(&s).map_err(D::Error::custom)
    }
}
