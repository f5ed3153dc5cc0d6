//! # Document Identifiers
//!
//! Every document in a collection is keyed by a [`DocumentId`]: twelve bytes laid out as
//!
//! | bytes | content |
//! |-------|---------|
//! | 0..4  | seconds since the Unix epoch (big-endian) |
//! | 4..9  | random bytes, fixed for the lifetime of one [`IdGenerator`] |
//! | 9..12 | per-generator counter (big-endian) |
//!
//! The textual form is 24 lowercase hex characters. Because each collection actor owns
//! exactly one generator, the ids it hands out compare in creation order, which is what
//! lets [`Find`](crate::ResourceRequest::Find) return documents "oldest first" simply by
//! walking the id-ordered store.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

const ID_LEN: usize = 12;
const COUNTER_MAX: u32 = 0x00FF_FFFF;

/// Opaque, totally ordered identifier for a stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId([u8; ID_LEN]);

/// The string was not a structurally valid [`DocumentId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid document id: expected 24 hex characters")]
pub struct InvalidDocumentId(pub String);

impl DocumentId {
    /// Seconds-since-epoch component.
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }
}

impl From<[u8; ID_LEN]> for DocumentId {
    fn from(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for DocumentId {
    type Err = InvalidDocumentId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ID_LEN * 2 {
            return Err(InvalidDocumentId(s.to_string()));
        }
        let mut bytes = [0u8; ID_LEN];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| InvalidDocumentId(s.to_string()))?;
        Ok(Self(bytes))
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Issues strictly increasing [`DocumentId`]s for one collection.
#[derive(Debug)]
pub struct IdGenerator {
    entropy: [u8; 5],
    last_secs: u32,
    counter: u32,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            entropy: rand::random(),
            last_secs: 0,
            counter: 0,
        }
    }

    /// Produces the next id.
    ///
    /// A clock that moves backwards is clamped to the last seen second, and a counter
    /// overflow within one second borrows the next second, so the sequence never decreases.
    pub fn next_id(&mut self) -> DocumentId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or(0);

        if now > self.last_secs {
            self.last_secs = now;
            self.counter = 0;
        } else if self.counter == COUNTER_MAX {
            self.last_secs = self.last_secs.wrapping_add(1);
            self.counter = 0;
        } else {
            self.counter += 1;
        }

        let mut bytes = [0u8; ID_LEN];
        bytes[0..4].copy_from_slice(&self.last_secs.to_be_bytes());
        bytes[4..9].copy_from_slice(&self.entropy);
        bytes[9..12].copy_from_slice(&self.counter.to_be_bytes()[1..4]);
        DocumentId(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse_agree() {
        let mut ids = IdGenerator::new();
        let id = ids.next_id();
        let text = id.to_string();
        assert_eq!(text.len(), 24);
        assert!(text.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(text.parse::<DocumentId>().unwrap(), id);
    }

    #[test]
    fn test_parse_accepts_uppercase_hex() {
        let id: DocumentId = "65A1B2C3D4E5F60718293A4B".parse().unwrap();
        assert_eq!(id.to_string(), "65a1b2c3d4e5f60718293a4b");
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for bad in [
            "",
            "abc",
            "65a1b2c3d4e5f60718293a4",
            "65a1b2c3d4e5f60718293a4bc",
            "zza1b2c3d4e5f60718293a4b",
            "not-an-object-id-at-all!",
        ] {
            let err = bad.parse::<DocumentId>().unwrap_err();
            assert_eq!(err, InvalidDocumentId(bad.to_string()));
        }
    }

    #[test]
    fn test_generator_is_strictly_increasing() {
        let mut ids = IdGenerator::new();
        let mut previous = ids.next_id();
        for _ in 0..10_000 {
            let next = ids.next_id();
            assert!(next > previous, "{next} should sort after {previous}");
            previous = next;
        }
    }

    #[test]
    fn test_counter_overflow_borrows_next_second() {
        let mut ids = IdGenerator::new();
        let first = ids.next_id();
        ids.counter = COUNTER_MAX;
        let rolled = ids.next_id();
        assert!(rolled > first);
        assert_eq!(rolled.timestamp(), first.timestamp() + 1);
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let id: DocumentId = "65a1b2c3d4e5f60718293a4b".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"65a1b2c3d4e5f60718293a4b\"");
        let back: DocumentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<DocumentId>("\"xyz\"").is_err());
    }
}
