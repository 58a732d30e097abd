use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// Twelve-byte document identifier with the layout of a MongoDB ObjectId.
/// IDs are assigned by the store adapters.
///
/// The textual form is 24 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId([u8; 12]);

impl DocumentId {
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    pub const fn bytes(&self) -> [u8; 12] {
        self.0
    }

    /// Parse the 24-hex-character form.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let mut bytes = [0u8; 12];
        hex::decode_to_slice(raw, &mut bytes)
            .map_err(|_| DomainError::InvalidIdentifier(raw.to_string()))?;
        Ok(Self(bytes))
    }
}

impl FromStr for DocumentId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
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
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let id = DocumentId::parse("65a4f1c2e4b0a1b2c3d4e5f6").unwrap();
        assert_eq!(id.to_string(), "65a4f1c2e4b0a1b2c3d4e5f6");
        assert_eq!(id.bytes()[0], 0x65);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let id: DocumentId = "65A4F1C2E4B0A1B2C3D4E5F6".parse().unwrap();
        assert_eq!(id.to_string(), "65a4f1c2e4b0a1b2c3d4e5f6");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for raw in ["not-an-id", "", "65a4f1c2e4b0a1b2c3d4e5f", "65a4f1c2e4b0a1b2c3d4e5f6aa"] {
            let err = DocumentId::parse(raw).unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidIdentifier(ref s) if s == raw),
                "unexpected error for {raw:?}: {err}"
            );
        }
    }

    #[test]
    fn test_bytes_round_trip() {
        let bytes = [0x65, 0xa4, 0xf1, 0xc2, 0, 1, 2, 3, 4, 5, 6, 0xff];
        let id = DocumentId::from_bytes(bytes);
        assert_eq!(id.bytes(), bytes);
        assert_eq!(id.to_string(), "65a4f1c200010203040506ff");
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let id = DocumentId::parse("65a4f1c2e4b0a1b2c3d4e5f6").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"65a4f1c2e4b0a1b2c3d4e5f6\"");
        let back: DocumentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
