//! Identity types for neurons and connections

use crate::CircuitDataError;
use core::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Neuron ID (unique within a circuit; catalog ids are worm neuron names).
///
/// Worm neuron names are short ASCII strings ("AVAL", "SMDDL"), so the id is
/// stored inline as fixed bytes rather than a heap string, which keeps ids
/// `Copy` and lets the engine pass them around freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeuronId {
    bytes: [u8; NeuronId::MAX_LENGTH],
}

impl NeuronId {
    /// Ids longer than this are rejected at the record boundary.
    pub const MAX_LENGTH: usize = 8;

    /// Parse an id from a name string.
    ///
    /// Accepts 1..=8 printable ASCII characters with no whitespace.
    pub fn try_from_name(name: &str) -> Result<Self, CircuitDataError> {
        if name.is_empty() {
            return Err(CircuitDataError::InvalidNeuronId(
                name.to_string(),
                "id must not be empty",
            ));
        }
        if name.len() > Self::MAX_LENGTH {
            return Err(CircuitDataError::InvalidNeuronId(
                name.to_string(),
                "id exceeds 8 bytes",
            ));
        }
        if !name.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(CircuitDataError::InvalidNeuronId(
                name.to_string(),
                "id must be printable ASCII without whitespace",
            ));
        }
        let mut bytes = [0u8; Self::MAX_LENGTH];
        bytes[..name.len()].copy_from_slice(name.as_bytes());
        Ok(NeuronId { bytes })
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        let end = self
            .bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(Self::MAX_LENGTH);
        // Bytes are validated as ASCII at construction.
        core::str::from_utf8(&self.bytes[..end]).unwrap_or("")
    }
}

impl fmt::Display for NeuronId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for NeuronId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NeuronId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        NeuronId::try_from_name(&name).map_err(serde::de::Error::custom)
    }
}

/// Connection identity: the ordered `(from, to)` endpoint pair.
///
/// Kind and weight are deliberately NOT part of connection identity; two
/// circuits that disagree only on those attributes hold the "same"
/// connection as far as set membership is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConnectionKey {
    pub from: NeuronId,
    pub to: NeuronId,
}

impl ConnectionKey {
    pub fn new(from: NeuronId, to: NeuronId) -> Self {
        ConnectionKey { from, to }
    }
}

impl fmt::Display for ConnectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trips_through_str() {
        let id = NeuronId::try_from_name("SMDDL").unwrap();
        assert_eq!(id.as_str(), "SMDDL");
        assert_eq!(id.to_string(), "SMDDL");
    }

    #[test]
    fn id_rejects_bad_names() {
        assert!(NeuronId::try_from_name("").is_err());
        assert!(NeuronId::try_from_name("WAY_TOO_LONG_ID").is_err());
        assert!(NeuronId::try_from_name("AV L").is_err());
    }

    #[test]
    fn key_display_uses_arrow() {
        let a = NeuronId::try_from_name("ALML").unwrap();
        let b = NeuronId::try_from_name("AVAL").unwrap();
        assert_eq!(ConnectionKey::new(a, b).to_string(), "ALML->AVAL");
    }
}
