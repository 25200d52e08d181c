// ── Core identity types ──
//
// EntityId is the key of every store. The catalog server hands out
// opaque string ids (UUIDs, fixture keys); they are kept byte-for-byte
// so the id sent back in a URL path is exactly the one received.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── EntityId ────────────────────────────────────────────────────────

/// Canonical identifier for any catalog entity.
///
/// Serializes as a plain string. Comparison is exact, so ids that
/// differ only in case are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EntityId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_uuid_keeps_its_case() {
        let raw = "550E8400-E29B-41D4-A716-446655440000";
        let id: EntityId = serde_json::from_str(&format!("\"{raw}\"")).unwrap();
        assert_eq!(id.to_string(), raw);
        assert_eq!(id.as_str(), raw);
        assert_ne!(id, EntityId::from(raw.to_lowercase()));
    }

    #[test]
    fn display_round_trips_input() {
        assert_eq!(EntityId::from("c1").to_string(), "c1");
        assert_eq!("k-new-1".parse::<EntityId>().unwrap(), EntityId::from("k-new-1"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&EntityId::from("g1")).unwrap();
        assert_eq!(json, "\"g1\"");
    }
}
