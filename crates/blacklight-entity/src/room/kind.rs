//! Room type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of room offered by the lounge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "room_type", rename_all = "lowercase")]
pub enum RoomType {
    #[serde(rename = "VIP")]
    Vip,
    Standard,
    Streaming,
    Cinema,
    Matches,
}

impl RoomType {
    /// Return the type as exposed on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vip => "VIP",
            Self::Standard => "Standard",
            Self::Streaming => "Streaming",
            Self::Cinema => "Cinema",
            Self::Matches => "Matches",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vip_wire_name() {
        assert_eq!(serde_json::to_string(&RoomType::Vip).unwrap(), "\"VIP\"");
        let parsed: RoomType = serde_json::from_str("\"Cinema\"").unwrap();
        assert_eq!(parsed, RoomType::Cinema);
    }
}
