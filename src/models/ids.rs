//! Strongly-typed ID wrappers for accounts and ledger entries
//!
//! Newtype wrappers keep an account id from being passed where an entry id
//! is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from a full UUID string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
            }

            /// Short form shown in tables, e.g. `acc-1a2b3c4d`
            pub fn short(&self) -> String {
                format!("{}{}", $display_prefix, &self.0.simple().to_string()[..8])
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(AccountId, "acc-");
define_id!(EntryId, "ent-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_round_trips_through_from_str() {
        let id = AccountId::new();
        let shown = id.to_string();
        assert!(shown.starts_with("acc-"));
        assert_eq!(shown.parse::<AccountId>().unwrap(), id);
    }

    #[test]
    fn test_short_form() {
        let id = EntryId::new();
        let short = id.short();
        assert!(short.starts_with("ent-"));
        assert_eq!(short.len(), 12);
    }

    #[test]
    fn test_parse_bare_uuid() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: EntryId = uuid_str.parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
        assert_eq!(EntryId::parse(uuid_str).unwrap(), id);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!("acc-not-a-uuid".parse::<AccountId>().is_err());
    }

    #[test]
    fn test_serialization_is_transparent() {
        let id = AccountId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
        let back: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
