//! Strongly-typed ID wrappers for all entity types
//!
//! Every collection is keyed by a positive integer. Wrapping it per entity
//! keeps a farm id from being passed where an expense id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Get the underlying integer
            pub const fn get(&self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            /// Accepts both "12" and the display form "exp-12"
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(FarmId, "farm-");
define_id!(CropId, "crop-");
define_id!(TaskId, "task-");
define_id!(ExpenseId, "exp-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(FarmId::new(3).to_string(), "farm-3");
        assert_eq!(ExpenseId::new(12).to_string(), "exp-12");
    }

    #[test]
    fn test_id_parse_accepts_both_forms() {
        assert_eq!("7".parse::<TaskId>().unwrap(), TaskId::new(7));
        assert_eq!("task-7".parse::<TaskId>().unwrap(), TaskId::new(7));
        assert!("task-x".parse::<TaskId>().is_err());
    }

    #[test]
    fn test_id_serialization_is_transparent() {
        let json = serde_json::to_string(&CropId::new(4)).unwrap();
        assert_eq!(json, "4");
        let id: CropId = serde_json::from_str("9").unwrap();
        assert_eq!(id.get(), 9);
    }
}
