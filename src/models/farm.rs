//! Farm model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::FarmId;

/// A farm owned or managed by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farm {
    #[serde(alias = "Id")]
    pub id: FarmId,

    pub name: String,

    #[serde(default)]
    pub location: String,

    /// Farm size in acres
    #[serde(default)]
    pub size_acres: f64,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Farm {
    pub fn new(id: FarmId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            location: String::new(),
            size_acres: 0.0,
            created_at: Utc::now(),
        }
    }

    pub fn validate(&self) -> Result<(), FarmValidationError> {
        if self.name.trim().is_empty() {
            return Err(FarmValidationError::EmptyName);
        }
        if !self.size_acres.is_finite() || self.size_acres < 0.0 {
            return Err(FarmValidationError::InvalidSize(self.size_acres));
        }
        Ok(())
    }
}

impl fmt::Display for Farm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The user-editable fields of a farm
#[derive(Debug, Clone, PartialEq)]
pub struct NewFarm {
    pub name: String,
    pub location: String,
    pub size_acres: f64,
}

impl NewFarm {
    pub fn new(name: impl Into<String>, location: impl Into<String>, size_acres: f64) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            size_acres,
        }
    }

    pub fn into_farm(self, id: FarmId) -> Farm {
        let mut farm = Farm::new(id, self.name.trim());
        farm.location = self.location.trim().to_string();
        farm.size_acres = self.size_acres;
        farm
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FarmValidationError {
    EmptyName,
    InvalidSize(f64),
}

impl fmt::Display for FarmValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Farm name cannot be empty"),
            Self::InvalidSize(size) => write!(f, "Invalid farm size: {}", size),
        }
    }
}

impl std::error::Error for FarmValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        let mut farm = NewFarm::new("  Green Acres ", "Iowa", 120.0).into_farm(FarmId::new(1));
        assert_eq!(farm.name, "Green Acres");
        assert!(farm.validate().is_ok());

        farm.size_acres = -3.0;
        assert!(matches!(
            farm.validate(),
            Err(FarmValidationError::InvalidSize(_))
        ));

        farm.size_acres = 3.0;
        farm.name = " ".into();
        assert_eq!(farm.validate(), Err(FarmValidationError::EmptyName));
    }

    #[test]
    fn test_deserialize_mock_shape() {
        let farm: Farm = serde_json::from_str(
            r#"{"Id": 2, "name": "Sunny Fields", "location": "Kansas", "sizeAcres": 80.5}"#,
        )
        .unwrap();
        assert_eq!(farm.id, FarmId::new(2));
        assert_eq!(farm.size_acres, 80.5);
    }
}
