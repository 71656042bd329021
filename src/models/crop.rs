//! Crop model
//!
//! A crop is a planting on a farm. Its growth stage is derived from the
//! planting and expected harvest dates, see `analytics::temporal`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::dates;
use super::ids::{CropId, FarmId};

/// Lifecycle status recorded by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CropStatus {
    #[default]
    Planted,
    Growing,
    Ready,
    Harvested,
}

impl fmt::Display for CropStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planted => write!(f, "Planted"),
            Self::Growing => write!(f, "Growing"),
            Self::Ready => write!(f, "Ready"),
            Self::Harvested => write!(f, "Harvested"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    #[serde(alias = "Id")]
    pub id: CropId,

    pub farm_id: FarmId,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variety: Option<String>,

    #[serde(default, with = "dates::lenient_option")]
    pub planting_date: Option<NaiveDate>,

    #[serde(default, with = "dates::lenient_option")]
    pub expected_harvest_date: Option<NaiveDate>,

    #[serde(default)]
    pub status: CropStatus,

    #[serde(default)]
    pub notes: String,
}

impl Crop {
    pub fn new(id: CropId, farm_id: FarmId, name: impl Into<String>) -> Self {
        Self {
            id,
            farm_id,
            name: name.into(),
            variety: None,
            planting_date: None,
            expected_harvest_date: None,
            status: CropStatus::Planted,
            notes: String::new(),
        }
    }

    /// Builder-style setter for both growth dates
    pub fn with_dates(mut self, planting: NaiveDate, expected_harvest: NaiveDate) -> Self {
        self.planting_date = Some(planting);
        self.expected_harvest_date = Some(expected_harvest);
        self
    }

    /// A crop counts as active until it is harvested
    pub fn is_active(&self) -> bool {
        self.status != CropStatus::Harvested
    }

    pub fn validate(&self) -> Result<(), CropValidationError> {
        if self.name.trim().is_empty() {
            return Err(CropValidationError::EmptyName);
        }
        Ok(())
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.variety {
            Some(variety) => write!(f, "{} ({})", self.name, variety),
            None => write!(f, "{}", self.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CropValidationError {
    EmptyName,
}

impl fmt::Display for CropValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Crop name cannot be empty"),
        }
    }
}

impl std::error::Error for CropValidationError {}
