//! Chart shape selection
//!
//! Two independent flags pick one of four shapes. The result is plain data;
//! rendering happens elsewhere.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::aggregator::{
    month_labels, pie_values, year_labels, CategorySeries, ExpenseAggregator, PieSlice,
};
use crate::models::ExpenseCategory;

/// Message carried by [`ChartData::NoData`]
pub const NO_DATA_MESSAGE: &str = "No expense data available";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Pie,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bar => write!(f, "bar"),
            Self::Pie => write!(f, "pie"),
        }
    }
}

impl fmt::Display for ChartPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

impl FromStr for ChartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bar" => Ok(Self::Bar),
            "pie" => Ok(Self::Pie),
            other => Err(format!("Unknown chart type: {}", other)),
        }
    }
}

impl FromStr for ChartPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(format!("Unknown chart period: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub chart_type: ChartType,
    pub period: ChartPeriod,
}

impl ChartConfig {
    pub fn new(chart_type: ChartType, period: ChartPeriod) -> Self {
        Self { chart_type, period }
    }
}

/// Chart-ready view of the expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ChartData {
    /// Buckets along `labels`, one series per category
    Bar {
        labels: Vec<String>,
        series: Vec<CategorySeries>,
    },
    /// Proportional view over every expense
    Pie { slices: Vec<PieSlice> },
    NoData { message: String },
}

impl ChartData {
    fn no_data() -> Self {
        Self::NoData {
            message: NO_DATA_MESSAGE.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoData { .. })
    }
}

impl ExpenseAggregator {
    /// Build the chart for `config` as seen on day `now`
    ///
    /// Monthly bars cover the calendar year of `now`; yearly bars cover the
    /// five-year window ending there. Pie charts use the all-time category
    /// totals for either period.
    pub fn chart_data(&self, config: ChartConfig, now: NaiveDate) -> ChartData {
        if self.is_empty() {
            return ChartData::no_data();
        }

        let year = now.year();
        match (config.chart_type, config.period) {
            (ChartType::Bar, ChartPeriod::Monthly) => ChartData::Bar {
                labels: month_labels(),
                series: self.monthly_series(year, &ExpenseCategory::ALL),
            },
            (ChartType::Bar, ChartPeriod::Yearly) => ChartData::Bar {
                labels: year_labels(year),
                series: self.yearly_series(year, &ExpenseCategory::ALL),
            },
            (ChartType::Pie, _) => {
                let slices = pie_values(&self.category_summary());
                if slices.is_empty() {
                    ChartData::no_data()
                } else {
                    ChartData::Pie { slices }
                }
            }
        }
    }
}
