//! Seed data for the in-memory store
//!
//! A seed file mirrors the dashboard's mock data: one array per collection.
//! Expenses are kept as raw JSON values so that dirty rows can be skipped
//! individually instead of failing the whole file.

use std::path::Path;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::file_io::{read_json_required, write_json_atomic};
use crate::error::FarmdeskResult;
use crate::models::{
    Crop, CropId, CropStatus, Expense, ExpenseCategory, ExpenseId, Farm, FarmId, Money, Task,
    TaskId, TaskPriority,
};

/// Contents of a seed file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub farms: Vec<Farm>,
    pub crops: Vec<Crop>,
    pub tasks: Vec<Task>,
    pub expenses: Vec<Value>,
}

impl SeedData {
    /// Load a seed file; the file must exist
    pub fn load(path: impl AsRef<Path>) -> FarmdeskResult<Self> {
        read_json_required(path)
    }

    /// Write the seed file atomically
    pub fn save(&self, path: impl AsRef<Path>) -> FarmdeskResult<()> {
        write_json_atomic(path, self)
    }

    pub fn is_empty(&self) -> bool {
        self.farms.is_empty()
            && self.crops.is_empty()
            && self.tasks.is_empty()
            && self.expenses.is_empty()
    }

    /// A small demo data set laid out around `today`
    ///
    /// Tasks cover every urgency class (overdue, due today, due soon, later,
    /// completed) and expenses span this month, last month and earlier years.
    pub fn sample(today: NaiveDate) -> Self {
        let days = Duration::days;

        let mut north = Farm::new(FarmId::new(1), "North Ridge Farm");
        north.location = "Ames, Iowa".into();
        north.size_acres = 240.0;
        let mut valley = Farm::new(FarmId::new(2), "Willow Creek Orchard");
        valley.location = "Yakima, Washington".into();
        valley.size_acres = 85.5;

        let mut corn = Crop::new(CropId::new(1), north.id, "Corn")
            .with_dates(today - days(100), today + days(20));
        corn.variety = Some("Pioneer P1197".into());
        corn.status = CropStatus::Growing;
        let mut soy = Crop::new(CropId::new(2), north.id, "Soybeans")
            .with_dates(today - days(10), today + days(110));
        soy.status = CropStatus::Planted;
        let mut apples = Crop::new(CropId::new(3), valley.id, "Apples")
            .with_dates(today - days(160), today + days(40));
        apples.variety = Some("Honeycrisp".into());
        apples.status = CropStatus::Growing;
        let mut wheat = Crop::new(CropId::new(4), north.id, "Winter Wheat")
            .with_dates(today - days(300), today - days(30));
        wheat.status = CropStatus::Harvested;

        let task = |id: u32, farm: FarmId, title: &str, due: i64, priority: TaskPriority| {
            let mut t = Task::new(TaskId::new(id), farm, title).with_due_date(today + days(due));
            t.priority = priority;
            t
        };
        let mut done = task(6, valley.id, "Prune young trees", -5, TaskPriority::Low);
        done.complete();
        let mut spray = task(3, valley.id, "Spray for codling moth", 1, TaskPriority::High);
        spray.crop_id = Some(apples.id);
        let mut scout = task(4, north.id, "Scout soybeans for aphids", 5, TaskPriority::Medium);
        scout.crop_id = Some(soy.id);
        let tasks = vec![
            task(1, north.id, "Repair irrigation pump", -2, TaskPriority::High),
            task(2, north.id, "Order fertilizer", 0, TaskPriority::Medium),
            spray,
            scout,
            task(5, north.id, "Service combine", 30, TaskPriority::Low),
            done,
        ];

        let last_month = first_of_previous_month(today);
        let expense = |id: u32, farm: FarmId, cat: ExpenseCategory, cents: i64, date: NaiveDate, desc: &str| {
            Expense::new(ExpenseId::new(id), farm, cat, Money::from_cents(cents), date)
                .with_description(desc)
        };
        let typed = vec![
            expense(1, north.id, ExpenseCategory::Seeds, 320_000, today.with_day(1).unwrap_or(today), "Soybean seed"),
            expense(2, north.id, ExpenseCategory::Fuel, 45_075, today, "Diesel"),
            expense(3, valley.id, ExpenseCategory::Labor, 180_000, today.with_day(1).unwrap_or(today), "Picking crew"),
            expense(4, north.id, ExpenseCategory::Fertilizer, 98_050, last_month, "Nitrogen"),
            expense(5, valley.id, ExpenseCategory::Maintenance, 27_500, last_month, "Sprayer nozzles"),
            expense(6, north.id, ExpenseCategory::Equipment, 1_250_000, years_back(today, 1), "Used planter"),
            expense(7, valley.id, ExpenseCategory::Seeds, 60_000, years_back(today, 2), "Rootstock"),
            expense(8, north.id, ExpenseCategory::Labor, 220_000, years_back(today, 3), "Harvest help"),
        ];
        let expenses = typed
            .iter()
            .filter_map(|e| serde_json::to_value(e).ok())
            .collect();

        Self {
            farms: vec![north, valley],
            crops: vec![corn, soy, apples, wheat],
            tasks,
            expenses,
        }
    }
}

fn first_of_previous_month(today: NaiveDate) -> NaiveDate {
    let (year, month) = if today.month() == 1 {
        (today.year() - 1, 12)
    } else {
        (today.year(), today.month() - 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(today)
}

fn years_back(today: NaiveDate, years: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(today.year() - years, 6, 15).unwrap_or(today)
}
