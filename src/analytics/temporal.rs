//! Relative-date classification
//!
//! Everything here works on calendar days. Each check comes in two forms: an
//! `*_on` function that takes the reference day explicitly, and a wall-clock
//! wrapper that uses today's local date.

use chrono::format::{Item, StrftimeItems};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::fmt;

use crate::models::Task;

/// Lookahead window used when no threshold is configured
pub const DEFAULT_DUE_SOON_DAYS: i64 = 3;

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// True when `due` is a day before `today`. Due today is not overdue.
pub fn is_overdue_on(due: Option<NaiveDate>, today: NaiveDate) -> bool {
    matches!(due, Some(d) if d < today)
}

pub fn is_overdue(due: Option<NaiveDate>) -> bool {
    is_overdue_on(due, today())
}

/// True when `due` falls within `[today, today + threshold_days]`
pub fn is_due_soon_on(due: Option<NaiveDate>, threshold_days: i64, today: NaiveDate) -> bool {
    match due {
        Some(d) => {
            let ahead = days_between(today, d);
            ahead >= 0 && ahead <= threshold_days
        }
        None => false,
    }
}

pub fn is_due_soon(due: Option<NaiveDate>, threshold_days: i64) -> bool {
    is_due_soon_on(due, threshold_days, today())
}

/// An open task that is overdue or due within the window
pub fn is_urgent_on(task: &Task, threshold_days: i64, today: NaiveDate) -> bool {
    !task.completed
        && (is_due_soon_on(task.due_date, threshold_days, today)
            || is_overdue_on(task.due_date, today))
}

pub fn is_urgent(task: &Task, threshold_days: i64) -> bool {
    is_urgent_on(task, threshold_days, today())
}

/// Coarse crop lifecycle stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthStage {
    Unknown,
    Planted,
    Growing,
    Ready,
}

impl fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Planted => write!(f, "planted"),
            Self::Growing => write!(f, "growing"),
            Self::Ready => write!(f, "ready"),
        }
    }
}

/// Growth stage plus rounded percentage of the planting-to-harvest span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GrowthProgress {
    pub stage: GrowthStage,
    /// 0..=100
    pub progress: u8,
}

impl GrowthProgress {
    pub const UNKNOWN: Self = Self {
        stage: GrowthStage::Unknown,
        progress: 0,
    };
}

/// Classify a crop's growth from its planting and expected harvest dates
///
/// When the harvest date is on or before the planting date the span is
/// degenerate: progress is 100 once the planting day has arrived, else 0.
pub fn growth_stage_on(
    planting: Option<NaiveDate>,
    harvest: Option<NaiveDate>,
    today: NaiveDate,
) -> GrowthProgress {
    let (Some(planting), Some(harvest)) = (planting, harvest) else {
        return GrowthProgress::UNKNOWN;
    };

    let total_days = days_between(planting, harvest);
    let days_passed = days_between(planting, today);

    let percent = if total_days <= 0 {
        if days_passed >= 0 {
            100.0
        } else {
            0.0
        }
    } else {
        (days_passed as f64 / total_days as f64 * 100.0).clamp(0.0, 100.0)
    };

    let stage = if percent > 75.0 {
        GrowthStage::Ready
    } else if percent > 25.0 {
        GrowthStage::Growing
    } else {
        GrowthStage::Planted
    };

    GrowthProgress {
        stage,
        progress: percent.round() as u8,
    }
}

pub fn growth_stage(planting: Option<NaiveDate>, harvest: Option<NaiveDate>) -> GrowthProgress {
    growth_stage_on(planting, harvest, today())
}

/// Days from `today` until harvest; negative once the date has passed
pub fn days_until_harvest_on(
    planting: Option<NaiveDate>,
    harvest: Option<NaiveDate>,
    today: NaiveDate,
) -> Option<i64> {
    planting?;
    harvest.map(|h| days_between(today, h))
}

pub fn days_until_harvest(planting: Option<NaiveDate>, harvest: Option<NaiveDate>) -> Option<i64> {
    days_until_harvest_on(planting, harvest, today())
}

/// Human phrasing of a date relative to `today`
///
/// "Today", "Tomorrow", "3 days ago", "in about 1 month", ...
pub fn relative_label_on(date: NaiveDate, today: NaiveDate) -> String {
    match days_between(today, date) {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        d if d < 0 => format!("{} ago", distance(d.unsigned_abs())),
        d => format!("in {}", distance(d.unsigned_abs())),
    }
}

pub fn relative_label(date: NaiveDate) -> String {
    relative_label_on(date, today())
}

fn distance(days: u64) -> String {
    if days < 30 {
        return if days == 1 {
            "1 day".to_string()
        } else {
            format!("{} days", days)
        };
    }
    if days < 365 {
        return match (days / 30).clamp(1, 11) {
            1 => "about 1 month".to_string(),
            months => format!("{} months", months),
        };
    }
    match days / 365 {
        1 => "about 1 year".to_string(),
        years => format!("{} years", years),
    }
}

/// Format a date with a strftime pattern, falling back to ISO on a bad pattern
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return date.format("%Y-%m-%d").to_string();
    }
    date.format(pattern).to_string()
}

/// Like [`format_date`], rendering a missing date as an empty string
pub fn format_optional_date(date: Option<NaiveDate>, pattern: &str) -> String {
    date.map(|d| format_date(d, pattern)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FarmId, TaskId};
    use chrono::Duration;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const TODAY: (i32, u32, u32) = (2024, 6, 15);

    fn today_fixed() -> NaiveDate {
        ymd(TODAY.0, TODAY.1, TODAY.2)
    }

    fn offset(days: i64) -> Option<NaiveDate> {
        Some(today_fixed() + Duration::days(days))
    }

    #[test]
    fn test_overdue() {
        let today = today_fixed();
        assert!(is_overdue_on(offset(-1), today));
        assert!(is_overdue_on(offset(-400), today));
        assert!(!is_overdue_on(offset(0), today));
        assert!(!is_overdue_on(offset(1), today));
        assert!(!is_overdue_on(None, today));
    }

    #[test]
    fn test_due_soon_window() {
        let today = today_fixed();
        assert!(is_due_soon_on(offset(0), 3, today));
        assert!(is_due_soon_on(offset(3), 3, today));
        assert!(!is_due_soon_on(offset(4), 3, today));
        assert!(!is_due_soon_on(offset(-1), 3, today));
        assert!(!is_due_soon_on(None, 3, today));
        assert!(!is_due_soon_on(offset(0), -1, today));
    }

    #[test]
    fn test_due_soon_never_reports_past_days() {
        let today = today_fixed();
        for back in 1..30 {
            let due = offset(-back);
            assert!(is_overdue_on(due, today));
            assert!(!is_due_soon_on(due, 365, today));
        }
    }

    #[test]
    fn test_tomorrow_is_due_soon_not_overdue() {
        let today = today_fixed();
        assert!(is_due_soon_on(offset(1), 2, today));
        assert!(!is_overdue_on(offset(1), today));
    }

    #[test]
    fn test_wall_clock_forms() {
        let now = today();
        assert!(!is_overdue(Some(now)));
        assert!(is_due_soon(Some(now), DEFAULT_DUE_SOON_DAYS));
        assert!(is_overdue(now.pred_opt()));
    }

    #[test]
    fn test_urgent_task() {
        let today = today_fixed();
        let mut task = Task::new(TaskId::new(1), FarmId::new(1), "Feed cattle");
        assert!(!is_urgent_on(&task, 2, today));

        task.due_date = offset(-3);
        assert!(is_urgent_on(&task, 2, today));

        task.due_date = offset(2);
        assert!(is_urgent_on(&task, 2, today));

        task.due_date = offset(3);
        assert!(!is_urgent_on(&task, 2, today));

        task.due_date = offset(-3);
        task.complete();
        assert!(!is_urgent_on(&task, 2, today));
    }

    #[test]
    fn test_growth_stage_missing_dates() {
        let today = today_fixed();
        assert_eq!(growth_stage_on(None, offset(10), today), GrowthProgress::UNKNOWN);
        assert_eq!(growth_stage_on(offset(-10), None, today), GrowthProgress::UNKNOWN);
    }

    #[test]
    fn test_growth_stage_thresholds() {
        let today = today_fixed();

        // 10 of 100 days
        let p = growth_stage_on(offset(-10), offset(90), today);
        assert_eq!(p, GrowthProgress { stage: GrowthStage::Planted, progress: 10 });

        // exactly 25% stays planted
        let p = growth_stage_on(offset(-25), offset(75), today);
        assert_eq!(p.stage, GrowthStage::Planted);

        let p = growth_stage_on(offset(-50), offset(50), today);
        assert_eq!(p, GrowthProgress { stage: GrowthStage::Growing, progress: 50 });

        // exactly 75% stays growing
        let p = growth_stage_on(offset(-75), offset(25), today);
        assert_eq!(p.stage, GrowthStage::Growing);

        let p = growth_stage_on(offset(-80), offset(20), today);
        assert_eq!(p, GrowthProgress { stage: GrowthStage::Ready, progress: 80 });
    }

    #[test]
    fn test_growth_progress_is_clamped() {
        let today = today_fixed();
        let before = growth_stage_on(offset(5), offset(50), today);
        assert_eq!(before, GrowthProgress { stage: GrowthStage::Planted, progress: 0 });

        let after = growth_stage_on(offset(-200), offset(-100), today);
        assert_eq!(after, GrowthProgress { stage: GrowthStage::Ready, progress: 100 });
    }

    #[test]
    fn test_growth_stage_degenerate_span() {
        let today = today_fixed();

        // zero-length span, planted today or earlier
        let p = growth_stage_on(offset(0), offset(0), today);
        assert_eq!(p, GrowthProgress { stage: GrowthStage::Ready, progress: 100 });
        let p = growth_stage_on(offset(-3), offset(-3), today);
        assert_eq!(p.progress, 100);

        // zero-length span in the future
        let p = growth_stage_on(offset(4), offset(4), today);
        assert_eq!(p, GrowthProgress { stage: GrowthStage::Planted, progress: 0 });

        // harvest before planting
        let p = growth_stage_on(offset(-1), offset(-10), today);
        assert_eq!(p.progress, 100);
    }

    #[test]
    fn test_days_until_harvest() {
        let today = today_fixed();
        assert_eq!(days_until_harvest_on(offset(-30), offset(12), today), Some(12));
        assert_eq!(days_until_harvest_on(offset(-30), offset(-2), today), Some(-2));
        assert_eq!(days_until_harvest_on(None, offset(12), today), None);
        assert_eq!(days_until_harvest_on(offset(-30), None, today), None);
    }

    #[test]
    fn test_relative_label() {
        let today = today_fixed();
        let label = |d: i64| relative_label_on(today + Duration::days(d), today);

        assert_eq!(label(0), "Today");
        assert_eq!(label(1), "Tomorrow");
        assert_eq!(label(-1), "1 day ago");
        assert_eq!(label(5), "in 5 days");
        assert_eq!(label(-40), "about 1 month ago");
        assert_eq!(label(100), "in 3 months");
        assert_eq!(label(362), "in 11 months");
        assert_eq!(label(-400), "about 1 year ago");
        assert_eq!(label(800), "in 2 years");
    }

    #[test]
    fn test_format_date() {
        let date = ymd(2024, 3, 5);
        assert_eq!(format_date(date, "%b %-d, %Y"), "Mar 5, 2024");
        assert_eq!(format_date(date, "%Q"), "2024-03-05");
        assert_eq!(format_optional_date(None, "%Y"), "");
    }
}
