//! Dashboard Report
//!
//! Headline counts for the whole operation plus the tasks that need
//! attention now.

use chrono::{Datelike, NaiveDate};

use crate::analytics::{temporal, ExpenseAggregator};
use crate::config::Settings;
use crate::display::report::{double_separator, separator};
use crate::display::task::format_task_list;
use crate::display::DisplayContext;
use crate::error::FarmdeskResult;
use crate::models::{Money, Task};
use crate::services::{CropService, ExpenseService, FarmService, TaskService};
use crate::storage::Store;

const WIDTH: usize = 72;

/// Dashboard summary as of one day
#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub as_of: NaiveDate,
    pub total_farms: usize,
    /// Crops that have not been harvested
    pub active_crops: usize,
    pub pending_tasks: usize,
    pub overdue_tasks: usize,
    /// Expenses dated in the calendar month of `as_of`
    pub monthly_expenses: Money,
    /// Open tasks that are overdue or due soon, earliest first, capped
    pub urgent_tasks: Vec<Task>,
}

impl DashboardReport {
    /// Generate the dashboard for `today`
    pub fn generate(store: &Store, settings: &Settings, today: NaiveDate) -> FarmdeskResult<Self> {
        let total_farms = FarmService::new(store).count()?;
        let active_crops = CropService::new(store).list_active()?.len();

        let task_service = TaskService::new(store);
        let pending = task_service.list_pending()?;
        let overdue_tasks = pending
            .iter()
            .filter(|t| temporal::is_overdue_on(t.due_date, today))
            .count();

        let mut urgent_tasks =
            task_service.list_urgent_on(settings.dashboard_due_soon_days, today)?;
        urgent_tasks.truncate(settings.urgent_task_limit);

        let expenses = ExpenseService::new(store).list()?;
        let aggregator = ExpenseAggregator::from_expenses(&expenses);
        let monthly_expenses = aggregator.summary_stats(today).this_month;

        Ok(Self {
            as_of: today,
            total_farms,
            active_crops,
            pending_tasks: pending.len(),
            overdue_tasks,
            monthly_expenses,
            urgent_tasks,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, ctx: &DisplayContext) -> String {
        let mut output = String::new();

        output.push_str(&format!("Farm Dashboard: {}\n", ctx.date(self.as_of)));
        output.push_str(&double_separator(WIDTH));
        output.push('\n');
        output.push_str(&format!("{:<28} {:>12}\n", "Farms", self.total_farms));
        output.push_str(&format!("{:<28} {:>12}\n", "Active crops", self.active_crops));
        output.push_str(&format!("{:<28} {:>12}\n", "Pending tasks", self.pending_tasks));
        output.push_str(&format!("{:<28} {:>12}\n", "Overdue tasks", self.overdue_tasks));
        output.push_str(&format!(
            "{:<28} {:>12}\n",
            format!("Expenses ({} {})", month_name(self.as_of), self.as_of.year()),
            ctx.money(self.monthly_expenses)
        ));

        output.push('\n');
        output.push_str("Needs attention\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        if self.urgent_tasks.is_empty() {
            output.push_str("Nothing overdue or due soon.\n");
        } else {
            output.push_str(&format_task_list(&self.urgent_tasks, ctx));
        }

        output
    }
}

fn month_name(date: NaiveDate) -> &'static str {
    crate::analytics::aggregator::MONTH_LABELS[date.month0() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SeedData;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_generate_from_sample() {
        let today = ymd(2025, 5, 20);
        let store = Store::with_seed(SeedData::sample(today)).unwrap();
        let report = DashboardReport::generate(&store, &Settings::default(), today).unwrap();

        assert_eq!(report.total_farms, 2);
        assert_eq!(report.active_crops, 3);
        assert_eq!(report.pending_tasks, 5);
        assert_eq!(report.overdue_tasks, 1);
        // seeds 3,200.00 + fuel 450.75 + labor 1,800.00
        assert_eq!(report.monthly_expenses, Money::from_cents(545_075));

        // overdue, due today and tomorrow; +5 is outside the 2-day window
        let titles: Vec<_> = report.urgent_tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Repair irrigation pump", "Order fertilizer", "Spray for codling moth"]
        );
    }

    #[test]
    fn test_urgent_limit() {
        let today = ymd(2025, 5, 20);
        let store = Store::with_seed(SeedData::sample(today)).unwrap();
        let settings = Settings {
            urgent_task_limit: 1,
            ..Settings::default()
        };
        let report = DashboardReport::generate(&store, &settings, today).unwrap();
        assert_eq!(report.urgent_tasks.len(), 1);
    }

    #[test]
    fn test_empty_store() {
        let today = ymd(2025, 5, 20);
        let store = Store::new();
        let report = DashboardReport::generate(&store, &Settings::default(), today).unwrap();
        assert_eq!(report.total_farms, 0);
        assert!(report.monthly_expenses.is_zero());

        let text = report.format_terminal(&DisplayContext::new(today));
        assert!(text.contains("Farm Dashboard: May 20, 2025"));
        assert!(text.contains("Nothing overdue or due soon."));
        assert!(text.contains("Expenses (May 2025)"));
    }
}
