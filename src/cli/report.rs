//! CLI commands for reports
//!
//! Provides commands for expense statistics and chart data, with optional
//! CSV export.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use clap::{Subcommand, ValueEnum};

use super::expense::build_filter;
use crate::analytics::{temporal, ChartConfig, ChartPeriod, ChartType};
use crate::config::Settings;
use crate::display::DisplayContext;
use crate::error::{FarmdeskError, FarmdeskResult};
use crate::reports::ExpenseReport;
use crate::storage::Store;

/// Chart shape options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ChartArg {
    /// Category series per time bucket
    Bar,
    /// Category share of all expenses
    Pie,
}

/// Chart period options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PeriodArg {
    /// Twelve months of one year
    Monthly,
    /// The last five years
    Yearly,
}

impl From<ChartArg> for ChartType {
    fn from(arg: ChartArg) -> Self {
        match arg {
            ChartArg::Bar => ChartType::Bar,
            ChartArg::Pie => ChartType::Pie,
        }
    }
}

impl From<PeriodArg> for ChartPeriod {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Monthly => ChartPeriod::Monthly,
            PeriodArg::Yearly => ChartPeriod::Yearly,
        }
    }
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Expense statistics: this month, last month, this year, all time
    Stats {
        /// Only expenses of this farm (name or ID)
        #[arg(short, long)]
        farm: Option<String>,
    },

    /// Expense chart data
    Chart {
        /// Chart shape (defaults to the configured one)
        #[arg(short, long, value_enum)]
        chart: Option<ChartArg>,

        /// Time grain (defaults to the configured one)
        #[arg(short, long, value_enum)]
        period: Option<PeriodArg>,

        /// Year to chart; monthly shows that year, yearly ends there
        #[arg(short, long)]
        year: Option<i32>,

        /// Only expenses of this farm (name or ID)
        #[arg(short, long)]
        farm: Option<String>,

        /// Only this category
        #[arg(long)]
        category: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    store: &Store,
    settings: &Settings,
    cmd: ReportCommands,
) -> FarmdeskResult<()> {
    let today = temporal::today();
    let ctx = DisplayContext::from_settings(settings, today);

    match cmd {
        ReportCommands::Stats { farm } => {
            let filter = build_filter(store, None, farm, None, None)?;
            let report = ExpenseReport::generate(store, &filter, ChartConfig::default(), today)?;
            println!("{}", report.format_stats(&ctx));
        }
        ReportCommands::Chart {
            chart,
            period,
            year,
            farm,
            category,
            output,
        } => {
            let config = ChartConfig::new(
                chart.map_or(settings.default_chart_type, ChartType::from),
                period.map_or(settings.default_chart_period, ChartPeriod::from),
            );
            let as_of = chart_day(year, today)?;
            let filter = build_filter(store, category, farm, None, None)?;
            let report = ExpenseReport::generate(store, &filter, config, as_of)?;

            if let Some(path) = output {
                let file = File::create(&path).map_err(|e| {
                    FarmdeskError::Export(format!(
                        "Failed to create file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                report.export_csv(BufWriter::new(file))?;
                println!("Chart data exported to: {}", path.display());
            } else {
                println!("{}", report.format_chart(&ctx));
            }
        }
    }

    Ok(())
}

/// The reference day for a chart of `year`: today for the current year,
/// else the last day of that year
fn chart_day(year: Option<i32>, today: NaiveDate) -> FarmdeskResult<NaiveDate> {
    match year {
        None => Ok(today),
        Some(y) if y == today.year() => Ok(today),
        Some(y) => NaiveDate::from_ymd_opt(y, 12, 31)
            .ok_or_else(|| FarmdeskError::Validation(format!("Invalid year: {}", y))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_day() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        assert_eq!(chart_day(None, today).unwrap(), today);
        assert_eq!(chart_day(Some(2025), today).unwrap(), today);
        assert_eq!(
            chart_day(Some(2022), today).unwrap(),
            NaiveDate::from_ymd_opt(2022, 12, 31).unwrap()
        );
        assert!(chart_day(Some(i32::MAX), today).unwrap_err().is_validation());
    }

    #[test]
    fn test_arg_conversion() {
        assert_eq!(ChartType::from(ChartArg::Pie), ChartType::Pie);
        assert_eq!(ChartPeriod::from(PeriodArg::Yearly), ChartPeriod::Yearly);
    }
}
