//! Expense Report
//!
//! Summary statistics, category breakdown and the selected chart view over
//! a filtered set of expenses.

use std::io::Write;

use chrono::NaiveDate;

use crate::analytics::{
    CategorySeries, ChartConfig, ChartData, ChartPeriod, ExpenseAggregator, ExpenseFilter,
    ExpenseStats, PieSlice,
};
use crate::display::category::category_badge;
use crate::display::report::{
    double_separator, format_bar, format_percentage, percentage_of, separator,
};
use crate::display::DisplayContext;
use crate::error::FarmdeskResult;
use crate::models::Money;
use crate::services::ExpenseService;
use crate::storage::Store;

const WIDTH: usize = 72;
const BAR_WIDTH: usize = 24;

/// Expense statistics and chart data as of one day
#[derive(Debug, Clone)]
pub struct ExpenseReport {
    pub as_of: NaiveDate,
    pub config: ChartConfig,
    pub stats: ExpenseStats,
    pub chart: ChartData,
    /// Number of expenses that matched the filter
    pub expense_count: usize,
    /// Records dropped during sanitising
    pub rejected: usize,
}

impl ExpenseReport {
    /// Generate the report for the expenses matching `filter`
    pub fn generate(
        store: &Store,
        filter: &ExpenseFilter,
        config: ChartConfig,
        today: NaiveDate,
    ) -> FarmdeskResult<Self> {
        let aggregator = ExpenseService::new(store).aggregator(filter)?;
        Ok(Self::from_aggregator(&aggregator, config, today))
    }

    /// Build the report from an existing aggregator
    pub fn from_aggregator(
        aggregator: &ExpenseAggregator,
        config: ChartConfig,
        today: NaiveDate,
    ) -> Self {
        Self {
            as_of: today,
            config,
            stats: aggregator.summary_stats(today),
            chart: aggregator.chart_data(config, today),
            expense_count: aggregator.len(),
            rejected: aggregator.rejected(),
        }
    }

    /// Format the statistics block for terminal display
    pub fn format_stats(&self, ctx: &DisplayContext) -> String {
        let mut output = String::new();

        output.push_str(&format!("Expense Summary: {}\n", ctx.date(self.as_of)));
        output.push_str(&double_separator(WIDTH));
        output.push('\n');
        output.push_str(&format!("{:<24} {:>14}\n", "This month", ctx.money(self.stats.this_month)));
        output.push_str(&format!("{:<24} {:>14}\n", "Last month", ctx.money(self.stats.last_month)));
        output.push_str(&format!("{:<24} {:>14}\n", "This year", ctx.money(self.stats.this_year)));
        output.push_str(&format!("{:<24} {:>14}\n", "All time", ctx.money(self.stats.total)));
        output.push_str(&format!("{:<24} {:>14}\n", "Expenses", self.expense_count));
        if self.rejected > 0 {
            output.push_str(&format!("{:<24} {:>14}\n", "Skipped (malformed)", self.rejected));
        }

        output.push('\n');
        output.push_str(&format!("{:<20} {:>14} {:>8}\n", "Category", "Amount", "%"));
        output.push_str(&separator(WIDTH));
        output.push('\n');
        if self.stats.category_summary.is_empty() {
            output.push_str("No expenses recorded.\n");
        }
        for (category, amount) in &self.stats.category_summary {
            output.push_str(&format!(
                "{:<20} {:>14} {:>8}\n",
                category_badge(*category),
                ctx.money(*amount),
                format_percentage(percentage_of(*amount, self.stats.total))
            ));
        }

        output
    }

    /// Format the chart for terminal display
    pub fn format_chart(&self, ctx: &DisplayContext) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Expenses by {} ({} chart)\n",
            match self.config.period {
                ChartPeriod::Monthly => "month",
                ChartPeriod::Yearly => "year",
            },
            self.config.chart_type
        ));
        output.push_str(&separator(WIDTH));
        output.push('\n');

        match &self.chart {
            ChartData::Bar { labels, series } => {
                let totals = bucket_totals(labels.len(), series);
                let max = totals.iter().max().copied().unwrap_or_default();
                for (label, total) in labels.iter().zip(&totals) {
                    output.push_str(&format!(
                        "{:<6} {:>14}  {}\n",
                        label,
                        ctx.money(*total),
                        format_bar(total.as_decimal(), max.as_decimal(), BAR_WIDTH)
                    ));
                }
            }
            ChartData::Pie { slices } => {
                let total: Money = slices.iter().map(|s| s.value).sum();
                for slice in slices {
                    output.push_str(&format!(
                        "{:<20} {:>14} {:>8}  {}\n",
                        category_badge(slice.category),
                        ctx.money(slice.value),
                        format_percentage(percentage_of(slice.value, total)),
                        format_bar(slice.value.as_decimal(), total.as_decimal(), BAR_WIDTH)
                    ));
                }
            }
            ChartData::NoData { message } => {
                output.push_str(message);
                output.push('\n');
            }
        }

        output
    }

    /// Format the whole report for terminal display
    pub fn format_terminal(&self, ctx: &DisplayContext) -> String {
        format!("{}\n{}", self.format_stats(ctx), self.format_chart(ctx))
    }

    /// Export the chart data to CSV
    ///
    /// Bar charts give one row per category with a column per bucket; pie
    /// charts give one row per slice. Amounts are plain decimals.
    pub fn export_csv<W: Write>(&self, writer: W) -> FarmdeskResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        match &self.chart {
            ChartData::Bar { labels, series } => write_bar_csv(&mut csv_writer, labels, series)?,
            ChartData::Pie { slices } => write_pie_csv(&mut csv_writer, slices)?,
            ChartData::NoData { message } => {
                csv_writer.write_record(["Message"])?;
                csv_writer.write_record([message.as_str()])?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }
}

fn bucket_totals(bucket_count: usize, series: &[CategorySeries]) -> Vec<Money> {
    (0..bucket_count)
        .map(|i| series.iter().filter_map(|s| s.data.get(i)).sum())
        .collect()
}

fn decimal(amount: Money) -> String {
    format!("{:.2}", amount.as_decimal())
}

fn write_bar_csv<W: Write>(
    csv_writer: &mut csv::Writer<W>,
    labels: &[String],
    series: &[CategorySeries],
) -> FarmdeskResult<()> {
    let mut header = vec!["Category".to_string()];
    header.extend(labels.iter().cloned());
    header.push("Total".to_string());
    csv_writer.write_record(&header)?;

    for s in series {
        let mut row = vec![s.name.clone()];
        row.extend(s.data.iter().map(|v| decimal(*v)));
        row.push(decimal(s.total()));
        csv_writer.write_record(&row)?;
    }

    let totals = bucket_totals(labels.len(), series);
    let mut row = vec!["TOTAL".to_string()];
    row.extend(totals.iter().map(|v| decimal(*v)));
    row.push(decimal(totals.iter().sum()));
    csv_writer.write_record(&row)?;
    Ok(())
}

fn write_pie_csv<W: Write>(
    csv_writer: &mut csv::Writer<W>,
    slices: &[PieSlice],
) -> FarmdeskResult<()> {
    let total: Money = slices.iter().map(|s| s.value).sum();
    csv_writer.write_record(["Category", "Amount", "Percentage"])?;
    for slice in slices {
        csv_writer.write_record([
            slice.label.clone(),
            decimal(slice.value),
            format!("{:.2}", percentage_of(slice.value, total)),
        ])?;
    }
    Ok(())
}
