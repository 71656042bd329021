//! CLI commands for expenses

use std::collections::HashMap;

use clap::Subcommand;

use super::{parse_date_arg, resolve_farm_arg};
use crate::analytics::{temporal, ExpenseFilter};
use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_list, DisplayContext};
use crate::error::{FarmdeskError, FarmdeskResult};
use crate::models::{ExpenseCategory, ExpenseId, FarmId};
use crate::services::{ExpenseService, FarmService};
use crate::storage::Store;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Only this category (seeds, fertilizer, equipment, labor, fuel, maintenance)
        #[arg(short, long)]
        category: Option<String>,

        /// Only expenses of this farm (name or ID)
        #[arg(short, long)]
        farm: Option<String>,

        /// Start date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// End date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },

    /// Show one expense
    Show {
        /// Expense ID ("3" or "exp-3")
        id: String,
    },
}

/// Handle expense commands
pub fn handle_expense_command(
    store: &Store,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> FarmdeskResult<()> {
    let service = ExpenseService::new(store);
    let ctx = DisplayContext::from_settings(settings, temporal::today());

    match cmd {
        ExpenseCommands::List {
            category,
            farm,
            from,
            to,
        } => {
            let filter = build_filter(store, category, farm, from, to)?;
            let expenses = service.search(&filter)?;
            println!("{}", format_expense_list(&expenses, &farm_names(store)?, &ctx));
        }
        ExpenseCommands::Show { id } => {
            let id: ExpenseId = id.parse().map_err(|_| {
                FarmdeskError::Validation(format!("Invalid expense ID: {}", id))
            })?;
            let expense = service.get(id)?;
            let farm = store.farms.get(expense.farm_id)?;
            println!(
                "{}",
                format_expense_details(&expense, farm.as_ref().map(|f| f.name.as_str()), &ctx)
            );
        }
    }
    Ok(())
}

/// Turn the list flags into an [`ExpenseFilter`]
pub(crate) fn build_filter(
    store: &Store,
    category: Option<String>,
    farm: Option<String>,
    from: Option<String>,
    to: Option<String>,
) -> FarmdeskResult<ExpenseFilter> {
    let mut filter = ExpenseFilter::new();

    if let Some(category) = category {
        let category = category
            .parse::<ExpenseCategory>()
            .map_err(|e| FarmdeskError::Validation(e.to_string()))?;
        filter = filter.with_category(category);
    }
    if let Some(farm) = farm {
        filter = filter.with_farm(resolve_farm_arg(store, &farm)?);
    }

    let start = from.map(|s| parse_date_arg(&s, "start")).transpose()?;
    let end = to.map(|s| parse_date_arg(&s, "end")).transpose()?;
    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(FarmdeskError::Validation(format!(
                "Start date {} is after end date {}",
                start, end
            )));
        }
    }

    Ok(filter.with_range(start, end))
}

fn farm_names(store: &Store) -> FarmdeskResult<HashMap<FarmId, String>> {
    Ok(FarmService::new(store)
        .list()?
        .into_iter()
        .map(|f| (f.id, f.name))
        .collect())
}
