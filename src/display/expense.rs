//! Expense display formatting
//!
//! Formats expenses for terminal output in table and detail views.

use std::collections::HashMap;

use super::category::category_badge;
use super::report::truncate;
use super::DisplayContext;
use crate::analytics::temporal;
use crate::models::{Expense, FarmId, Money};

/// Format a list of expenses as a table with a total row
///
/// `farm_names` maps farm ids to names; unknown farms show their id.
pub fn format_expense_list(
    expenses: &[Expense],
    farm_names: &HashMap<FarmId, String>,
    ctx: &DisplayContext,
) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let farm_label = |id: FarmId| {
        farm_names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    };
    let farm_width = expenses
        .iter()
        .map(|e| farm_label(e.farm_id).chars().count())
        .max()
        .unwrap_or(4)
        .clamp(4, 24);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8}  {:<12}  {:<farm_width$}  {:<15}  {:>14}  {}\n",
        "ID",
        "Date",
        "Farm",
        "Category",
        "Amount",
        "Description",
        farm_width = farm_width,
    ));
    output.push_str(&format!(
        "{:-<8}  {:-<12}  {:-<farm_width$}  {:-<15}  {:->14}  {:-<20}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        farm_width = farm_width,
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<8}  {:<12}  {:<farm_width$}  {:<15}  {:>14}  {}\n",
            expense.id.to_string(),
            ctx.date(expense.date),
            truncate(&farm_label(expense.farm_id), farm_width),
            category_badge(expense.category),
            ctx.money(expense.amount),
            truncate(expense.description.as_deref().unwrap_or(""), 40),
            farm_width = farm_width,
        ));
    }

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&format!(
        "{:<8}  {:<12}  {:<farm_width$}  {:<15}  {:>14}\n",
        "TOTAL",
        "",
        "",
        format!("{} expenses", expenses.len()),
        ctx.money(total),
        farm_width = farm_width,
    ));

    output
}

/// Format a single expense's details
pub fn format_expense_details(
    expense: &Expense,
    farm_name: Option<&str>,
    ctx: &DisplayContext,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", expense.id));
    output.push_str(&format!("  Amount:       {}\n", ctx.money(expense.amount)));
    output.push_str(&format!("  Category:     {}\n", category_badge(expense.category)));
    output.push_str(&format!(
        "  Farm:         {}\n",
        farm_name.map_or_else(|| expense.farm_id.to_string(), str::to_string)
    ));
    output.push_str(&format!(
        "  Date:         {} ({})\n",
        ctx.date(expense.date),
        temporal::relative_label_on(expense.date, ctx.today)
    ));
    if let Some(description) = &expense.description {
        output.push_str(&format!("  Description:  {}\n", description));
    }
    output.push_str(&format!(
        "  Created:      {}\n",
        expense.created_at.format("%Y-%m-%d %H:%M")
    ));
    if let Some(updated) = expense.updated_at {
        output.push_str(&format!("  Updated:      {}\n", updated.format("%Y-%m-%d %H:%M")));
    }

    output
}
