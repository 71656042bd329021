//! Crop display formatting
//!
//! Shows each crop with its growth progress and time left to harvest.

use super::report::format_progress;
use super::DisplayContext;
use crate::analytics::temporal::{self, GrowthStage};
use crate::models::Crop;

/// Format a list of crops as a table
pub fn format_crop_list(crops: &[Crop], ctx: &DisplayContext) -> String {
    if crops.is_empty() {
        return "No crops found.".to_string();
    }

    let name_width = crops
        .iter()
        .map(|c| c.to_string().chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8}  {:<name_width$}  {:<10}  {:<9}  {:<17}  {}\n",
        "ID",
        "Crop",
        "Status",
        "Stage",
        "Progress",
        "Harvest",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<8}  {:-<name_width$}  {:-<10}  {:-<9}  {:-<17}  {:-<16}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for crop in crops {
        let growth =
            temporal::growth_stage_on(crop.planting_date, crop.expected_harvest_date, ctx.today);
        let progress = if growth.stage == GrowthStage::Unknown {
            "-".to_string()
        } else {
            format!("{} {:>3}%", format_progress(growth.progress, 10), growth.progress)
        };
        let harvest = match crop.expected_harvest_date {
            Some(date) if crop.is_active() => format!(
                "{} ({})",
                ctx.date(date),
                temporal::relative_label_on(date, ctx.today)
            ),
            Some(date) => ctx.date(date),
            None => "-".to_string(),
        };

        output.push_str(&format!(
            "{:<8}  {:<name_width$}  {:<10}  {:<9}  {:<17}  {}\n",
            crop.id.to_string(),
            crop.to_string(),
            crop.status.to_string(),
            growth.stage.to_string(),
            progress,
            harvest,
            name_width = name_width,
        ));
    }

    output
}
