//! Farm display formatting

use crate::models::Farm;

/// Format a list of farms as a table
pub fn format_farm_list(farms: &[Farm]) -> String {
    if farms.is_empty() {
        return "No farms found.".to_string();
    }

    let name_width = farms
        .iter()
        .map(|f| f.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);
    let location_width = farms
        .iter()
        .map(|f| f.location.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8}  {:<name_width$}  {:<location_width$}  {:>10}\n",
        "ID",
        "Name",
        "Location",
        "Acres",
        name_width = name_width,
        location_width = location_width,
    ));
    output.push_str(&format!(
        "{:-<8}  {:-<name_width$}  {:-<location_width$}  {:->10}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
        location_width = location_width,
    ));

    for farm in farms {
        output.push_str(&format!(
            "{:<8}  {:<name_width$}  {:<location_width$}  {:>10.1}\n",
            farm.id.to_string(),
            farm.name,
            farm.location,
            farm.size_acres,
            name_width = name_width,
            location_width = location_width,
        ));
    }

    let total_acres: f64 = farms.iter().map(|f| f.size_acres).sum();
    output.push_str(&format!(
        "{:<8}  {:<name_width$}  {:<location_width$}  {:>10.1}\n",
        "TOTAL",
        format!("{} farms", farms.len()),
        "",
        total_acres,
        name_width = name_width,
        location_width = location_width,
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FarmId;

    #[test]
    fn test_empty() {
        assert_eq!(format_farm_list(&[]), "No farms found.");
    }

    #[test]
    fn test_table() {
        let mut farm = Farm::new(FarmId::new(1), "North Ridge");
        farm.size_acres = 240.0;
        let output = format_farm_list(&[farm]);
        assert!(output.contains("farm-1"));
        assert!(output.contains("North Ridge"));
        assert!(output.contains("240.0"));
    }
}
