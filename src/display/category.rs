//! Category display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Category;

#[derive(Tabled)]
struct CategoryLine {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Planned")]
    planned: i64,
}

/// Format the planned categories with the total and the income
pub fn format_category_list(categories: &[Category], income: i64) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'budget create' to set up a budget.\n".to_string();
    }

    let total: i64 = categories.iter().map(|c| c.planned_amount).sum();

    let mut table = Table::new(categories.iter().map(|c| CategoryLine {
        name: c.name.clone(),
        planned: c.planned_amount,
    }));
    table.with(Style::modern());

    let mut output = table.to_string();
    output.push('\n');
    output.push_str(&format!("Total planned: {}\n", total));
    output.push_str(&format!("Income:        {}\n", income));
    output.push_str(&format!("Unplanned:     {}\n", income - total));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert!(format_category_list(&[], 0).starts_with("No categories found."));
    }

    #[test]
    fn test_list_with_totals() {
        let categories = vec![Category::new("car", 20000), Category::new("food", 60000)];
        let output = format_category_list(&categories, 100000);

        assert!(output.contains("car"));
        assert!(output.contains("Total planned: 80000"));
        assert!(output.contains("Unplanned:     20000"));
    }
}
