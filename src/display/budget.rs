//! Budget display formatting
//!
//! Budgets render with a progress bar; the bar is driven by the clamped
//! display percentage so overspending never overflows the gauge.

use crate::models::Category;
use crate::services::BudgetProgress;

/// Width of the progress bar, in characters
const BAR_WIDTH: usize = 20;

/// Format a list of budgets with progress bars
pub fn format_budget_list(budgets: &[BudgetProgress]) -> String {
    if budgets.is_empty() {
        return "No budgets found.\n".to_string();
    }

    let name_width = budgets
        .iter()
        .map(|b| b.budget.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<16}  {:<9}  {:>12}  {:>12}  {:<bar_width$}\n",
        "Name",
        "Category",
        "Period",
        "Spent",
        "Target",
        "Progress",
        name_width = name_width,
        bar_width = BAR_WIDTH,
    ));
    output.push_str(&format!("{}\n", "-".repeat(name_width + 80)));

    for entry in budgets {
        let budget = &entry.budget;
        let filled = (entry.percent / 100.0 * BAR_WIDTH as f64).round() as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(filled.min(BAR_WIDTH)),
            "░".repeat(BAR_WIDTH - filled.min(BAR_WIDTH))
        );
        let flag = if entry.overspent { "OVER" } else { "" };

        output.push_str(&format!(
            "{:<name_width$}  {:<16}  {:<9}  {:>12}  {:>12}  {}  {:>3.0}% {}\n",
            budget.name,
            Category::display_name(Some(&budget.category)),
            budget.period.to_string(),
            budget.spent.to_string(),
            budget.amount.to_string(),
            bar,
            entry.percent,
            flag,
            name_width = name_width,
        ));
    }

    output
}

/// Format a single budget's details
pub fn format_budget_details(entry: &BudgetProgress) -> String {
    let budget = &entry.budget;
    let mut output = String::new();

    output.push_str(&format!("Budget: {}\n", budget.name));
    output.push_str(&format!("  ID:        {}\n", budget.id));
    output.push_str(&format!(
        "  Category:  {}\n",
        Category::display_name(Some(&budget.category))
    ));
    output.push_str(&format!("  Period:    {}\n", budget.period));
    output.push_str(&format!("  Target:    {}\n", budget.amount));
    output.push_str(&format!(
        "  Spent:     {} ({:.0}%)\n",
        budget.spent,
        entry.percent
    ));
    output.push_str(&format!("  Remaining: {}\n", entry.remaining));
    output.push_str(&format!("  Starts:    {}\n", budget.start_date));
    if let Some(end) = budget.end_date {
        output.push_str(&format!("  Ends:      {}\n", end));
    }
    if entry.overspent {
        output.push_str("  Status:    OVERSPENT\n");
    }

    output
}
