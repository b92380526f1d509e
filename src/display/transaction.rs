//! Transaction display formatting

use std::collections::HashMap;

use crate::models::{AccountId, Category, Transaction};
use crate::storage::Storage;

/// Format a list of transactions as a table, resolving account names
pub fn format_transaction_list(transactions: &[Transaction], storage: &Storage) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let account_names: HashMap<AccountId, String> = storage
        .accounts
        .get_all()
        .unwrap_or_default()
        .into_iter()
        .map(|a| (a.id, a.name))
        .collect();

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:<28} {:<16} {:<16} {:>12}\n",
        "Date", "Description", "Category", "Account", "Amount"
    ));
    output.push_str(&format!("{}\n", "-".repeat(88)));

    for txn in transactions {
        let account = account_names
            .get(&txn.account_id)
            .map(String::as_str)
            .unwrap_or("(deleted)");

        let description = truncate(&txn.description, 28);

        output.push_str(&format!(
            "{:<12} {:<28} {:<16} {:<16} {:>12}\n",
            txn.date.format("%Y-%m-%d").to_string(),
            description,
            Category::display_name(txn.category.as_deref()),
            truncate(account, 16),
            txn.signed_amount().to_string(),
        ));
    }

    output
}

/// Format a single transaction's details
pub fn format_transaction_details(txn: &Transaction) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("  Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("  Description: {}\n", txn.description));
    output.push_str(&format!("  Amount:      {}\n", txn.signed_amount()));
    output.push_str(&format!("  Type:        {}\n", txn.kind));
    output.push_str(&format!(
        "  Category:    {}\n",
        Category::display_name(txn.category.as_deref())
    ));
    if txn.recurring {
        output.push_str("  Recurring:   Yes\n");
    }
    if !txn.notes.is_empty() {
        output.push_str(&format!("  Notes:       {}\n", txn.notes));
    }
    if !txn.tags.is_empty() {
        output.push_str(&format!("  Tags:        {}\n", txn.tags.join(", ")));
    }

    output
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let prefix: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", prefix)
    }
}
