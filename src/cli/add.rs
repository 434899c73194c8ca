//! `add`: record one expense

use clap::Args;

use crate::error::LedgerResult;
use crate::models::DATE_FORMAT;
use crate::services::{CreateTransactionInput, TransactionService};
use crate::storage::Storage;

/// Arguments for `budget add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Transaction date (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Category name, as planned in the budget
    #[arg(short, long)]
    pub category: String,

    /// Amount spent
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub amount: i64,

    /// Free-text comment
    #[arg(short = 'm', long, default_value = "")]
    pub comment: String,
}

/// Handle `budget add`
pub fn handle_add_command(storage: &Storage, args: AddArgs) -> LedgerResult<()> {
    let date = args
        .date
        .unwrap_or_else(|| super::today().format(DATE_FORMAT).to_string());

    let input = CreateTransactionInput {
        date,
        category: args.category,
        amount: args.amount,
        comment: args.comment,
    };

    let txn = TransactionService::new(storage)
        .with_audit(storage.audit())
        .create(input)?;

    println!("Recorded transaction {}", txn.id);
    println!("  Date:     {}", txn.date);
    println!("  Category: {}", txn.category);
    println!("  Amount:   {}", txn.amount);
    if !txn.comment.is_empty() {
        println!("  Comment:  {}", txn.comment);
    }

    Ok(())
}
