use std::io::{BufRead, Write};

use colored::Colorize;
use rusqlite::Connection;

use crate::error::Result;
use crate::input;
use crate::ledger;
use crate::models::NewTransaction;

/// Interactive add-transaction flow: kind, category, date, value, comment.
/// Each step reprompts until the answer is valid; only the final insert
/// touches the database.
pub fn run<R: BufRead, W: Write>(conn: &Connection, input: &mut R, out: &mut W) -> Result<()> {
    let kinds = ledger::kinds(conn)?;
    writeln!(out, "Select Transaction Type:")?;
    for kind in &kinds {
        writeln!(out, "{}. {}", kind.id, kind.description)?;
    }
    let kind_id = loop {
        let choice = input::prompt_line(input, out, "Enter your choice: ")?;
        match choice.parse::<i64>() {
            Ok(id) if kinds.iter().any(|k| k.id == id) => break id,
            _ => writeln!(out, "{}", "Invalid choice. Please enter a valid number.".red())?,
        }
    };

    let categories = ledger::categories_for_kind(conn, kind_id)?;
    if categories.is_empty() {
        writeln!(out, "No categories found for the selected kind.")?;
        return Ok(());
    }
    // Categories are shown by position; the id stored is the category's own.
    writeln!(out, "Select Category Type:")?;
    for (i, category) in categories.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, category.description)?;
    }
    let category_id = loop {
        let choice = input::prompt_line(input, out, "Enter your choice: ")?;
        match choice.parse::<usize>() {
            Ok(n) if n >= 1 && n <= categories.len() => break categories[n - 1].id,
            _ => writeln!(out, "{}", "Invalid choice. Please enter a valid number.".red())?,
        }
    };

    let date = input::prompt_date(input, out)?;
    let value = input::prompt_amount(input, out)?;
    let comment = input::prompt_line(input, out, "Enter any comments (press Enter to skip): ")?;

    ledger::insert_transaction(
        conn,
        &NewTransaction {
            kind_id,
            category_id,
            date,
            value,
            comments: input::normalize_comment(&comment),
        },
    )?;
    writeln!(out, "{}", "Transaction added successfully.".green())?;
    Ok(())
}
