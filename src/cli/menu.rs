use std::io::{BufRead, Write};

use chrono::NaiveDate;
use colored::Colorize;
use rusqlite::Connection;

use crate::cli::{add, report};
use crate::config::{prompt_config_update, Config, ConfigStore};
use crate::db;
use crate::error::Result;
use crate::input::{parse_entry_date, prompt_line};
use crate::reports;

/// The interactive entry point: load or create the config, open the database,
/// bring the schema up, then drive the menu until the user exits.
pub fn run(store: &ConfigStore) -> Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();

    let mut config = store.load_or_create(&mut input, &mut out)?;
    let conn = db::connect(&config)?;
    // Schema and seed failures are reported but do not stop the menu; reads
    // against the missing tables will surface their own errors later.
    if let Err(e) = db::ensure_schema(&conn) {
        writeln!(out, "{}", format!("Warning: could not create tables: {e}").yellow())?;
    }
    if let Err(e) = db::seed_defaults(&conn) {
        writeln!(out, "{}", format!("Warning: could not seed defaults: {e}").yellow())?;
    }

    main_loop(&conn, store, &mut config, &mut input, &mut out)
}

fn main_loop<R: BufRead, W: Write>(
    conn: &Connection,
    store: &ConfigStore,
    config: &mut Config,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        writeln!(out)?;
        writeln!(out, "Menu:")?;
        writeln!(out, "1. Add Transaction")?;
        writeln!(out, "2. Reports")?;
        writeln!(out, "3. Configuration")?;
        writeln!(out, "0. Exit")?;
        let choice = prompt_line(input, out, "Enter your choice: ")?;
        match choice.as_str() {
            "1" => {
                if let Err(e) = add::run(conn, input, out) {
                    writeln!(out, "{}", format!("Error: {e}").red())?;
                }
            }
            "2" => reports_submenu(conn, input, out)?,
            "3" => config_submenu(store, config, input, out)?,
            "0" => {
                writeln!(out, "Exiting program.")?;
                return Ok(());
            }
            _ => writeln!(out, "{}", "Invalid choice. Please try again.".red())?,
        }
    }
}

fn reports_submenu<R: BufRead, W: Write>(
    conn: &Connection,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        writeln!(out)?;
        writeln!(out, "Reports Submenu:")?;
        writeln!(out, "1. Total Revenue")?;
        writeln!(out, "2. Total Expenses")?;
        writeln!(out, "3. Back to Main Menu")?;
        let choice = prompt_line(input, out, "Enter your choice: ")?;
        let kind_id = match choice.as_str() {
            "1" => 1,
            "2" => 2,
            "3" => return Ok(()),
            _ => {
                writeln!(out, "{}", "Invalid choice. Please try again.".red())?;
                continue;
            }
        };
        let range = prompt_range(input, out)?;
        match reports::get_register(conn, kind_id, range) {
            Ok(data) => writeln!(out, "{}", report::render(report::kind_label(kind_id), &data))?,
            Err(e) => writeln!(out, "{}", format!("Error: {e}").red())?,
        }
    }
}

/// Optional inclusive date range: Enter on the first prompt skips the filter.
fn prompt_range<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<(NaiveDate, NaiveDate)>> {
    let from = loop {
        let line = prompt_line(input, out, "From date (DD-MM-YYYY, Enter for all): ")?;
        if line.is_empty() {
            return Ok(None);
        }
        match parse_entry_date(&line) {
            Some(date) => break date,
            None => writeln!(out, "Please enter a date in the format DD-MM-YYYY.")?,
        }
    };
    let to = loop {
        let line = prompt_line(input, out, "To date (DD-MM-YYYY): ")?;
        match parse_entry_date(&line) {
            Some(date) => break date,
            None => writeln!(out, "Please enter a date in the format DD-MM-YYYY.")?,
        }
    };
    Ok(Some((from, to)))
}

fn config_submenu<R: BufRead, W: Write>(
    store: &ConfigStore,
    config: &mut Config,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        writeln!(out)?;
        writeln!(out, "Configuration Submenu:")?;
        writeln!(out, "1. View Configuration")?;
        writeln!(out, "2. Change Configuration")?;
        writeln!(out, "3. Back to Main Menu")?;
        let choice = prompt_line(input, out, "Enter your choice: ")?;
        match choice.as_str() {
            "1" => {
                writeln!(out, "Current Configuration:")?;
                writeln!(out, "Host:     {}", config.host)?;
                writeln!(out, "User:     {}", config.user)?;
                writeln!(out, "Password: {}", config.password)?;
                writeln!(out, "Database: {}", config.database)?;
            }
            "2" => {
                let next = prompt_config_update(input, out, config)?;
                store.save(&next)?;
                *config = next;
                writeln!(out, "{}", "Configuration updated successfully.".green())?;
                writeln!(out, "A new database location takes effect on the next start.")?;
            }
            "3" => return Ok(()),
            _ => writeln!(out, "{}", "Invalid choice. Please try again.".red())?,
        }
    }
}
