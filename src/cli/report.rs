use chrono::NaiveDate;
use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::config::ConfigStore;
use crate::db;
use crate::error::{MinderError, Result};
use crate::fmt::{display_date, money};
use crate::input::parse_entry_date;
use crate::reports::{self, RegisterReport};

pub fn kind_label(kind_id: i64) -> &'static str {
    if kind_id == 1 {
        "Total Revenue"
    } else {
        "Total Expenses"
    }
}

fn parse_kind(kind: &str) -> Result<i64> {
    match kind.to_lowercase().as_str() {
        "revenue" | "1" => Ok(1),
        "expenses" | "2" => Ok(2),
        other => Err(MinderError::UnknownKind(other.to_string())),
    }
}

fn parse_range(
    from_date: Option<&str>,
    to_date: Option<&str>,
) -> Result<Option<(NaiveDate, NaiveDate)>> {
    match (from_date, to_date) {
        (None, None) => Ok(None),
        (Some(from), Some(to)) => {
            let from = parse_entry_date(from)
                .ok_or_else(|| MinderError::Input(format!("invalid date: {from}")))?;
            let to = parse_entry_date(to)
                .ok_or_else(|| MinderError::Input(format!("invalid date: {to}")))?;
            Ok(Some((from, to)))
        }
        _ => Err(MinderError::Input(
            "--from and --to must be given together".to_string(),
        )),
    }
}

/// The `report` subcommand: same register as the Reports submenu, driven by
/// flags instead of prompts.
pub fn run(
    store: &ConfigStore,
    kind: &str,
    from_date: Option<&str>,
    to_date: Option<&str>,
) -> Result<()> {
    let kind_id = parse_kind(kind)?;
    let range = parse_range(from_date, to_date)?;
    let config = store.load()?;
    let conn = db::connect(&config)?;
    db::ensure_schema(&conn)?;
    db::seed_defaults(&conn)?;
    let report = reports::get_register(&conn, kind_id, range)?;
    println!("{}", render(kind_label(kind_id), &report));
    Ok(())
}

pub fn render(title: &str, report: &RegisterReport) -> String {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Value", "Comments"]);
    for row in &report.rows {
        table.add_row(vec![
            Cell::new(row.id),
            Cell::new(display_date(&row.date)),
            Cell::new(money(row.value)),
            Cell::new(row.comments.as_deref().unwrap_or("")),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total".bold()),
        Cell::new(""),
        Cell::new(money(report.total)),
        Cell::new(""),
    ]);
    format!("{title}\n{table}")
}
