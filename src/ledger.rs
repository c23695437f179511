use chrono::NaiveDate;
use rusqlite::{Connection, Row};

use crate::error::Result;
use crate::models::{Category, Kind, NewTransaction, Transaction};

pub fn kinds(conn: &Connection) -> Result<Vec<Kind>> {
    let mut stmt = conn.prepare("SELECT id, description FROM kinds ORDER BY id")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Kind {
                id: row.get(0)?,
                description: row.get(1)?,
            })
        })?
        .filter_map(|r| r.ok())
        .collect();
    Ok(rows)
}

pub fn categories_for_kind(conn: &Connection, kind_id: i64) -> Result<Vec<Category>> {
    let mut stmt = conn.prepare(
        "SELECT id, description, kind_id FROM categories WHERE kind_id = ?1 ORDER BY id",
    )?;
    let rows = stmt
        .query_map([kind_id], |row| {
            Ok(Category {
                id: row.get(0)?,
                description: row.get(1)?,
                kind_id: row.get(2)?,
            })
        })?
        .filter_map(|r| r.ok())
        .collect();
    Ok(rows)
}

/// Insert one transaction and return its row id. The only atomic step of the
/// add flow; everything before it is just input collection.
pub fn insert_transaction(conn: &Connection, txn: &NewTransaction) -> Result<i64> {
    conn.execute(
        "INSERT INTO transactions (kind_id, category_id, date, value, comments) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![
            txn.kind_id,
            txn.category_id,
            txn.date.format("%Y-%m-%d").to_string(),
            txn.value,
            txn.comments,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn map_transaction(row: &Row) -> rusqlite::Result<Transaction> {
    Ok(Transaction {
        id: row.get(0)?,
        kind_id: row.get(1)?,
        category_id: row.get(2)?,
        date: row.get(3)?,
        value: row.get(4)?,
        comments: row.get(5)?,
    })
}

/// All transactions for a kind, oldest first, optionally bounded by an
/// inclusive date range. ISO dates compare lexicographically, so BETWEEN on
/// the TEXT column gives the inclusive bounds directly.
pub fn transactions_by_kind(
    conn: &Connection,
    kind_id: i64,
    range: Option<(NaiveDate, NaiveDate)>,
) -> Result<Vec<Transaction>> {
    const COLUMNS: &str = "id, kind_id, category_id, date, value, comments";
    let rows = match range {
        Some((from, to)) => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {COLUMNS} FROM transactions \
                 WHERE kind_id = ?1 AND date BETWEEN ?2 AND ?3 ORDER BY date, id"
            ))?;
            let rows: Vec<Transaction> = stmt
                .query_map(
                    rusqlite::params![
                        kind_id,
                        from.format("%Y-%m-%d").to_string(),
                        to.format("%Y-%m-%d").to_string(),
                    ],
                    map_transaction,
                )?
                .filter_map(|r| r.ok())
                .collect();
            rows
        }
        None => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {COLUMNS} FROM transactions WHERE kind_id = ?1 ORDER BY date, id"
            ))?;
            let rows: Vec<Transaction> = stmt
                .query_map([kind_id], map_transaction)?
                .filter_map(|r| r.ok())
                .collect();
            rows
        }
    };
    Ok(rows)
}
