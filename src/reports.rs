use chrono::NaiveDate;
use rusqlite::Connection;

use crate::error::Result;
use crate::ledger;

pub struct RegisterRow {
    pub id: i64,
    pub date: String,
    pub value: f64,
    pub comments: Option<String>,
}

pub struct RegisterReport {
    pub rows: Vec<RegisterRow>,
    pub total: f64,
}

/// Transaction register for one kind: the row listing plus the sum the
/// "Total Revenue/Expenses" label promises.
pub fn get_register(
    conn: &Connection,
    kind_id: i64,
    range: Option<(NaiveDate, NaiveDate)>,
) -> Result<RegisterReport> {
    let rows: Vec<RegisterRow> = ledger::transactions_by_kind(conn, kind_id, range)?
        .into_iter()
        .map(|t| RegisterRow {
            id: t.id,
            date: t.date,
            value: t.value,
            comments: t.comments,
        })
        .collect();
    let total = rows.iter().map(|r| r.value).sum();
    Ok(RegisterReport { rows, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_db;
    use crate::models::NewTransaction;

    fn add(conn: &Connection, kind_id: i64, category_id: i64, date: &str, value: f64) {
        ledger::insert_transaction(
            conn,
            &NewTransaction {
                kind_id,
                category_id,
                date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                value,
                comments: None,
            },
        )
        .unwrap();
    }

    #[test]
    fn test_register_totals_and_rows() {
        let (_dir, conn) = test_db();
        add(&conn, 2, 3, "2024-01-10", 45.50);
        add(&conn, 2, 5, "2024-01-12", 120.00);
        add(&conn, 1, 1, "2024-01-15", 2500.00);
        let report = get_register(&conn, 2, None).unwrap();
        assert_eq!(report.rows.len(), 2);
        assert!((report.total - 165.50).abs() < 1e-9);
    }

    #[test]
    fn test_register_empty_kind() {
        let (_dir, conn) = test_db();
        let report = get_register(&conn, 1, None).unwrap();
        assert!(report.rows.is_empty());
        assert_eq!(report.total, 0.0);
    }

    #[test]
    fn test_register_respects_date_range() {
        let (_dir, conn) = test_db();
        add(&conn, 1, 1, "2024-01-15", 2500.00);
        add(&conn, 1, 1, "2024-02-15", 2500.00);
        let range = Some((
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
        ));
        let report = get_register(&conn, 1, range).unwrap();
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].date, "2024-02-15");
    }
}
