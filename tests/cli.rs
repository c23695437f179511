use assert_cmd::Command;
use predicates::prelude::*;
use rusqlite::Connection;

fn bin() -> Command {
    Command::cargo_bin("moneyminder").unwrap()
}

/// Fresh run: answer the four config prompts, add one transaction, exit.
fn first_run(config: &std::path::Path, db: &std::path::Path) {
    let script = format!(
        "localhost\nledger\nsecret\n{}\n1\n1\n1\n15-03-2024\n2500.00\n\n0\n",
        db.display()
    );
    bin()
        .arg("--config")
        .arg(config)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("New configuration file created successfully."))
        .stdout(predicate::str::contains("Transaction added successfully"))
        .stdout(predicate::str::contains("Exiting program."));
}

#[test]
fn fresh_run_creates_config_schema_and_transaction() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    let db = dir.path().join("ledger.db");
    first_run(&config, &db);

    assert!(config.exists());
    let saved = std::fs::read_to_string(&config).unwrap();
    assert!(saved.contains("\"host\": \"localhost\""));

    let conn = Connection::open(&db).unwrap();
    let kinds: i64 = conn.query_row("SELECT count(*) FROM kinds", [], |r| r.get(0)).unwrap();
    let categories: i64 = conn
        .query_row("SELECT count(*) FROM categories", [], |r| r.get(0))
        .unwrap();
    assert_eq!(kinds, 2);
    assert_eq!(categories, 7);

    let (kind_id, category_id, date, value, comments): (i64, i64, String, f64, Option<String>) =
        conn.query_row(
            "SELECT kind_id, category_id, date, value, comments FROM transactions",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?, r.get(4)?)),
        )
        .unwrap();
    assert_eq!(kind_id, 1);
    assert_eq!(category_id, 1);
    assert_eq!(date, "2024-03-15");
    assert_eq!(value, 2500.0);
    assert_eq!(comments, None);
}

#[test]
fn second_run_does_not_reseed_or_reprompt() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    let db = dir.path().join("ledger.db");
    first_run(&config, &db);

    bin()
        .arg("--config")
        .arg(&config)
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Menu:"))
        .stdout(predicate::str::contains("New configuration file").not());

    let conn = Connection::open(&db).unwrap();
    let kinds: i64 = conn.query_row("SELECT count(*) FROM kinds", [], |r| r.get(0)).unwrap();
    let categories: i64 = conn
        .query_row("SELECT count(*) FROM categories", [], |r| r.get(0))
        .unwrap();
    assert_eq!(kinds, 2);
    assert_eq!(categories, 7);
}

#[test]
fn report_subcommand_lists_rows_and_total() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    let db = dir.path().join("ledger.db");
    first_run(&config, &db);

    bin()
        .arg("--config")
        .arg(&config)
        .args(["report", "revenue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Revenue"))
        .stdout(predicate::str::contains("15-03-2024"))
        .stdout(predicate::str::contains("2,500.00"));
}

#[test]
fn report_subcommand_date_range_filters() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    let db = dir.path().join("ledger.db");
    first_run(&config, &db);

    bin()
        .arg("--config")
        .arg(&config)
        .args(["report", "revenue", "--from", "01-04-2024", "--to", "30-04-2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("15-03-2024").not())
        .stdout(predicate::str::contains("$0.00"));
}

#[test]
fn report_subcommand_rejects_unknown_kind() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    let db = dir.path().join("ledger.db");
    first_run(&config, &db);

    bin()
        .arg("--config")
        .arg(&config)
        .args(["report", "savings"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown kind: savings"));
}

#[test]
fn status_subcommand_reports_counts() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    let db = dir.path().join("ledger.db");
    first_run(&config, &db);

    bin()
        .arg("--config")
        .arg(&config)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kinds:         2"))
        .stdout(predicate::str::contains("Categories:    7"))
        .stdout(predicate::str::contains("Transactions:  1"));
}

#[test]
fn subcommand_without_config_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("missing.json");

    bin()
        .arg("--config")
        .arg(&config)
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration file not found"));
}
