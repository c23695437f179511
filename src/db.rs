use std::path::PathBuf;

use rusqlite::Connection;

use crate::config::Config;
use crate::error::Result;

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS kinds (
    id INTEGER PRIMARY KEY,
    description TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY,
    description TEXT NOT NULL,
    kind_id INTEGER NOT NULL,
    FOREIGN KEY (kind_id) REFERENCES kinds(id)
);

CREATE TABLE IF NOT EXISTS transactions (
    id INTEGER PRIMARY KEY,
    kind_id INTEGER NOT NULL,
    category_id INTEGER NOT NULL,
    date TEXT NOT NULL,
    value REAL NOT NULL,
    comments TEXT,
    created_at TEXT DEFAULT (datetime('now')),
    FOREIGN KEY (kind_id) REFERENCES kinds(id),
    FOREIGN KEY (category_id) REFERENCES categories(id)
);
";

const DEFAULT_KINDS: &[(i64, &str)] = &[(1, "Revenue"), (2, "Expenses")];

// (id, description, kind_id)
const DEFAULT_CATEGORIES: &[(i64, &str, i64)] = &[
    (1, "Salary", 1),
    (2, "Other", 1),
    (3, "Going Out", 2),
    (4, "Smoking", 2),
    (5, "Shopping", 2),
    (6, "Vehicles and gas", 2),
    (7, "Other", 2),
];

/// Where the ledger lives. The `database` config field is the file path; an
/// empty field falls back to a fixed location under the home directory.
pub fn database_path(config: &Config) -> PathBuf {
    if config.database.trim().is_empty() {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".local")
            .join("share")
            .join("moneyminder")
            .join("ledger.db")
    } else {
        PathBuf::from(config.database.trim())
    }
}

pub fn connect(config: &Config) -> Result<Connection> {
    let path = database_path(config);
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    let conn = Connection::open(&path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

/// Create the three tables in dependency order. `IF NOT EXISTS` keeps this
/// safe to run on every startup.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// Insert the fixed kind and category rows, guarded by a row count per table
/// so repeated startups never duplicate them.
pub fn seed_defaults(conn: &Connection) -> Result<()> {
    let kinds: i64 = conn.query_row("SELECT count(*) FROM kinds", [], |row| row.get(0))?;
    if kinds == 0 {
        for (id, description) in DEFAULT_KINDS {
            conn.execute(
                "INSERT INTO kinds (id, description) VALUES (?1, ?2)",
                rusqlite::params![id, description],
            )?;
        }
    }

    let categories: i64 = conn.query_row("SELECT count(*) FROM categories", [], |row| row.get(0))?;
    if categories == 0 {
        for (id, description, kind_id) in DEFAULT_CATEGORIES {
            conn.execute(
                "INSERT INTO categories (id, description, kind_id) VALUES (?1, ?2, ?3)",
                rusqlite::params![id, description, kind_id],
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn test_db() -> (tempfile::TempDir, Connection) {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        host: String::new(),
        user: String::new(),
        password: String::new(),
        database: dir.path().join("test.db").to_string_lossy().to_string(),
    };
    let conn = connect(&config).unwrap();
    ensure_schema(&conn).unwrap();
    seed_defaults(&conn).unwrap();
    (dir, conn)
}
