use crate::config::ConfigStore;
use crate::db;
use crate::error::Result;

pub fn run(store: &ConfigStore) -> Result<()> {
    let config = store.load()?;
    let db_path = db::database_path(&config);

    println!("Config:     {}", store.path().display());
    println!("Database:   {}", db_path.display());

    if db_path.exists() {
        let conn = db::connect(&config)?;
        let kinds: i64 = conn.query_row("SELECT count(*) FROM kinds", [], |r| r.get(0))?;
        let categories: i64 = conn.query_row("SELECT count(*) FROM categories", [], |r| r.get(0))?;
        let transactions: i64 =
            conn.query_row("SELECT count(*) FROM transactions", [], |r| r.get(0))?;

        println!();
        println!("Kinds:         {kinds}");
        println!("Categories:    {categories}");
        println!("Transactions:  {transactions}");
    } else {
        println!();
        println!("Database not found. Run `moneyminder` to set up.");
    }

    Ok(())
}
