use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct Kind {
    pub id: i64,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct Category {
    pub id: i64,
    pub description: String,
    pub kind_id: i64,
}

/// A stored transaction. `date` holds the ISO form (YYYY-MM-DD) as kept in the DB.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: i64,
    pub kind_id: i64,
    pub category_id: i64,
    pub date: String,
    pub value: f64,
    pub comments: Option<String>,
}

/// Input collected by the add-transaction flow before the final insert.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind_id: i64,
    pub category_id: i64,
    pub date: NaiveDate,
    pub value: f64,
    pub comments: Option<String>,
}
