//! Defines the core data models and database queries for transactions.

use std::{fmt::Display, str::FromStr};

use rusqlite::{
    Connection, Row, ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, Value, ValueRef},
};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, category::CategoryId, transaction::TransactionQuery};

// ============================================================================
// MODELS
// ============================================================================

/// Database identifier for a transaction.
pub type TransactionId = i64;

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money that was earned, e.g. a salary payment.
    Income,
    /// Money that was spent, e.g. groceries.
    Expense,
}

impl TransactionType {
    /// The lowercase name used on the wire and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(Error::InvalidTransactionType(other.to_owned())),
        }
    }
}

impl ToSql for TransactionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error: Error| FromSqlError::Other(Box::new(error)))
    }
}

/// An expense or income as stored in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    #[serde(rename = "transaction_id")]
    pub id: TransactionId,
    /// When the transaction happened.
    #[serde(rename = "transaction_date")]
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// The ID of the category the transaction belongs to.
    pub category_id: Option<CategoryId>,
    /// Whether the transaction is income or an expense.
    pub transaction_type: TransactionType,
}

/// A transaction joined with the name of its category, as listed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionWithCategory {
    /// The ID of the transaction.
    #[serde(rename = "transaction_id")]
    pub id: TransactionId,
    /// When the transaction happened.
    #[serde(rename = "transaction_date")]
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// The ID of the category the transaction belongs to.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// The name of the category the transaction belongs to.
    #[serde(default)]
    pub category: Option<String>,
    /// Whether the transaction is income or an expense.
    pub transaction_type: TransactionType,
}

/// The data needed to create a transaction.
///
/// If `date` is not given the transaction is dated today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// When the transaction happened.
    #[serde(rename = "transaction_date", default)]
    pub date: Option<Date>,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// The ID of the category the transaction belongs to.
    pub category_id: CategoryId,
    /// Whether the transaction is income or an expense.
    pub transaction_type: TransactionType,
}

/// A partial update of a transaction. Fields set to `None` are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionUpdate {
    /// When the transaction happened.
    #[serde(rename = "transaction_date", default)]
    pub date: Option<Date>,
    /// A text description of what the transaction was for.
    #[serde(default)]
    pub description: Option<String>,
    /// The amount of money spent or earned in this transaction.
    #[serde(default)]
    pub amount: Option<f64>,
    /// The ID of the category the transaction belongs to.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Whether the transaction is income or an expense.
    #[serde(default)]
    pub transaction_type: Option<TransactionType>,
}

/// The response body after deleting a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDeleted {
    /// Confirmation of which transaction was deleted.
    pub message: String,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database.
///
/// `today` is used when `new_transaction` has no date.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidCategory] if the category ID does not refer to a real category,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn create_transaction(
    new_transaction: NewTransaction,
    today: Date,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let category_id = new_transaction.category_id;

    connection
        .prepare(
            "INSERT INTO \"transaction\" (date, description, amount, category_id, transaction_type)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, date, description, amount, category_id, transaction_type",
        )?
        .query_row(
            (
                new_transaction.date.unwrap_or(today),
                new_transaction.description,
                new_transaction.amount,
                category_id,
                new_transaction.transaction_type,
            ),
            map_transaction_row,
        )
        .map_err(|error| map_foreign_key_error(error, Some(category_id)))
}

/// Get the transactions matching `query` together with their category names.
///
/// Transactions are sorted newest first, then by descending ID so that
/// transactions on the same day keep a stable order.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn get_transactions(
    query: &TransactionQuery,
    connection: &Connection,
) -> Result<Vec<TransactionWithCategory>, Error> {
    let mut clauses: Vec<&str> = Vec::new();
    let mut params: Vec<Value> = Vec::new();

    if let Some(ref category) = query.category {
        clauses.push("category.name = ? COLLATE NOCASE");
        params.push(Value::Text(category.clone()));
    }

    if let Some(category_id) = query.category_id {
        clauses.push("\"transaction\".category_id = ?");
        params.push(Value::Integer(category_id));
    }

    if let Some(transaction_type) = query.transaction_type {
        clauses.push("\"transaction\".transaction_type = ?");
        params.push(Value::Text(transaction_type.as_str().to_owned()));
    }

    if let Some(start_date) = query.start_date {
        clauses.push("\"transaction\".date >= ?");
        params.push(Value::Text(start_date.to_string()));
    }

    if let Some(end_date) = query.end_date {
        clauses.push("\"transaction\".date <= ?");
        params.push(Value::Text(end_date.to_string()));
    }

    let where_clause = if clauses.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", clauses.join(" AND "))
    };

    let sql = format!(
        "SELECT \"transaction\".id, date, description, amount, \"transaction\".category_id, \
        category.name, transaction_type FROM \"transaction\" \
        LEFT JOIN category ON \"transaction\".category_id = category.id \
        {where_clause} \
        ORDER BY date DESC, \"transaction\".id DESC"
    );

    connection
        .prepare(&sql)?
        .query_map(rusqlite::params_from_iter(params), |row| {
            Ok(TransactionWithCategory {
                id: row.get(0)?,
                date: row.get(1)?,
                description: row.get(2)?,
                amount: row.get(3)?,
                category_id: row.get(4)?,
                category: row.get(5)?,
                transaction_type: row.get(6)?,
            })
        })?
        .map(|transaction_result| transaction_result.map_err(Error::from))
        .collect()
}

/// Apply `update` to the transaction with `id` and return the updated transaction.
///
/// # Errors
/// This function will return a:
/// - [Error::UpdateMissingTransaction] if `id` does not refer to a valid transaction,
/// - [Error::InvalidCategory] if the new category ID does not refer to a real category,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn update_transaction(
    id: TransactionId,
    update: TransactionUpdate,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let category_id = update.category_id;

    connection
        .prepare(
            "UPDATE \"transaction\" SET
                date = COALESCE(?1, date),
                description = COALESCE(?2, description),
                amount = COALESCE(?3, amount),
                category_id = COALESCE(?4, category_id),
                transaction_type = COALESCE(?5, transaction_type)
             WHERE id = ?6
             RETURNING id, date, description, amount, category_id, transaction_type",
        )?
        .query_row(
            (
                update.date,
                update.description,
                update.amount,
                category_id,
                update.transaction_type,
                id,
            ),
            map_transaction_row,
        )
        .map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::UpdateMissingTransaction,
            error => map_foreign_key_error(error, category_id),
        })
}

/// Delete the transaction with `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::DeleteMissingTransaction] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM \"transaction\" WHERE id = ?1", [id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingTransaction);
    }

    Ok(())
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                description TEXT NOT NULL,
                amount REAL NOT NULL,
                category_id INTEGER,
                transaction_type TEXT NOT NULL CHECK (transaction_type IN ('income', 'expense')),
                FOREIGN KEY(category_id) REFERENCES category(id) ON UPDATE CASCADE ON DELETE SET NULL
                )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_date ON \"transaction\"(date);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let date = row.get(1)?;
    let description = row.get(2)?;
    let amount = row.get(3)?;
    let category_id = row.get(4)?;
    let transaction_type = row.get(5)?;

    Ok(Transaction {
        id,
        date,
        description,
        amount,
        category_id,
        transaction_type,
    })
}

fn map_foreign_key_error(error: rusqlite::Error, category_id: Option<CategoryId>) -> Error {
    match (error, category_id) {
        (
            rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error {
                    code: _,
                    extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
                },
                _,
            ),
            Some(category_id),
        ) => Error::InvalidCategory(category_id),
        (error, _) => error.into(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
