//! Database initialisation for the REST API.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{category::create_category_table, transaction::create_transaction_table};

/// Create all of the database tables for the application.
///
/// Foreign key enforcement is switched on for `connection` so that
/// transactions can only refer to existing categories.
///
/// # Errors
/// This function may return a [rusqlite::Error] if something went wrong creating the tables.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch("PRAGMA foreign_keys = ON;")?;

    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_category_table(&transaction)?;
    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
