//! Transaction management for the finance tracker.
//!
//! This module contains everything the REST API knows about transactions:
//! - The `Transaction` models used on the wire and in the database
//! - Database functions for storing, querying, and managing transactions
//! - The filters accepted when listing transactions
//! - Route handlers for the transactions resource

mod api;
mod core;
mod query;

pub use api::{
    create_transaction_endpoint, delete_transaction_endpoint, get_transactions_endpoint,
    update_transaction_endpoint,
};
pub use core::{
    NewTransaction, Transaction, TransactionDeleted, TransactionId, TransactionType,
    TransactionUpdate, TransactionWithCategory, create_transaction, create_transaction_table,
    delete_transaction, get_transactions, update_transaction,
};
pub use query::TransactionQuery;
