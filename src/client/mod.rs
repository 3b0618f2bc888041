//! A thin client for the REST API, used by the web pages.

mod api_client;
mod categories_service;
mod error;
#[cfg(test)]
mod test_client;
mod transactions_service;

pub use api_client::{ApiClient, HttpApiClient};
pub use categories_service::{create_category, get_categories};
pub use error::ClientError;
pub use transactions_service::{TransactionFilters, create_transaction, get_transactions};
