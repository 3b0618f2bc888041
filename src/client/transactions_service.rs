//! Calls to the transactions resource of the REST API.
//!
//! These functions are pass-throughs: the request is built from the
//! arguments as given and the decoded response body is returned unchanged.
//! Errors are propagated to the caller without retries.

use std::collections::BTreeMap;

use crate::{
    client::{ApiClient, ClientError},
    endpoints,
    transaction::{NewTransaction, Transaction, TransactionWithCategory},
};

/// Query parameters for narrowing the list of transactions, e.g. `category=food`.
///
/// The mapping is open-ended: every entry is sent to the API as a query
/// parameter and the API decides which ones it understands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilters(BTreeMap<String, String>);

impl TransactionFilters {
    /// Create an empty set of filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the filter `key`.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.0.insert(key.to_owned(), value.to_owned());
        self
    }

    /// The value of the filter `key`, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Whether no filters are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The filters as query parameter pairs.
    pub fn to_query(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TransactionFilters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Fetch the transactions matching `filters` with `GET /transactions`.
pub async fn get_transactions<C: ApiClient>(
    api: &C,
    filters: &TransactionFilters,
) -> Result<Vec<TransactionWithCategory>, ClientError> {
    api.get(endpoints::TRANSACTIONS, &filters.to_query()).await
}

/// Create a transaction with `POST /transactions`, sending `data` as the body.
///
/// Returns the API's response, a list holding the created transaction.
pub async fn create_transaction<C: ApiClient>(
    api: &C,
    data: &NewTransaction,
) -> Result<Vec<Transaction>, ClientError> {
    api.post(endpoints::TRANSACTIONS, data).await
}

#[cfg(test)]
mod transactions_service_tests {
    use serde_json::json;
    use time::macros::date;

    use crate::{
        client::{
            TransactionFilters, create_transaction, get_transactions,
            test_client::{RecordedRequest, RecordingClient},
        },
        transaction::{NewTransaction, Transaction, TransactionType},
    };

    #[tokio::test]
    async fn list_without_filters_sends_no_query_parameters() {
        let client = RecordingClient::responding_with(json!([]));

        let transactions = get_transactions(&client, &TransactionFilters::new())
            .await
            .expect("Could not get transactions");

        assert!(transactions.is_empty());
        assert_eq!(
            client.requests(),
            [RecordedRequest::Get {
                path: "/transactions".to_owned(),
                query: vec![],
            }]
        );
    }

    #[tokio::test]
    async fn list_with_category_filter_sends_it() {
        let client = RecordingClient::responding_with(json!([]));
        let filters = TransactionFilters::new().with("category", "food");

        get_transactions(&client, &filters)
            .await
            .expect("Could not get transactions");

        assert_eq!(
            client.requests(),
            [RecordedRequest::Get {
                path: "/transactions".to_owned(),
                query: vec![("category".to_owned(), "food".to_owned())],
            }]
        );
    }

    #[tokio::test]
    async fn list_returns_records_from_response() {
        let client = RecordingClient::responding_with(json!([{
            "transaction_id": 7,
            "transaction_date": "2025-03-02",
            "description": "Lunch",
            "amount": 15.5,
            "category_id": 1,
            "category": "Food",
            "transaction_type": "expense",
        }]));

        let transactions = get_transactions(&client, &TransactionFilters::new())
            .await
            .expect("Could not get transactions");

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].id, 7);
        assert_eq!(transactions[0].category.as_deref(), Some("Food"));
    }

    #[tokio::test]
    async fn create_sends_payload_and_returns_response_unchanged() {
        let response_body = json!([{
            "transaction_id": 3,
            "transaction_date": "2025-03-01",
            "description": "Pay day",
            "amount": 2500.0,
            "category_id": 2,
            "transaction_type": "income",
        }]);
        let client = RecordingClient::responding_with(response_body.clone());
        let payload = NewTransaction {
            date: Some(date!(2025 - 03 - 01)),
            description: "Pay day".to_owned(),
            amount: 2500.0,
            category_id: 2,
            transaction_type: TransactionType::Income,
        };

        let created = create_transaction(&client, &payload)
            .await
            .expect("Could not create transaction");

        assert_eq!(
            client.requests(),
            [RecordedRequest::Post {
                path: "/transactions".to_owned(),
                body: serde_json::to_value(&payload).unwrap(),
            }]
        );
        let want: Vec<Transaction> = serde_json::from_value(response_body).unwrap();
        assert_eq!(created, want);
    }

    #[test]
    fn filters_from_iterator_are_sorted_by_key() {
        let filters: TransactionFilters = [("transaction_type", "income"), ("category", "food")]
            .into_iter()
            .collect();

        assert_eq!(
            filters.to_query(),
            [
                ("category".to_owned(), "food".to_owned()),
                ("transaction_type".to_owned(), "income".to_owned()),
            ]
        );
        assert_eq!(filters.get("category"), Some("food"));
    }
}
