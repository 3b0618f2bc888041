//! REST endpoints for the transactions resource.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use time::OffsetDateTime;

use crate::{
    ApiState, Error,
    transaction::{
        NewTransaction, TransactionDeleted, TransactionId, TransactionQuery, TransactionUpdate,
        core::{create_transaction, delete_transaction, get_transactions, update_transaction},
    },
};

/// A route handler that lists transactions, newest first.
///
/// Query parameters are interpreted as filters, see [TransactionQuery].
pub async fn get_transactions_endpoint(
    State(state): State<ApiState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let query = match TransactionQuery::from_params(&params) {
        Ok(query) => query,
        Err(error) => return error.into_response(),
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match get_transactions(&query, &connection) {
        Ok(transactions) => Json(transactions).into_response(),
        Err(error) => error.into_response(),
    }
}

/// A route handler for creating a transaction.
///
/// Responds with a list holding the single created transaction.
pub async fn create_transaction_endpoint(
    State(state): State<ApiState>,
    payload: Result<Json<NewTransaction>, JsonRejection>,
) -> Response {
    let Json(new_transaction) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return Error::from(rejection).into_response(),
    };

    let today = OffsetDateTime::now_utc().date();

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match create_transaction(new_transaction, today, &connection) {
        Ok(transaction) => {
            tracing::info!("Created transaction {}", transaction.id);
            (StatusCode::CREATED, Json(vec![transaction])).into_response()
        }
        Err(error) => error.into_response(),
    }
}

/// A route handler for partially updating a transaction.
///
/// Responds with a list holding the single updated transaction.
pub async fn update_transaction_endpoint(
    State(state): State<ApiState>,
    transaction_id: Result<Path<TransactionId>, PathRejection>,
    payload: Result<Json<TransactionUpdate>, JsonRejection>,
) -> Response {
    let Path(transaction_id) = match transaction_id {
        Ok(path) => path,
        Err(rejection) => return Error::from(rejection).into_response(),
    };
    let Json(update) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return Error::from(rejection).into_response(),
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match update_transaction(transaction_id, update, &connection) {
        Ok(transaction) => Json(vec![transaction]).into_response(),
        Err(error) => error.into_response(),
    }
}

/// A route handler for deleting a transaction.
pub async fn delete_transaction_endpoint(
    State(state): State<ApiState>,
    transaction_id: Result<Path<TransactionId>, PathRejection>,
) -> Response {
    let Path(transaction_id) = match transaction_id {
        Ok(path) => path,
        Err(rejection) => return Error::from(rejection).into_response(),
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match delete_transaction(transaction_id, &connection) {
        Ok(()) => Json(TransactionDeleted {
            message: format!("Transaction {transaction_id} deleted successfully"),
        })
        .into_response(),
        Err(error) => error.into_response(),
    }
}
