//! Defines the REST API error type and its conversion to JSON error responses.
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::category::CategoryId;

/// The errors that may occur in the REST API.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The category ID used to create or update a transaction did not match
    /// a valid category.
    #[error("the category ID {0} does not refer to a valid category")]
    InvalidCategory(CategoryId),

    /// An empty string was used to create a category name.
    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    /// A category with the same name (ignoring case) already exists.
    #[error("Category '{0}' already exists.")]
    DuplicateCategoryName(String),

    /// A transaction type other than "income" or "expense" was given.
    #[error("\"{0}\" is not a valid transaction type, expected \"income\" or \"expense\"")]
    InvalidTransactionType(String),

    /// A query parameter used to filter transactions could not be parsed.
    ///
    /// Callers should pass in the parameter name and the offending value.
    #[error("invalid value \"{1}\" for filter \"{0}\"")]
    InvalidFilter(String, String),

    /// The request body or path could not be parsed, e.g. an unknown
    /// transaction type or a non-numeric ID.
    #[error("{0}")]
    MalformedRequest(String),

    /// Tried to update a transaction that does not exist
    #[error("Transaction not found")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist
    #[error("Transaction not found")]
    DeleteMissingTransaction,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::MalformedRequest(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::MalformedRequest(rejection.body_text())
    }
}

/// The JSON body sent to the client when a request fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// A human readable description of what went wrong.
    pub detail: String,
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidCategory(_)
            | Error::EmptyCategoryName
            | Error::DuplicateCategoryName(_)
            | Error::InvalidTransactionType(_)
            | Error::InvalidFilter(_, _)
            | Error::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            Error::UpdateMissingTransaction | Error::DeleteMissingTransaction => {
                StatusCode::NOT_FOUND
            }
            Error::SqlError(_) | Error::DatabaseLockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let detail = if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            // Internal errors are not intended to be shown to the client.
            tracing::error!("An unexpected error occurred: {}", self);
            "An unexpected error occurred, check the server logs for more details.".to_owned()
        } else {
            self.to_string()
        };

        (status_code, Json(ErrorDetail { detail })).into_response()
    }
}

#[cfg(test)]
mod error_response_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{Error, error::ErrorDetail};

    async fn get_detail(error: Error) -> (StatusCode, ErrorDetail) {
        let response = error.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not read response body");

        (
            status,
            serde_json::from_slice(&body).expect("Could not parse error detail"),
        )
    }

    #[tokio::test]
    async fn client_errors_keep_their_message() {
        let (status, detail) = get_detail(Error::DuplicateCategoryName("Food".to_owned())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail.detail, "Category 'Food' already exists.");
    }

    #[tokio::test]
    async fn missing_transaction_is_not_found() {
        let (status, detail) = get_detail(Error::DeleteMissingTransaction).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(detail.detail, "Transaction not found");
    }

    #[tokio::test]
    async fn invalid_category_shows_plain_id() {
        let (status, detail) = get_detail(Error::InvalidCategory(42)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            detail.detail,
            "the category ID 42 does not refer to a valid category"
        );
    }

    #[tokio::test]
    async fn internal_errors_hide_details() {
        let error = Error::SqlError(rusqlite::Error::InvalidColumnIndex(0));

        let (status, detail) = get_detail(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!detail.detail.contains("SQL"));
    }
}
