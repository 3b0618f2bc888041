//! Errors returned when talking to the REST API.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// The errors that may occur while calling the REST API.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ClientError {
    /// The configured base URL is not an absolute "http" or "https" URL.
    #[error("invalid API base URL \"{0}\"")]
    InvalidBaseUrl(String),

    /// The request could not be encoded, e.g. the query parameters.
    #[error("could not encode the request: {0}")]
    Encode(String),

    /// The request could not be sent or the response could not be received.
    #[error("request to the API failed: {0}")]
    Request(String),

    /// The API responded with a non-success status code.
    ///
    /// `detail` holds the API's error message if it sent one, otherwise the
    /// raw response body.
    #[error("the API responded with {status}: {detail}")]
    Status {
        /// The HTTP status code of the response.
        status: u16,
        /// What went wrong according to the API.
        detail: String,
    },

    /// The response body did not have the expected shape.
    #[error("could not decode the API response: {0}")]
    Decode(String),
}

impl IntoResponse for ClientError {
    fn into_response(self) -> Response {
        tracing::error!("Could not complete request to the API: {self}");

        let (status, description, fix) = match &self {
            ClientError::Status { status, detail } if (400..500).contains(status) => (
                StatusCode::BAD_REQUEST,
                "The request was rejected.",
                detail.as_str(),
            ),
            ClientError::Request(_) => (
                StatusCode::BAD_GATEWAY,
                "Could not reach the API.",
                "Check that the API server is running and try again.",
            ),
            ClientError::Status { .. } | ClientError::Decode(_) => (
                StatusCode::BAD_GATEWAY,
                "The API could not handle the request.",
                "Try again later or check the API server logs.",
            ),
            ClientError::InvalidBaseUrl(_) | ClientError::Encode(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Sorry, something went wrong.",
                "Try again later or check the server logs.",
            ),
        };

        let page = error_view(
            status.canonical_reason().unwrap_or("Error"),
            status.as_str(),
            description,
            fix,
        );

        (status, Html(page.into_string())).into_response()
    }
}

#[cfg(test)]
mod client_error_response_tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use scraper::{Html, Selector};

    use crate::client::ClientError;

    async fn render(error: ClientError) -> (StatusCode, Html) {
        let response = error.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not get response body");

        (status, Html::parse_document(&String::from_utf8_lossy(&body)))
    }

    #[tokio::test]
    async fn rejected_request_shows_api_detail() {
        let (status, html) = render(ClientError::Status {
            status: 400,
            detail: "Category 'Food' already exists.".to_owned(),
        })
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Category 'Food' already exists."), "{text}");
    }

    #[tokio::test]
    async fn unreachable_api_is_bad_gateway() {
        let (status, html) = render(ClientError::Request("connection refused".to_owned())).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        let h1 = html
            .select(&Selector::parse("h1").unwrap())
            .next()
            .expect("No heading found");
        assert_eq!(h1.text().collect::<String>(), "502");
    }

    #[tokio::test]
    async fn api_server_error_is_bad_gateway() {
        let (status, _) = render(ClientError::Status {
            status: 500,
            detail: "An unexpected error occurred.".to_owned(),
        })
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
