//! The page shown when a submitted form cannot be parsed.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::FormRejection;

use crate::html::error_view;

/// A form submission that could not be deserialized, e.g. a non-numeric amount.
#[derive(Debug)]
pub struct InvalidForm {
    detail: String,
}

impl From<FormRejection> for InvalidForm {
    fn from(rejection: FormRejection) -> Self {
        Self {
            detail: rejection.to_string(),
        }
    }
}

impl IntoResponse for InvalidForm {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected form submission: {}", self.detail);

        let page = error_view(
            "Bad Request",
            "400",
            "The form could not be read.",
            &self.detail,
        );

        (StatusCode::BAD_REQUEST, Html(page.into_string())).into_response()
    }
}
