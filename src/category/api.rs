//! REST endpoints for listing and creating categories.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    ApiState, Error,
    category::{CategoryName, NewCategory, create_category, get_all_categories},
};

/// A route handler that returns every category, ordered by name.
pub async fn get_categories_endpoint(State(state): State<ApiState>) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match get_all_categories(&connection) {
        Ok(categories) => Json(categories).into_response(),
        Err(error) => error.into_response(),
    }
}

/// A route handler for creating a category, responds with the new category.
pub async fn create_category_endpoint(
    State(state): State<ApiState>,
    payload: Result<Json<NewCategory>, JsonRejection>,
) -> Response {
    let Json(new_category) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return Error::from(rejection).into_response(),
    };

    let name = match CategoryName::new(&new_category.name) {
        Ok(name) => name,
        Err(error) => return error.into_response(),
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match create_category(name, &connection) {
        Ok(category) => {
            tracing::info!("Created category {} ({})", category.name, category.id);
            (StatusCode::CREATED, Json(category)).into_response()
        }
        Err(error) => error.into_response(),
    }
}
