//! Router configuration for the REST API and the web app.

use axum::{
    Json, Router, middleware,
    routing::{get, put},
};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use crate::{
    ApiState, WebState,
    categories_page::{create_category_from_form, get_categories_page},
    category::{create_category_endpoint, get_categories_endpoint},
    endpoints,
    home_page::get_home_page,
    logging::logging_middleware,
    not_found::get_404_not_found,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_transactions_endpoint,
        update_transaction_endpoint,
    },
    transactions_page::{create_transaction_from_form, get_transactions_page},
};

/// The body returned by the API root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Welcome {
    /// A greeting for API clients.
    pub message: String,
}

/// Return a router with all the REST API's routes.
pub fn build_api_router(state: ApiState) -> Router {
    Router::new()
        .route(endpoints::API_ROOT, get(get_welcome))
        .route(
            endpoints::TRANSACTIONS,
            get(get_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            put(update_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::CATEGORIES,
            get(get_categories_endpoint).post(create_category_endpoint),
        )
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

/// Return a router with all the web app's pages.
///
/// Static files are served from the "static/" directory.
pub fn build_web_router(state: WebState) -> Router {
    Router::new()
        .route(endpoints::HOME_VIEW, get(get_home_page))
        .route(
            endpoints::TRANSACTIONS_VIEW,
            get(get_transactions_page).post(create_transaction_from_form),
        )
        .route(
            endpoints::CATEGORIES_VIEW,
            get(get_categories_page).post(create_category_from_form),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

async fn get_welcome() -> Json<Welcome> {
    Json(Welcome {
        message: "Welcome to the Finance Tracker API".to_owned(),
    })
}
