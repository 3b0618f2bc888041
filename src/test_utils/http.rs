use axum_test::TestServer;
use rusqlite::Connection;

use crate::{ApiState, WebState, build_api_router, build_web_router, client::HttpApiClient};

/// Serve the REST API with an empty in-memory database on a random local port.
pub(crate) async fn spawn_api_server() -> HttpApiClient {
    let state = ApiState::new(Connection::open_in_memory().unwrap())
        .expect("Could not create API state");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind test listener");
    let address = listener.local_addr().expect("Could not get local address");
    tokio::spawn(async move { axum::serve(listener, build_api_router(state)).await });

    HttpApiClient::new(&format!("http://{address}")).expect("Could not create API client")
}

pub(crate) fn web_test_server(api_client: HttpApiClient) -> TestServer {
    TestServer::new(build_web_router(WebState { api_client }))
}
