//! Implements the structs that hold the state of the REST API server and the web app.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    client::{ClientError, HttpApiClient},
    db::initialize,
};

/// The state of the REST API server.
#[derive(Debug, Clone)]
pub struct ApiState {
    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,
}

impl ApiState {
    /// Create a new [ApiState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection) -> Result<Self, Error> {
        initialize(&db_connection)?;

        Ok(Self {
            db_connection: Arc::new(Mutex::new(db_connection)),
        })
    }
}

/// The state of the web app that renders the pages.
#[derive(Debug, Clone)]
pub struct WebState {
    /// The client for the REST API the pages get their data from.
    pub api_client: HttpApiClient,
}

impl WebState {
    /// Create a new [WebState] that calls the REST API at `api_url`.
    ///
    /// # Errors
    /// Returns [ClientError::InvalidBaseUrl] if `api_url` is not an absolute "http" or "https" URL.
    pub fn new(api_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            api_client: HttpApiClient::new(api_url)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::{ApiState, WebState, client::ClientError};

    #[test]
    fn api_state_initializes_database() {
        let state = ApiState::new(Connection::open_in_memory().unwrap()).unwrap();

        let connection = state.db_connection.lock().unwrap();
        let table_count: i64 = connection
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master \
                WHERE type = 'table' AND name IN ('category', 'transaction')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(table_count, 2);
    }

    #[test]
    fn web_state_rejects_invalid_api_url() {
        let result = WebState::new("not a url");

        assert_eq!(
            result.err(),
            Some(ClientError::InvalidBaseUrl("not a url".to_owned()))
        );
    }
}
