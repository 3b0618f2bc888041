//! A fake [ApiClient] that records requests instead of sending them.

use std::sync::{Arc, Mutex};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::client::{ApiClient, ClientError};

/// A request seen by [RecordingClient].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RecordedRequest {
    Get {
        path: String,
        query: Vec<(String, String)>,
    },
    Post {
        path: String,
        body: Value,
    },
}

/// Records every request and answers each one with the same canned body.
#[derive(Debug, Clone)]
pub(crate) struct RecordingClient {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    response: Value,
}

impl RecordingClient {
    pub(crate) fn responding_with(response: Value) -> Self {
        Self {
            requests: Arc::default(),
            response,
        }
    }

    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn respond<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_value(self.response.clone())
            .map_err(|error| ClientError::Decode(error.to_string()))
    }
}

impl ApiClient for RecordingClient {
    async fn get<T>(&self, path: &str, query: &[(String, String)]) -> Result<T, ClientError>
    where
        T: DeserializeOwned + Send,
    {
        self.requests.lock().unwrap().push(RecordedRequest::Get {
            path: path.to_owned(),
            query: query.to_vec(),
        });

        self.respond()
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let body =
            serde_json::to_value(body).map_err(|error| ClientError::Encode(error.to_string()))?;
        self.requests.lock().unwrap().push(RecordedRequest::Post {
            path: path.to_owned(),
            body,
        });

        self.respond()
    }
}
