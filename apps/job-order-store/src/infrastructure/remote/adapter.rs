//! Remote order backend.
//!
//! Talks to a spreadsheet-backed HTTP endpoint:
//!
//! - `GET {endpoint}?action=get` returns the collection as a JSON array
//! - `POST {endpoint}` with `{"action":"create"|"update","data":<order>}`
//!
//! Mutations are fire-and-forget. The response is dropped unread, so a
//! server-side rejection is never seen; only a failure to send surfaces.
//! No retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde_json::Value;

use super::api_types::{Action, ActionEnvelope, MUTATION_CONTENT_TYPE, decode_orders};
use crate::application::ports::{BackendKind, OrderBackend};
use crate::domain::job_order::{JobOrder, StoreError, WriteOutcome};

/// Order backend over the spreadsheet endpoint.
#[derive(Debug, Clone)]
pub struct RemoteOrderBackend {
    client: Client,
    endpoint: Url,
}

impl RemoteOrderBackend {
    /// Create a backend for `endpoint`.
    ///
    /// `timeout` bounds each request; `None` leaves requests unbounded.
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self, StoreError> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            StoreError::Configuration(format!("invalid endpoint '{endpoint}': {e}"))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(StoreError::Configuration(format!(
                "endpoint scheme must be http or https, got '{}'",
                endpoint.scheme()
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| StoreError::Configuration(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    /// The configured endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn read_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("action", Action::Get.as_str());
        url
    }

    async fn send(&self, action: Action, order: &JobOrder) -> Result<WriteOutcome, StoreError> {
        let body = serde_json::to_string(&ActionEnvelope {
            action,
            data: order,
        })?;

        match self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, MUTATION_CONTENT_TYPE)
            .body(body)
            .send()
            .await
        {
            Ok(_) => {
                tracing::debug!(
                    action = action.as_str(),
                    order_id = %order.id,
                    "Mutation dispatched"
                );
                Ok(WriteOutcome::Dispatched)
            }
            Err(e) => {
                tracing::error!(
                    action = action.as_str(),
                    order_id = %order.id,
                    error = %e,
                    "Failed to send mutation"
                );
                Err(StoreError::Transport(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl OrderBackend for RemoteOrderBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Remote
    }

    async fn get_all_orders(&self) -> Vec<JobOrder> {
        let response = match self.client.get(self.read_url()).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load orders from endpoint");
                return Vec::new();
            }
        };

        match response.json::<Value>().await {
            Ok(payload) => decode_orders(payload),
            Err(e) => {
                tracing::error!(error = %e, "Endpoint returned unparseable orders");
                Vec::new()
            }
        }
    }

    async fn create_order(&self, order: &JobOrder) -> Result<WriteOutcome, StoreError> {
        self.send(Action::Create, order).await
    }

    async fn update_order(&self, order: &JobOrder) -> Result<WriteOutcome, StoreError> {
        self.send(Action::Update, order).await
    }
}
