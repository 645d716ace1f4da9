//! HTTP implementation of BillStore
//!
//! Thin client of the remote REST service. Bills live under
//! `{api_url}/bills`; calls carry the session's bearer token. A non-success
//! status becomes [`StoreError::Api`], whose display is the exact banner
//! text the pages show ("Erreur 404", "Erreur 500").

use std::time::Duration;

use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::core::bill::{Bill, BillPayload, CreateReceipt};
use crate::core::error::StoreError;
use crate::core::store::BillStore;

/// Bill store backed by the remote REST service.
pub struct HttpBillStore {
    client: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl HttpBillStore {
    /// Build a client from the loaded configuration. `token` is the session
    /// JWT, absent only for unauthenticated development setups.
    pub fn new(config: &ClientConfig, token: Option<String>) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn bills_endpoint(&self) -> String {
        format!("{}/bills", self.api_url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(StoreError::Api {
                status: status.as_u16(),
            })
        }
    }
}

#[async_trait]
impl BillStore for HttpBillStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        let response = self
            .authorize(self.client.get(self.bills_endpoint()))
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Self::check_status(response)
            .await?
            .json::<Vec<Bill>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn create(&self, payload: BillPayload) -> Result<CreateReceipt, StoreError> {
        let response = self
            .authorize(self.client.post(self.bills_endpoint()))
            .json(&payload)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Self::check_status(response)
            .await?
            .json::<CreateReceipt>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}
