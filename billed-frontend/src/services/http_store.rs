//! Remote store client for the Billed REST API.

use crate::config::StoreSettings;
use crate::error::StoreError;
use crate::models::{Attachment, BillDraft, BillRecord, SelectedFile};
use crate::services::remote_store::RemoteStore;
use crate::utils::file_name_of;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use secrecy::ExposeSecret;
use service_core::observability::TracedClientExt;
use std::time::Duration;

pub struct HttpRemoteStore {
    client: Client,
    settings: StoreSettings,
}

impl HttpRemoteStore {
    pub fn new(settings: StoreSettings) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self { client, settings })
    }

    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.settings.base_url.trim_end_matches('/'), path)
    }

    /// Send with the bearer token (when configured) and turn non-2xx
    /// statuses into `StoreError::Status`.
    async fn execute(&self, request: RequestBuilder) -> Result<Response, StoreError> {
        let request = match &self.settings.api_token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to reach bill store");
            StoreError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, url = %response.url(), "Bill store returned an error");
            return Err(StoreError::Status(status.as_u16()));
        }

        Ok(response)
    }
}

#[async_trait]
impl RemoteStore for HttpRemoteStore {
    async fn list(&self) -> Result<Vec<BillRecord>, StoreError> {
        let url = self.url("/bills");
        let response = self.execute(self.client.traced_get(&url)).await?;
        let bills: Vec<BillRecord> = response.json().await?;

        tracing::debug!(count = bills.len(), "Bills listed");
        Ok(bills)
    }

    async fn create_attachment(
        &self,
        file: SelectedFile,
        email: &str,
    ) -> Result<Attachment, StoreError> {
        let url = self.url("/bills");
        let file_name = file_name_of(&file.name).to_string();

        let mut part = Part::bytes(file.data).file_name(file_name.clone());
        if !file.content_type.is_empty() {
            part = part.mime_str(&file.content_type)?;
        }
        let form = Form::new()
            .part("file", part)
            .text("email", email.to_string());

        let response = self
            .execute(self.client.traced_post(&url).multipart(form))
            .await?;
        let attachment: Attachment = response.json().await?;

        tracing::info!(file_name = %file_name, key = %attachment.key, "Proof file uploaded");
        Ok(attachment)
    }

    async fn commit(&self, draft: &BillDraft) -> Result<BillRecord, StoreError> {
        let request = match &draft.key {
            Some(key) => self.client.traced_patch(&self.url(&format!("/bills/{}", key))),
            None => self.client.traced_post(&self.url("/bills")),
        };

        let response = self.execute(request.json(draft)).await?;
        let record: BillRecord = response.json().await?;

        tracing::info!(bill_id = ?record.id, "Bill committed");
        Ok(record)
    }
}
