use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;

use super::NoteProcessor;
use crate::models::NoteOutcome;

pub struct HttpNoteProcessor {
    url: String,
    api_key: String,
    client: reqwest::Client,
}

impl HttpNoteProcessor {
    pub fn new(url: String, api_key: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build note processor HTTP client")?;

        Ok(Self {
            url,
            api_key,
            client,
        })
    }
}

#[async_trait]
impl NoteProcessor for HttpNoteProcessor {
    async fn process_note(&self, note_id: i64) -> anyhow::Result<NoteOutcome> {
        let mut req = self
            .client
            .post(format!("{}/notes/process", self.url))
            .json(&json!({ "note_id": note_id }));

        if !self.api_key.is_empty() {
            req = req.bearer_auth(&self.api_key);
        }

        let resp = req
            .send()
            .await
            .context("failed to reach note processor")?
            .error_for_status()
            .context("note processor returned error")?;

        resp.json()
            .await
            .context("failed to parse note processor response")
    }
}
