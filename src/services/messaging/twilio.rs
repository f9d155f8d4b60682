use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;

use super::SmsGateway;

pub struct TwilioSmsGateway {
    account_sid: String,
    auth_token: String,
    from_number: String,
    client: reqwest::Client,
}

impl TwilioSmsGateway {
    pub fn new(
        account_sid: String,
        auth_token: String,
        from_number: String,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build Twilio HTTP client")?;

        Ok(Self {
            account_sid,
            auth_token,
            from_number,
            client,
        })
    }
}

#[async_trait]
impl SmsGateway for TwilioSmsGateway {
    async fn send_sms(&self, to: &str, body: &str) -> anyhow::Result<bool> {
        let url = format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.account_sid
        );

        let resp = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("To", to), ("From", &self.from_number), ("Body", body)])
            .send()
            .await
            .context("failed to reach Twilio API")?;

        let accepted = resp.status().is_success();
        if !accepted {
            tracing::warn!(status = %resp.status(), to = %to, "Twilio rejected message");
        }

        Ok(accepted)
    }
}
