pub mod twilio;

use async_trait::async_trait;

/// Outbound SMS gateway. `Ok(true)` means the gateway accepted the message
/// for delivery, `Ok(false)` means it rejected it. Transport failures
/// (gateway unreachable) are `Err` and propagate to the caller.
#[async_trait]
pub trait SmsGateway: Send + Sync {
    async fn send_sms(&self, to: &str, body: &str) -> anyhow::Result<bool>;
}
