use serde::{Deserialize, Serialize};

/// The note processor's verdict on a CRM note. `sms_sent` is the only field
/// this service interprets; everything else rides along as diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteOutcome {
    #[serde(default)]
    pub sms_sent: bool,

    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}
