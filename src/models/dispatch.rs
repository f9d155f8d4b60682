use serde::Serialize;

/// Outcome of dispatching a single inbound event. Built once per event and
/// handed straight back to the transport layer; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchResult {
    pub success: bool,
    pub recipient: Option<String>,
    pub message: Option<String>,
    /// Opaque diagnostic payload (the CRM processor's verdict on the note
    /// path; null where there is nothing to report).
    pub raw: serde_json::Value,
}
