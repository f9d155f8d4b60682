use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{InboundEvent, Personalization};
use crate::services::dispatch;
use crate::state::AppState;

// GET /
pub async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "service": "textline",
        "router": "sms",
    }))
}

// ── Direct send ──

#[derive(Deserialize)]
pub struct SendSmsRequest {
    pub to_number: String,
    pub sms_body: String,
}

#[derive(Serialize)]
pub struct SendSmsResponse {
    pub success: bool,
    pub to_phone_number: String,
    pub sms_message: String,
}

// POST /sms/send-sms
pub async fn send_sms(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SendSmsRequest>,
) -> Result<Json<SendSmsResponse>, AppError> {
    let dispatch_id = Uuid::new_v4();
    tracing::debug!(%dispatch_id, to = %req.to_number, "direct send received");

    // The response echoes the request whether or not the send went through.
    let to_phone_number = req.to_number.clone();
    let sms_message = req.sms_body.clone();

    let result = dispatch::dispatch(
        &state,
        InboundEvent::DirectSend {
            to_number: req.to_number,
            sms_body: req.sms_body,
        },
    )
    .await?;

    Ok(Json(SendSmsResponse {
        success: result.success,
        to_phone_number,
        sms_message,
    }))
}

// ── CRM note-created webhook ──

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct NoteCreatedRequest {
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub event_created: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
    pub resource_ids: Vec<i64>,
    #[serde(default)]
    pub uri: Option<String>,
}

#[derive(Serialize)]
pub struct NoteCreatedResponse {
    pub success: bool,
    pub data: serde_json::Value,
}

fn verify_signature(secret: &str, signature: &str, body: &[u8]) -> bool {
    let mut mac = match Hmac::<Sha1>::new_from_slice(secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    mac.update(body);
    let expected = base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes());

    expected == signature
}

// POST /sms/note-created
//
// Takes the raw body so the signature can be verified over exactly the bytes
// the CRM signed, then parses.
pub async fn note_created(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<NoteCreatedResponse>, AppError> {
    // Signature check is skipped when no secret is configured — dev mode.
    if !state.config.crm_webhook_secret.is_empty() {
        let signature = headers
            .get("x-crm-signature")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if signature.is_empty()
            || !verify_signature(&state.config.crm_webhook_secret, signature, &body)
        {
            tracing::warn!("missing or invalid CRM webhook signature");
            return Err(AppError::InvalidSignature);
        }
    }

    let payload: NoteCreatedRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("invalid note payload: {e}")))?;

    let dispatch_id = Uuid::new_v4();
    tracing::debug!(
        %dispatch_id,
        event_id = ?payload.event_id,
        ids = ?payload.resource_ids,
        "note webhook received"
    );

    let result = dispatch::dispatch(
        &state,
        InboundEvent::NoteCreated {
            resource_ids: payload.resource_ids,
        },
    )
    .await?;

    Ok(Json(NoteCreatedResponse {
        success: result.success,
        data: result.raw,
    }))
}

// ── Campaign trigger ──

#[derive(Deserialize)]
pub struct CampaignTriggerRequest {
    pub campaign_special_id: String,
    pub to_phone_number: String,
    pub campaign_day: i64,
    #[serde(default)]
    pub realtor_name: Option<String>,
    #[serde(default)]
    pub tm_name: Option<String>,
    #[serde(default)]
    pub mls: Option<String>,
}

#[derive(Serialize)]
pub struct CampaignTriggerResponse {
    pub success: bool,
    pub sms_template: Option<String>,
}

// POST /sms/campaign
pub async fn campaign_trigger(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CampaignTriggerRequest>,
) -> Result<Json<CampaignTriggerResponse>, AppError> {
    let dispatch_id = Uuid::new_v4();
    tracing::debug!(
        %dispatch_id,
        campaign = %req.campaign_special_id,
        day = req.campaign_day,
        "campaign trigger received"
    );

    let personalization = Personalization::resolve(req.realtor_name, req.tm_name, req.mls);

    let result = dispatch::dispatch(
        &state,
        InboundEvent::CampaignTrigger {
            campaign_id: req.campaign_special_id,
            to_phone_number: req.to_phone_number,
            campaign_day: req.campaign_day,
            personalization,
        },
    )
    .await?;

    Ok(Json(CampaignTriggerResponse {
        success: result.success,
        sms_template: result.message,
    }))
}
