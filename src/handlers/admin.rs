use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::CampaignTemplate;
use crate::state::AppState;

fn check_auth(headers: &HeaderMap, expected_token: &str) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token != expected_token {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

// GET /api/admin/templates
pub async fn list_templates(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<CampaignTemplate>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let templates = {
        let db = state.db.lock().unwrap();
        queries::list_templates(&db)?
    };

    Ok(Json(templates))
}

#[derive(Deserialize)]
pub struct UpsertTemplateRequest {
    pub campaign_id: String,
    pub campaign_day: i64,
    pub body: String,
}

// POST /api/admin/templates
pub async fn upsert_template(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<UpsertTemplateRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    if req.body.trim().is_empty() {
        return Err(AppError::BadRequest("template body is required".to_string()));
    }

    {
        let db = state.db.lock().unwrap();
        queries::upsert_template(&db, &req.campaign_id, req.campaign_day, &req.body)?;
    }

    tracing::info!(campaign = %req.campaign_id, day = req.campaign_day, "template upserted");

    Ok(Json(serde_json::json!({ "ok": true })))
}

#[derive(Deserialize)]
pub struct DeleteTemplateRequest {
    pub campaign_id: String,
    pub campaign_day: i64,
}

// POST /api/admin/templates/delete
pub async fn delete_template(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<DeleteTemplateRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let removed = {
        let db = state.db.lock().unwrap();
        queries::delete_template(&db, &req.campaign_id, req.campaign_day)?
    };

    Ok(Json(serde_json::json!({ "ok": true, "removed": removed })))
}
