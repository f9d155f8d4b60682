use std::collections::BTreeSet;
use std::sync::Arc;

use serde_json::Value;

use crate::errors::AppError;
use crate::models::{DispatchResult, InboundEvent};
use crate::services::templates;
use crate::state::AppState;

/// Collapse the id list to a set and pick the greatest id. Selection is an
/// explicit max, never "last element after dedup": set iteration order is
/// not a portable guarantee, and the chosen id must not depend on input
/// order.
pub fn select_resource_id(ids: &[i64]) -> Option<i64> {
    let unique: BTreeSet<i64> = ids.iter().copied().collect();
    unique.into_iter().max()
}

/// Run one inbound event through its dispatch path and shape the outcome.
///
/// Each path makes at most one gateway call and at most one CRM call, and
/// never retries: a send that reaches the gateway is a real outbound SMS.
/// Unreachable collaborators are the only failures that propagate; "nothing
/// to do" outcomes are ordinary `success = false` results.
pub async fn dispatch(
    state: &Arc<AppState>,
    event: InboundEvent,
) -> Result<DispatchResult, AppError> {
    match event {
        InboundEvent::DirectSend {
            to_number,
            sms_body,
        } => {
            let sent = state
                .gateway
                .send_sms(&to_number, &sms_body)
                .await
                .map_err(|e| AppError::Gateway(e.to_string()))?;

            if sent {
                tracing::info!(to = %to_number, "SMS sent");
            } else {
                tracing::error!(to = %to_number, "failed sending SMS");
            }

            Ok(DispatchResult {
                success: sent,
                recipient: Some(to_number),
                message: Some(sms_body),
                raw: Value::Null,
            })
        }

        InboundEvent::NoteCreated { resource_ids } => {
            let Some(note_id) = select_resource_id(&resource_ids) else {
                tracing::info!("note event carried no resource ids, nothing to process");
                return Ok(DispatchResult {
                    success: false,
                    recipient: None,
                    message: None,
                    raw: Value::Object(Default::default()),
                });
            };

            // The processor owns the send decision; its verdict is both the
            // success flag and the diagnostic payload.
            let outcome = state
                .notes
                .process_note(note_id)
                .await
                .map_err(|e| AppError::Crm(e.to_string()))?;

            tracing::info!(note_id, sms_sent = outcome.sms_sent, "note processed");

            let raw = serde_json::to_value(&outcome).unwrap_or(Value::Null);
            Ok(DispatchResult {
                success: outcome.sms_sent,
                recipient: None,
                message: None,
                raw,
            })
        }

        InboundEvent::CampaignTrigger {
            campaign_id,
            to_phone_number,
            campaign_day,
            personalization,
        } => {
            let rendered = {
                let db = state.db.lock().unwrap();
                templates::resolve(&db, &campaign_id, campaign_day, &personalization)?
            };

            let Some(body) = rendered else {
                tracing::info!(
                    campaign = %campaign_id,
                    day = campaign_day,
                    "no template configured, skipping send"
                );
                return Ok(DispatchResult {
                    success: false,
                    recipient: Some(to_phone_number),
                    message: None,
                    raw: Value::Null,
                });
            };

            let sent = state
                .gateway
                .send_sms(&to_phone_number, &body)
                .await
                .map_err(|e| AppError::Gateway(e.to_string()))?;

            if sent {
                tracing::info!(to = %to_phone_number, campaign = %campaign_id, day = campaign_day, "campaign SMS sent");
            } else {
                tracing::error!(to = %to_phone_number, campaign = %campaign_id, "failed sending campaign SMS");
            }

            // Successful sends carry the rendered body back to the caller;
            // rejected ones carry nothing.
            Ok(DispatchResult {
                success: sent,
                recipient: Some(to_phone_number),
                message: sent.then_some(body),
                raw: Value::Null,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_empty_is_none() {
        assert_eq!(select_resource_id(&[]), None);
    }

    #[test]
    fn test_select_single() {
        assert_eq!(select_resource_id(&[30189]), Some(30189));
    }

    #[test]
    fn test_select_max_of_deduplicated_set() {
        assert_eq!(select_resource_id(&[5, 3, 5, 9]), Some(9));
    }

    #[test]
    fn test_select_is_order_insensitive() {
        let permutations: [&[i64]; 4] = [&[5, 3, 5, 9], &[9, 5, 3, 5], &[3, 9, 5, 5], &[5, 9, 3, 5]];
        for ids in permutations {
            assert_eq!(select_resource_id(ids), Some(9));
        }
    }
}
