use crate::models::Personalization;

/// A webhook event after normalization, one variant per inbound source.
#[derive(Debug, Clone)]
pub enum InboundEvent {
    /// Direct-send endpoint: destination and body, nothing to decide.
    DirectSend { to_number: String, sms_body: String },

    /// CRM note-created webhook. May reference several resources; the
    /// dispatcher picks exactly one (or none, if the list is empty).
    NoteCreated { resource_ids: Vec<i64> },

    /// Drip-sequence trigger from the campaign platform.
    CampaignTrigger {
        campaign_id: String,
        to_phone_number: String,
        campaign_day: i64,
        personalization: Personalization,
    },
}
