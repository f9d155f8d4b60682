use chrono::NaiveDateTime;
use serde::Serialize;

/// One configured message body for a (campaign, day) pair.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignTemplate {
    pub campaign_id: String,
    pub campaign_day: i64,
    pub body: String,
    pub updated_at: NaiveDateTime,
}
