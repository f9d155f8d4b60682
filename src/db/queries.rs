use chrono::{NaiveDateTime, Utc};
use rusqlite::{params, Connection};

use crate::models::CampaignTemplate;

// ── Campaign templates ──

pub fn get_template(
    conn: &Connection,
    campaign_id: &str,
    campaign_day: i64,
) -> Result<Option<String>, rusqlite::Error> {
    let result = conn.query_row(
        "SELECT body FROM campaign_templates WHERE campaign_id = ?1 AND campaign_day = ?2",
        params![campaign_id, campaign_day],
        |row| row.get(0),
    );

    match result {
        Ok(body) => Ok(Some(body)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

pub fn upsert_template(
    conn: &Connection,
    campaign_id: &str,
    campaign_day: i64,
    body: &str,
) -> Result<(), rusqlite::Error> {
    conn.execute(
        "INSERT INTO campaign_templates (campaign_id, campaign_day, body, updated_at)
         VALUES (?1, ?2, ?3, datetime('now'))
         ON CONFLICT (campaign_id, campaign_day)
         DO UPDATE SET body = excluded.body, updated_at = excluded.updated_at",
        params![campaign_id, campaign_day, body],
    )?;
    Ok(())
}

pub fn delete_template(
    conn: &Connection,
    campaign_id: &str,
    campaign_day: i64,
) -> Result<bool, rusqlite::Error> {
    let affected = conn.execute(
        "DELETE FROM campaign_templates WHERE campaign_id = ?1 AND campaign_day = ?2",
        params![campaign_id, campaign_day],
    )?;
    Ok(affected > 0)
}

pub fn list_templates(conn: &Connection) -> Result<Vec<CampaignTemplate>, rusqlite::Error> {
    let mut stmt = conn.prepare(
        "SELECT campaign_id, campaign_day, body, updated_at
         FROM campaign_templates
         ORDER BY campaign_id, campaign_day",
    )?;

    let rows = stmt.query_map([], |row| {
        let updated_at_str: String = row.get(3)?;
        let updated_at = NaiveDateTime::parse_from_str(&updated_at_str, "%Y-%m-%d %H:%M:%S")
            .unwrap_or_else(|_| Utc::now().naive_utc());

        Ok(CampaignTemplate {
            campaign_id: row.get(0)?,
            campaign_day: row.get(1)?,
            body: row.get(2)?,
            updated_at,
        })
    })?;

    rows.collect()
}
