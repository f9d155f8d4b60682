pub mod http;

use async_trait::async_trait;

use crate::models::NoteOutcome;

/// CRM note processor. Given a note id it resolves the note and the contact
/// behind it, decides on its own whether that note warrants a text, and
/// reports the verdict. Callers surface the verdict as-is; there is no
/// second-guessing on this side of the boundary.
#[async_trait]
pub trait NoteProcessor: Send + Sync {
    async fn process_note(&self, note_id: i64) -> anyhow::Result<NoteOutcome>;
}
