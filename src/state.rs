use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::config::AppConfig;
use crate::services::crm::NoteProcessor;
use crate::services::messaging::SmsGateway;

pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
    pub config: AppConfig,
    pub gateway: Box<dyn SmsGateway>,
    pub notes: Box<dyn NoteProcessor>,
}
