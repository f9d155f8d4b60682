pub mod crm;
pub mod dispatch;
pub mod messaging;
pub mod templates;
