pub mod campaign;
pub mod dispatch;
pub mod event;
pub mod note;
pub mod template;

pub use campaign::Personalization;
pub use dispatch::DispatchResult;
pub use event::InboundEvent;
pub use note::NoteOutcome;
pub use template::CampaignTemplate;
