pub mod chat;
pub mod checkin;
pub mod preferences;
pub mod profile;
pub mod report;

pub use chat::{ChatMessage, ChatTranscript, Speaker};
pub use checkin::{mood_emoji, CheckinForm, StressBand};
pub use preferences::Preferences;
pub use profile::UserProfile;
pub use report::ReportAttachment;
