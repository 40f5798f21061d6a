//! Database entities.

pub mod audit_log;
pub mod candidate;
pub mod notification;
pub mod user;
pub mod vote;
pub mod voting_results;
pub mod voting_session;
pub mod voting_settings;

pub use audit_log::Entity as AuditLog;
pub use candidate::Entity as Candidate;
pub use notification::Entity as Notification;
pub use user::Entity as User;
pub use vote::Entity as Vote;
pub use voting_results::Entity as VotingResults;
pub use voting_session::Entity as VotingSession;
pub use voting_settings::Entity as VotingSettings;
