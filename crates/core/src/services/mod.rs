//! Business logic services.

#![allow(missing_docs)]

pub mod account;
pub mod audit;
pub mod ballot;
pub mod candidate;
pub mod notification;
pub mod session;
pub mod tally;

pub use account::{AccountService, RegisterUserInput, UpdateUserInput};
pub use audit::{AuditService, Audited};
pub use ballot::BallotService;
pub use candidate::{AddCandidateInput, CandidateService, UpdateCandidateInput};
pub use notification::NotificationService;
pub use session::{
    CreateSessionInput, SessionPhase, SessionService, SessionWithSettings, SettingsInput,
    UpdateSessionInput, phase_at,
};
pub use tally::{CandidateTally, TallyService, rank_tallies};
