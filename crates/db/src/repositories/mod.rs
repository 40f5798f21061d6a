//! Repository layer: parameterized data access, no rule enforcement.
//!
//! Every value crosses the storage boundary as a bound parameter via
//! sea-orm; query text is never assembled from untrusted input.

pub mod audit_log;
pub mod candidate;
pub mod notification;
pub mod results;
pub mod session;
pub mod user;
pub mod vote;

pub use audit_log::AuditLogRepository;
pub use candidate::CandidateRepository;
pub use notification::NotificationRepository;
pub use results::ResultsRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
pub use vote::VoteRepository;

use openballot_common::AppError;
use sea_orm::{ConnAcquireErr, DbErr};

/// Classify a storage failure into the application error taxonomy.
///
/// Pool acquisition running out its budget is the transient
/// `StorageTimeout`; a closed or unreachable connection is
/// `StorageUnavailable`. Everything else is a plain database error.
pub(crate) fn map_db_err(err: DbErr) -> AppError {
    match err {
        DbErr::ConnectionAcquire(ConnAcquireErr::Timeout) => AppError::StorageTimeout,
        DbErr::ConnectionAcquire(ConnAcquireErr::ConnectionClosed) => {
            AppError::StorageUnavailable("connection closed".to_string())
        }
        DbErr::Conn(e) => AppError::StorageUnavailable(e.to_string()),
        other => AppError::Database(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_timeout_maps_to_storage_timeout() {
        let err = map_db_err(DbErr::ConnectionAcquire(ConnAcquireErr::Timeout));
        assert!(matches!(err, AppError::StorageTimeout));
        assert!(err.is_transient());
    }

    #[test]
    fn test_closed_connection_maps_to_unavailable() {
        let err = map_db_err(DbErr::ConnectionAcquire(ConnAcquireErr::ConnectionClosed));
        assert!(matches!(err, AppError::StorageUnavailable(_)));
    }

    #[test]
    fn test_other_errors_map_to_database() {
        let err = map_db_err(DbErr::Custom("boom".to_string()));
        assert!(matches!(err, AppError::Database(_)));
        assert!(!err.is_transient());
    }
}
