//! Results snapshot entity, one per session, regenerated on demand.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "voting_results")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub session_id: String,

    pub generated_at: DateTimeWithTimeZone,

    /// Number of counted ballot rows
    pub total_votes: i64,

    /// Ordered array of `{candidateId, tally}` pairs
    #[sea_orm(column_type = "Json")]
    pub payload: Json,

    /// Keyed digest over the payload; detects post-hoc tampering
    #[sea_orm(nullable)]
    pub signature: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::voting_session::Entity",
        from = "Column::SessionId",
        to = "super::voting_session::Column::Id",
        on_delete = "Cascade"
    )]
    Session,
}

impl Related<super::voting_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
