//! Audit log entity, the persisted event record for every mutating
//! domain operation.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Domain actions recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum AuditAction {
    #[sea_orm(string_value = "CAST_VOTE")]
    CastVote,
    #[sea_orm(string_value = "CREATE_SESSION")]
    CreateSession,
    #[sea_orm(string_value = "UPDATE_SESSION")]
    UpdateSession,
    #[sea_orm(string_value = "PUBLISH_SESSION")]
    PublishSession,
    #[sea_orm(string_value = "DELETE_SESSION")]
    DeleteSession,
    #[sea_orm(string_value = "ADD_CANDIDATE")]
    AddCandidate,
    #[sea_orm(string_value = "UPDATE_CANDIDATE")]
    UpdateCandidate,
    #[sea_orm(string_value = "DELETE_CANDIDATE")]
    DeleteCandidate,
    #[sea_orm(string_value = "REGISTER_USER")]
    RegisterUser,
    #[sea_orm(string_value = "UPDATE_USER")]
    UpdateUser,
    #[sea_orm(string_value = "DELETE_USER")]
    DeleteUser,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "audit_log")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// NULL for anonymous actors
    #[sea_orm(indexed, nullable)]
    pub actor_id: Option<String>,

    pub action: AuditAction,

    #[sea_orm(nullable)]
    pub entity_type: Option<String>,

    #[sea_orm(nullable)]
    pub entity_id: Option<String>,

    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub metadata: Option<Json>,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ActorId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    Actor,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Actor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
