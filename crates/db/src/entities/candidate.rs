//! Candidate entity, a selectable ballot entry.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ballot-entry kinds, a small fixed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum CandidateKind {
    #[sea_orm(string_value = "person")]
    Person,
    #[sea_orm(string_value = "party")]
    Party,
    #[sea_orm(string_value = "option")]
    Option,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "candidate")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    #[sea_orm(indexed)]
    pub session_id: String,

    pub kind: CandidateKind,

    pub full_name: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    /// Insertion order; the tally tie-break
    pub created_at: DateTimeWithTimeZone,
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

    #[sea_orm(has_many = "super::vote::Entity")]
    Vote,
}

impl Related<super::voting_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl Related<super::vote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vote.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
