//! Vote entity, one recorded choice for one candidate.
//!
//! Rows are insert-only. A superseded ballot is marked invalid rather
//! than deleted, keeping the full audit history.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vote")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    #[sea_orm(indexed)]
    pub candidate_id: String,

    /// NULL when the session is anonymous and no account was bound
    #[sea_orm(indexed, nullable)]
    pub voter_id: Option<String>,

    pub cast_at: DateTimeWithTimeZone,

    /// Ballot weight, 1 unless a weighted scheme is in use; always > 0
    #[sea_orm(column_type = "Decimal(Some((12, 4)))")]
    pub weight: Decimal,

    /// False once superseded by a later ballot
    #[sea_orm(default_value = true)]
    pub is_valid: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    // Deleting a candidate with votes is an explicit destructive
    // operation at the service boundary, never a silent cascade.
    #[sea_orm(
        belongs_to = "super::candidate::Entity",
        from = "Column::CandidateId",
        to = "super::candidate::Column::Id",
        on_delete = "Restrict"
    )]
    Candidate,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::VoterId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    Voter,
}

impl Related<super::candidate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Candidate.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Voter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
