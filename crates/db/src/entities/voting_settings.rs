//! Ballot rule settings, one row per session.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "voting_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub session_id: String,

    /// Result disclosure must not surface voter identity
    #[sea_orm(default_value = true)]
    pub anonymous: bool,

    #[sea_orm(default_value = false)]
    pub multi_select: bool,

    /// Meaningful only when `multi_select` is set; effectively 1 otherwise
    #[sea_orm(default_value = 1)]
    pub max_choices: i32,

    #[sea_orm(default_value = false)]
    pub require_confirmed_email: bool,

    /// Whether a later ballot supersedes an earlier one
    #[sea_orm(default_value = false)]
    pub allow_vote_change_until_close: bool,
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

impl Model {
    /// Effective selection ceiling for a ballot under these rules.
    #[must_use]
    pub const fn effective_max_choices(&self) -> usize {
        if self.multi_select {
            self.max_choices as usize
        } else {
            1
        }
    }
}
