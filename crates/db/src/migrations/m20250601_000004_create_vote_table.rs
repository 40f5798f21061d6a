//! Create vote table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vote::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Vote::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(Vote::CandidateId).string_len(32).not_null())
                    .col(ColumnDef::new(Vote::VoterId).string_len(32))
                    .col(
                        ColumnDef::new(Vote::CastAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Vote::Weight).decimal_len(12, 4).not_null().default(1))
                    .col(ColumnDef::new(Vote::IsValid).boolean().not_null().default(true))
                    .foreign_key(
                        // Votes are never cascaded away with their candidate;
                        // destructive deletes go through the service boundary.
                        ForeignKey::create()
                            .name("fk_vote_candidate")
                            .from(Vote::Table, Vote::CandidateId)
                            .to(Candidate::Table, Candidate::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vote_voter")
                            .from(Vote::Table, Vote::VoterId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: candidate_id (tally scans)
        manager
            .create_index(
                Index::create()
                    .name("idx_vote_candidate_id")
                    .table(Vote::Table)
                    .col(Vote::CandidateId)
                    .to_owned(),
            )
            .await?;

        // Index: (voter_id, is_valid) for active-ballot lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_vote_voter_valid")
                    .table(Vote::Table)
                    .col(Vote::VoterId)
                    .col(Vote::IsValid)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vote::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Vote {
    Table,
    Id,
    CandidateId,
    VoterId,
    CastAt,
    Weight,
    IsValid,
}

#[derive(Iden)]
enum Candidate {
    Table,
    Id,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}
