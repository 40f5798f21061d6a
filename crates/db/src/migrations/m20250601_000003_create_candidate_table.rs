//! Create candidate table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Candidate::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Candidate::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(Candidate::SessionId).string_len(32).not_null())
                    .col(ColumnDef::new(Candidate::Kind).string_len(16).not_null())
                    .col(ColumnDef::new(Candidate::FullName).string_len(256).not_null())
                    .col(ColumnDef::new(Candidate::Description).text())
                    .col(
                        ColumnDef::new(Candidate::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_candidate_session")
                            .from(Candidate::Table, Candidate::SessionId)
                            .to(VotingSession::Table, VotingSession::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: session_id (roster scans)
        manager
            .create_index(
                Index::create()
                    .name("idx_candidate_session_id")
                    .table(Candidate::Table)
                    .col(Candidate::SessionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Candidate::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Candidate {
    Table,
    Id,
    SessionId,
    Kind,
    FullName,
    Description,
    CreatedAt,
}

#[derive(Iden)]
enum VotingSession {
    Table,
    Id,
}
