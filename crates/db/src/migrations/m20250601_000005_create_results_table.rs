//! Create `voting_results` table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VotingResults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VotingResults::SessionId)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VotingResults::GeneratedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(VotingResults::TotalVotes).big_integer().not_null())
                    .col(ColumnDef::new(VotingResults::Payload).json().not_null())
                    .col(ColumnDef::new(VotingResults::Signature).string_len(128))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_voting_results_session")
                            .from(VotingResults::Table, VotingResults::SessionId)
                            .to(VotingSession::Table, VotingSession::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VotingResults::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum VotingResults {
    Table,
    SessionId,
    GeneratedAt,
    TotalVotes,
    Payload,
    Signature,
}

#[derive(Iden)]
enum VotingSession {
    Table,
    Id,
}
