//! Create `voting_session` and `voting_settings` tables migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create voting_session table
        manager
            .create_table(
                Table::create()
                    .table(VotingSession::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(VotingSession::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(VotingSession::Title).string_len(256).not_null())
                    .col(ColumnDef::new(VotingSession::Description).text())
                    .col(ColumnDef::new(VotingSession::CreatedBy).string_len(32).not_null())
                    .col(ColumnDef::new(VotingSession::StartAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(VotingSession::EndAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(VotingSession::IsPublished).boolean().not_null().default(false))
                    .col(ColumnDef::new(VotingSession::Visibility).string_len(16).not_null())
                    .col(
                        ColumnDef::new(VotingSession::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_voting_session_creator")
                            .from(VotingSession::Table, VotingSession::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: is_published (for listing open sessions)
        manager
            .create_index(
                Index::create()
                    .name("idx_voting_session_is_published")
                    .table(VotingSession::Table)
                    .col(VotingSession::IsPublished)
                    .to_owned(),
            )
            .await?;

        // Index: created_by
        manager
            .create_index(
                Index::create()
                    .name("idx_voting_session_created_by")
                    .table(VotingSession::Table)
                    .col(VotingSession::CreatedBy)
                    .to_owned(),
            )
            .await?;

        // Create voting_settings table (1:1 with session)
        manager
            .create_table(
                Table::create()
                    .table(VotingSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VotingSettings::SessionId)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(VotingSettings::Anonymous).boolean().not_null().default(true))
                    .col(ColumnDef::new(VotingSettings::MultiSelect).boolean().not_null().default(false))
                    .col(ColumnDef::new(VotingSettings::MaxChoices).integer().not_null().default(1))
                    .col(
                        ColumnDef::new(VotingSettings::RequireConfirmedEmail)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(VotingSettings::AllowVoteChangeUntilClose)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_voting_settings_session")
                            .from(VotingSettings::Table, VotingSettings::SessionId)
                            .to(VotingSession::Table, VotingSession::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VotingSettings::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(VotingSession::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum VotingSession {
    Table,
    Id,
    Title,
    Description,
    CreatedBy,
    StartAt,
    EndAt,
    IsPublished,
    Visibility,
    CreatedAt,
}

#[derive(Iden)]
enum VotingSettings {
    Table,
    SessionId,
    Anonymous,
    MultiSelect,
    MaxChoices,
    RequireConfirmedEmail,
    AllowVoteChangeUntilClose,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}
