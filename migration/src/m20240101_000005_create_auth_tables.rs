use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    Username,
    PasswordHash,
    IsActive,
    DateJoined,
}

#[derive(DeriveIden)]
enum Session {
    Table,
    Key,
    UserId,
    ExpiresAt,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(User::Table)
                .if_not_exists()
                .col(ColumnDef::new(User::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(User::Username).string_len(150).not_null().unique_key())
                .col(ColumnDef::new(User::PasswordHash).string().not_null())
                .col(ColumnDef::new(User::IsActive).boolean().not_null().default(true))
                .col(ColumnDef::new(User::DateJoined).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        m.create_table(
            Table::create()
                .table(Session::Table)
                .if_not_exists()
                .col(ColumnDef::new(Session::Key).string_len(64).not_null().primary_key())
                .col(ColumnDef::new(Session::UserId).integer().not_null())
                .col(ColumnDef::new(Session::ExpiresAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Session::CreatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_session_user")
                        .from(Session::Table, Session::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_session_expires_at")
                .table(Session::Table)
                .col(Session::ExpiresAt)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Session::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(User::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
