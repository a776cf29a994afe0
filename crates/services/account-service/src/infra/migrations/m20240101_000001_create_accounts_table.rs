//! Migration: Create accounts table with its uniqueness constraints.

use sea_orm_migration::prelude::*;

pub const IDX_ACCOUNTS_EMAIL: &str = "idx_accounts_email";
pub const IDX_ACCOUNTS_USERNAME: &str = "idx_accounts_username";
pub const IDX_ACCOUNTS_EMAIL_USERNAME: &str = "idx_accounts_email_username";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Accounts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Accounts::Username).string().not_null())
                    .col(ColumnDef::new(Accounts::Email).string().not_null())
                    .col(ColumnDef::new(Accounts::CredentialHash).string().not_null())
                    .col(
                        ColumnDef::new(Accounts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACCOUNTS_EMAIL)
                    .table(Accounts::Table)
                    .col(Accounts::Email)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACCOUNTS_USERNAME)
                    .table(Accounts::Table)
                    .col(Accounts::Username)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACCOUNTS_EMAIL_USERNAME)
                    .table(Accounts::Table)
                    .col(Accounts::Email)
                    .col(Accounts::Username)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Dropping the table drops its indexes
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Accounts {
    Table,
    Id,
    Username,
    Email,
    CredentialHash,
    CreatedAt,
}
