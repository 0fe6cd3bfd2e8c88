use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::UserId))
                    .col(string_len_uniq(User::UserName, 50))
                    .col(string_len(User::FirstName, 50))
                    .col(string_len(User::LastName, 50))
                    .col(string_len_uniq(User::Email, 50))
                    // PHC hash strings run well past 50 characters
                    .col(string(User::Password))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    UserId,
    UserName,
    FirstName,
    LastName,
    Email,
    Password,
}
