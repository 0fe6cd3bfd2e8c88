use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000001_create_user_table::User;
use super::m20251210_000002_create_character_table::Character;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favourite::Table)
                    .if_not_exists()
                    .col(integer(Favourite::UserId))
                    .col(integer(Favourite::IdCharacter))
                    .primary_key(
                        Index::create()
                            .name("pk_favourites")
                            .col(Favourite::UserId)
                            .col(Favourite::IdCharacter),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favourites_user_id")
                            .from(Favourite::Table, Favourite::UserId)
                            .to(User::Table, User::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favourites_id_character")
                            .from(Favourite::Table, Favourite::IdCharacter)
                            .to(Character::Table, Character::IdCharacter)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favourite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Favourite {
    #[sea_orm(iden = "favourites")]
    Table,
    UserId,
    IdCharacter,
}
