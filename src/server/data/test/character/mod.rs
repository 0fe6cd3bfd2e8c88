use crate::server::{data::character::CharacterRepository, model::character::CreateCharacterParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
