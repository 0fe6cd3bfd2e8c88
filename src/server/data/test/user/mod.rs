use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateUserParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod update;

fn luke() -> CreateUserParams {
    CreateUserParams {
        user_name: "luke".to_string(),
        first_name: "Luke".to_string(),
        last_name: "Skywalker".to_string(),
        email: "luke@tatooine.org".to_string(),
        password: "usetheforce".to_string(),
    }
}
