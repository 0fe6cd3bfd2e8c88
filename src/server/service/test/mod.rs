use crate::server::error::AppError;
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};
