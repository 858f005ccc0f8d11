//! SeaORM entity definitions for the exercise tracker database schema.

pub mod prelude;

pub mod exercise;
pub mod sea_orm_active_enums;
