use sea_orm::entity::prelude::*;

/// Unit an exercise weight is recorded in.
///
/// Stored as the lowercase abbreviation, which is also the value accepted and
/// returned over the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum WeightUnit {
    #[sea_orm(string_value = "kgs")]
    Kgs,
    #[sea_orm(string_value = "lbs")]
    Lbs,
}
