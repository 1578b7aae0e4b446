use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product record. The id is assigned by the database on insert and is
/// immutable afterwards; only `name` and `last_name` are mutable.
///
/// Serialized with camelCase field names (`lastName`) to match the wire
/// format expected by existing clients.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub last_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
