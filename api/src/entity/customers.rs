//! `customers` table

use sea_orm::entity::prelude::*;
use sea_orm::{QueryFilter, Select};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    /// Set on soft delete; rows with a value are hidden from `find_live`
    #[sea_orm(indexed)]
    pub deleted_at: Option<DateTimeUtc>,
    pub name: String,
    pub age: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// Select over rows that have not been soft deleted
    pub fn find_live() -> Select<Entity> {
        Self::find().filter(Column::DeletedAt.is_null())
    }
}
