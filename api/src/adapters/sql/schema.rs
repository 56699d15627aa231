//! Initial table creation
//!
//! Creates the `customers` table and its indexes when they do not exist yet.
//! There is no migration history; the entity definition is the schema.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};

use crate::entity::customers;

/// Create the `customers` table and its `deleted_at` index if absent
pub async fn init_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(customers::Entity);
    table.if_not_exists();
    db.execute(backend.build(&table)).await?;

    for mut index in schema.create_index_from_entity(customers::Entity) {
        index.if_not_exists();
        db.execute(backend.build(&index)).await?;
    }

    tracing::debug!(backend = ?backend, "Customer schema ready");
    Ok(())
}
