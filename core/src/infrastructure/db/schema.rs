//! Schema bootstrap derived from the entity definitions, for databases that do
//! not run the sql migrations (in-memory sqlite in tests, local scratch databases).

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};

use crate::entity::{members, teams};

pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_table(db, teams::Entity).await?;
    create_table(db, members::Entity).await?;
    Ok(())
}

async fn create_table<E>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let mut statement = Schema::new(backend).create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(backend.build(&statement)).await?;
    Ok(())
}
