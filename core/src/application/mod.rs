use sea_orm::DatabaseConnection;

use crate::{
    domain::common::{RosterConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        member::{PostgresMemberQueryRepository, PostgresMemberRepository},
        team::PostgresTeamRepository,
    },
};

pub type RosterService =
    Service<PostgresMemberRepository, PostgresMemberQueryRepository, PostgresTeamRepository>;

pub async fn create_service(config: RosterConfig) -> Result<RosterService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url,
        max_connections: config.database.max_connections,
    })
    .await?;

    if config.database.run_migrations {
        postgres.migrate().await?;
    }

    Ok(service_from_connection(postgres.get_db()))
}

/// Wires the repositories over an existing connection.
pub fn service_from_connection(db: DatabaseConnection) -> RosterService {
    Service::new(
        PostgresMemberRepository::new(db.clone()),
        PostgresMemberQueryRepository::new(db.clone()),
        PostgresTeamRepository::new(db),
    )
}
