use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, SqlErr,
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        team::{entities::Team, ports::TeamRepository},
    },
    entity::teams::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresTeamRepository {
    pub db: DatabaseConnection,
}

impl PostgresTeamRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl TeamRepository for PostgresTeamRepository {
    async fn create_team(&self, name: String) -> Result<Team, CoreError> {
        let created = Entity::insert(ActiveModel {
            id: NotSet,
            name: Set(name.clone()),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            // concurrent insert of the same name
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                CoreError::Conflict(format!("team '{}' already exists", name))
            }
            _ => {
                error!("Failed to create team: {}", e);
                CoreError::from(e)
            }
        })?;

        Ok(Team::from(created))
    }

    async fn get_by_id(&self, team_id: i32) -> Result<Option<Team>, CoreError> {
        let team = Entity::find_by_id(team_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get team by id: {}", e);
                CoreError::from(e)
            })?;

        Ok(team.map(Team::from))
    }

    async fn get_by_name(&self, name: String) -> Result<Option<Team>, CoreError> {
        let team = Entity::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get team by name: {}", e);
                CoreError::from(e)
            })?;

        Ok(team.map(Team::from))
    }

    async fn find_all(&self) -> Result<Vec<Team>, CoreError> {
        let teams = Entity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch teams: {}", e);
                CoreError::from(e)
            })?
            .iter()
            .map(Team::from)
            .collect();

        Ok(teams)
    }
}
