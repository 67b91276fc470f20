use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    member::value_objects::TeamAgeAverage,
    team::{entities::Team, value_objects::CreateTeamInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait TeamService: Send + Sync {
    fn create_team(
        &self,
        input: CreateTeamInput,
    ) -> impl Future<Output = Result<Team, CoreError>> + Send;

    fn get_teams(&self) -> impl Future<Output = Result<Vec<Team>, CoreError>> + Send;

    fn get_team_age_averages(
        &self,
    ) -> impl Future<Output = Result<Vec<TeamAgeAverage>, CoreError>> + Send;
}

/// Repository trait for teams
#[cfg_attr(test, mockall::automock)]
pub trait TeamRepository: Send + Sync {
    fn create_team(&self, name: String) -> impl Future<Output = Result<Team, CoreError>> + Send;

    fn get_by_id(
        &self,
        team_id: i32,
    ) -> impl Future<Output = Result<Option<Team>, CoreError>> + Send;

    fn get_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<Team>, CoreError>> + Send;

    fn find_all(&self) -> impl Future<Output = Result<Vec<Team>, CoreError>> + Send;
}
