use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    member::{
        ports::{MemberQueryRepository, MemberRepository},
        value_objects::TeamAgeAverage,
    },
    team::{
        entities::Team,
        ports::{TeamRepository, TeamService},
        value_objects::CreateTeamInput,
    },
};

impl<M, MQ, T> TeamService for Service<M, MQ, T>
where
    M: MemberRepository,
    MQ: MemberQueryRepository,
    T: TeamRepository,
{
    async fn create_team(&self, input: CreateTeamInput) -> Result<Team, CoreError> {
        if self
            .team_repository
            .get_by_name(input.name.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict(format!(
                "team '{}' already exists",
                input.name
            )));
        }

        let team = self.team_repository.create_team(input.name).await?;
        info!(team_id = team.id, "team created");

        Ok(team)
    }

    async fn get_teams(&self) -> Result<Vec<Team>, CoreError> {
        self.team_repository.find_all().await
    }

    async fn get_team_age_averages(&self) -> Result<Vec<TeamAgeAverage>, CoreError> {
        self.member_query_repository.team_age_averages().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        member::ports::{MockMemberQueryRepository, MockMemberRepository},
        team::ports::MockTeamRepository,
    };

    #[tokio::test]
    async fn create_team_rejects_duplicate_name() {
        let mut teams = MockTeamRepository::new();
        teams.expect_get_by_name().returning(|name| {
            Box::pin(async move { Ok(Some(Team { id: 1, name })) })
        });
        teams.expect_create_team().never();

        let service = Service::new(
            MockMemberRepository::new(),
            MockMemberQueryRepository::new(),
            teams,
        );

        let result = service
            .create_team(CreateTeamInput {
                name: "teamA".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::Conflict(_))));
    }
}
