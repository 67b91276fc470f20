use tracing::{debug, info};

use crate::domain::{
    common::{
        Pagination,
        entities::{app_errors::CoreError, page::Page},
        services::Service,
    },
    member::{
        entities::{Member, NewMember},
        ports::{MemberQueryRepository, MemberRepository, MemberService},
        value_objects::{AgeStatistics, CreateMemberInput, MemberSearchCondition, MemberTeamDto},
    },
    team::ports::TeamRepository,
};

impl<M, MQ, T> MemberService for Service<M, MQ, T>
where
    M: MemberRepository,
    MQ: MemberQueryRepository,
    T: TeamRepository,
{
    async fn search_members(
        &self,
        condition: MemberSearchCondition,
    ) -> Result<Vec<MemberTeamDto>, CoreError> {
        debug!(?condition, unfiltered = condition.is_empty(), "searching members");
        self.member_repository.search(condition).await
    }

    async fn search_members_page(
        &self,
        condition: MemberSearchCondition,
        pagination: Pagination,
    ) -> Result<Page<MemberTeamDto>, CoreError> {
        debug!(
            ?condition,
            ?pagination,
            unfiltered = condition.is_empty(),
            "searching members page"
        );
        self.member_repository
            .search_page(condition, pagination)
            .await
    }

    async fn create_member(&self, input: CreateMemberInput) -> Result<Member, CoreError> {
        let team_id = match input.team_name {
            Some(team_name) => {
                let team = self
                    .team_repository
                    .get_by_name(team_name)
                    .await?
                    .ok_or(CoreError::NotFound)?;
                Some(team.id)
            }
            None => None,
        };

        let member = self
            .member_repository
            .create_member(NewMember {
                username: input.username,
                age: input.age,
                team_id,
            })
            .await?;

        info!(member_id = member.id, "member created");

        Ok(member)
    }

    async fn get_member(&self, member_id: i32) -> Result<Member, CoreError> {
        self.member_repository
            .get_by_id(member_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn get_age_statistics(&self) -> Result<AgeStatistics, CoreError> {
        self.member_query_repository.age_statistics().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        member::ports::{MockMemberQueryRepository, MockMemberRepository},
        team::{entities::Team, ports::MockTeamRepository},
    };

    fn service(
        members: MockMemberRepository,
        teams: MockTeamRepository,
    ) -> Service<MockMemberRepository, MockMemberQueryRepository, MockTeamRepository> {
        Service::new(members, MockMemberQueryRepository::new(), teams)
    }

    #[tokio::test]
    async fn create_member_resolves_team_by_name() {
        let mut teams = MockTeamRepository::new();
        teams
            .expect_get_by_name()
            .withf(|name| name == "teamA")
            .times(1)
            .returning(|name| {
                Box::pin(async move {
                    Ok(Some(Team {
                        id: 7,
                        name,
                    }))
                })
            });

        let mut members = MockMemberRepository::new();
        members
            .expect_create_member()
            .withf(|member| member.team_id == Some(7) && member.age == 10)
            .times(1)
            .returning(|member| {
                Box::pin(async move {
                    Ok(Member {
                        id: 1,
                        username: member.username,
                        age: member.age,
                        team_id: member.team_id,
                    })
                })
            });

        let created = service(members, teams)
            .create_member(CreateMemberInput {
                username: Some("member1".to_string()),
                age: 10,
                team_name: Some("teamA".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(created.team_id, Some(7));
        assert_eq!(created.username.as_deref(), Some("member1"));
    }

    #[tokio::test]
    async fn create_member_with_unknown_team_is_not_found() {
        let mut teams = MockTeamRepository::new();
        teams
            .expect_get_by_name()
            .returning(|_| Box::pin(async { Ok(None) }));

        let mut members = MockMemberRepository::new();
        members.expect_create_member().never();

        let result = service(members, teams)
            .create_member(CreateMemberInput {
                username: Some("member1".to_string()),
                age: 10,
                team_name: Some("teamZ".to_string()),
            })
            .await;

        assert!(matches!(result, Err(CoreError::NotFound)));
    }

    #[tokio::test]
    async fn search_members_passes_condition_through() {
        let mut members = MockMemberRepository::new();
        members
            .expect_search()
            .withf(|condition| {
                condition.team_name.as_deref() == Some("teamA") && condition.age_loe == Some(20)
            })
            .times(1)
            .returning(|_| Box::pin(async { Ok(Vec::new()) }));

        let result = service(members, MockTeamRepository::new())
            .search_members(MemberSearchCondition {
                team_name: Some("teamA".to_string()),
                age_loe: Some(20),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn get_member_missing_is_not_found() {
        let mut members = MockMemberRepository::new();
        members
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = service(members, MockTeamRepository::new())
            .get_member(42)
            .await;

        assert!(matches!(result, Err(CoreError::NotFound)));
    }
}
