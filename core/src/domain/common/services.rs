use crate::domain::{
    member::ports::{MemberQueryRepository, MemberRepository},
    team::ports::TeamRepository,
};

/// Application service over the repository ports.
#[derive(Clone)]
pub struct Service<M, MQ, T>
where
    M: MemberRepository,
    MQ: MemberQueryRepository,
    T: TeamRepository,
{
    pub member_repository: M,
    pub member_query_repository: MQ,
    pub team_repository: T,
}

impl<M, MQ, T> Service<M, MQ, T>
where
    M: MemberRepository,
    MQ: MemberQueryRepository,
    T: TeamRepository,
{
    pub fn new(member_repository: M, member_query_repository: MQ, team_repository: T) -> Self {
        Self {
            member_repository,
            member_query_repository,
            team_repository,
        }
    }
}
