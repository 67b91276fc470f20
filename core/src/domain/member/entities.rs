use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::team::entities::Team;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Member {
    pub id: i32,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i32>,
}

/// A member that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i32>,
}

impl NewMember {
    pub fn new(username: impl Into<String>, age: i32, team: Option<&Team>) -> Self {
        Self {
            username: Some(username.into()),
            age,
            team_id: team.map(|t| t.id),
        }
    }

    pub fn anonymous(age: i32) -> Self {
        Self {
            username: None,
            age,
            team_id: None,
        }
    }

    pub fn without_team(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            age: 0,
            team_id: None,
        }
    }
}

/// A member loaded together with its team in a single joined query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MemberWithTeam {
    pub member: Member,
    pub team: Option<Team>,
}
