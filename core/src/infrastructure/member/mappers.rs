use sea_orm::FromQueryResult;

use crate::{
    domain::{
        member::{
            entities::{Member, MemberWithTeam},
            value_objects::{AgeStatistics, MemberDto, MemberTeamDto, TeamAgeAverage},
        },
        team::entities::Team,
    },
    entity::{members, teams},
};

impl From<&members::Model> for Member {
    fn from(model: &members::Model) -> Self {
        Self {
            id: model.id,
            username: model.username.clone(),
            age: model.age,
            team_id: model.team_id,
        }
    }
}

impl From<members::Model> for Member {
    fn from(model: members::Model) -> Self {
        Self::from(&model)
    }
}

impl From<(members::Model, Option<teams::Model>)> for MemberWithTeam {
    fn from((member, team): (members::Model, Option<teams::Model>)) -> Self {
        Self {
            member: Member::from(member),
            team: team.map(Team::from),
        }
    }
}

/// Row shape of the member/team search projection.
#[derive(Debug, FromQueryResult)]
pub struct MemberTeamRow {
    pub member_id: i32,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
}

impl From<MemberTeamRow> for MemberTeamDto {
    fn from(row: MemberTeamRow) -> Self {
        Self {
            member_id: row.member_id,
            username: row.username,
            age: row.age,
            team_id: row.team_id,
            team_name: row.team_name,
        }
    }
}

#[derive(Debug, FromQueryResult)]
pub struct MemberDtoRow {
    pub username: Option<String>,
    pub age: i32,
}

impl From<MemberDtoRow> for MemberDto {
    fn from(row: MemberDtoRow) -> Self {
        Self {
            username: row.username,
            age: row.age,
        }
    }
}

#[derive(Debug, FromQueryResult)]
pub struct AgeStatisticsRow {
    pub count: i64,
    pub sum: Option<i64>,
    pub avg: Option<f64>,
    pub max: Option<i32>,
    pub min: Option<i32>,
}

impl From<AgeStatisticsRow> for AgeStatistics {
    fn from(row: AgeStatisticsRow) -> Self {
        Self {
            count: row.count,
            sum: row.sum,
            avg: row.avg,
            max: row.max,
            min: row.min,
        }
    }
}

#[derive(Debug, FromQueryResult)]
pub struct TeamAgeAverageRow {
    pub team_name: String,
    pub average_age: f64,
}

impl From<TeamAgeAverageRow> for TeamAgeAverage {
    fn from(row: TeamAgeAverageRow) -> Self {
        Self {
            team_name: row.team_name,
            average_age: row.average_age,
        }
    }
}
