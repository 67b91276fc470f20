use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Optional search filters. A `None` field is not filtered on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MemberSearchCondition {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i32>,
    pub age_loe: Option<i32>,
}

impl MemberSearchCondition {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.team_name.is_none()
            && self.age_goe.is_none()
            && self.age_loe.is_none()
    }
}

/// Flattened member/team row returned by searches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MemberTeamDto {
    pub member_id: i32,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MemberDto {
    pub username: Option<String>,
    pub age: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AgeStatistics {
    pub count: i64,
    pub sum: Option<i64>,
    pub avg: Option<f64>,
    pub max: Option<i32>,
    pub min: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamAgeAverage {
    pub team_name: String,
    pub average_age: f64,
}

#[derive(Debug, Clone)]
pub struct CreateMemberInput {
    pub username: Option<String>,
    pub age: i32,
    pub team_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_is_empty_only_without_fields() {
        assert!(MemberSearchCondition::default().is_empty());

        let by_age = MemberSearchCondition {
            age_loe: Some(20),
            ..Default::default()
        };
        assert!(!by_age.is_empty());
    }
}
