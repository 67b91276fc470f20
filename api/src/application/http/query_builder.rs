//! Translates parsed `filter[...]` parameters into a member search condition.

use roster_core::domain::member::value_objects::MemberSearchCondition;

use super::{
    query_params::{FilterOperator, FilterParams},
    server::api_entities::api_error::ApiError,
};

/// Fields other than `username`, `team_name` and `age` are ignored.
pub fn member_search_condition(filter: &FilterParams) -> Result<MemberSearchCondition, ApiError> {
    let mut condition = MemberSearchCondition::default();
    if filter.is_empty() {
        return Ok(condition);
    }

    for cond in &filter.conditions {
        match (cond.field.as_str(), &cond.operator) {
            ("username", FilterOperator::Eq) => condition.username = Some(cond.value.clone()),
            ("team_name", FilterOperator::Eq) => condition.team_name = Some(cond.value.clone()),
            ("age", operator) => {
                let age = parse_age(&cond.value)?;
                match operator {
                    FilterOperator::Eq => {
                        condition.age_goe = Some(age);
                        condition.age_loe = Some(age);
                    }
                    FilterOperator::Gte => condition.age_goe = Some(age),
                    FilterOperator::Lte => condition.age_loe = Some(age),
                }
            }
            _ => {}
        }
    }

    Ok(condition)
}

fn parse_age(value: &str) -> Result<i32, ApiError> {
    value
        .parse::<i32>()
        .map_err(|_| ApiError::BadRequest(format!("age must be an integer, got '{}'", value)))
}
