use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use roster_core::domain::member::ports::MemberService;
use roster_core::domain::member::value_objects::{MemberSearchCondition, MemberTeamDto};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SearchMembersQuery {
    /// Exact username
    pub username: Option<String>,
    /// Exact team name
    pub team_name: Option<String>,
    /// Minimum age, inclusive
    pub age_goe: Option<i32>,
    /// Maximum age, inclusive
    pub age_loe: Option<i32>,
}

impl From<SearchMembersQuery> for MemberSearchCondition {
    fn from(query: SearchMembersQuery) -> Self {
        Self {
            username: query.username,
            team_name: query.team_name,
            age_goe: query.age_goe,
            age_loe: query.age_loe,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SearchMembersResponse {
    pub data: Vec<MemberTeamDto>,
}

#[utoipa::path(
    get,
    path = "/search",
    tag = "member",
    summary = "Search members",
    description = "Returns every member joined with its team that matches all of the given filters. Omitted filters are not applied.",
    params(SearchMembersQuery),
    responses(
        (status = 200, body = SearchMembersResponse),
        (status = 400, description = "Malformed query")
    ),
)]
pub async fn search_members(
    State(state): State<AppState>,
    Query(query): Query<SearchMembersQuery>,
) -> Result<Response<SearchMembersResponse>, ApiError> {
    let members = state
        .service
        .search_members(query.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchMembersResponse { data: members }))
}
