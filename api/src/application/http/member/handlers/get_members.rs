use crate::application::http::query_builder::member_search_condition;
use crate::application::http::query_extractor::QueryParamsExtractor;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use roster_core::domain::common::{Pagination, entities::page::Page};
use roster_core::domain::member::ports::MemberService;
use roster_core::domain::member::value_objects::MemberTeamDto;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMembersResponse {
    pub data: Page<MemberTeamDto>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "member",
    summary = "List members",
    description = "Paged member search. Supports `filter[username]`, `filter[team_name]`, `filter[age]`, `filter[age][gte]`, `filter[age][lte]`, `offset` and `limit` (max 100).",
    responses(
        (status = 200, body = GetMembersResponse),
        (status = 400, description = "Malformed filter")
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    QueryParamsExtractor(query): QueryParamsExtractor,
) -> Result<Response<GetMembersResponse>, ApiError> {
    let condition = member_search_condition(&query.filter)?;
    debug!(?condition, ?query.pagination, "listing members");

    let page = state
        .service
        .search_members_page(
            condition,
            Pagination::new(query.pagination.offset, query.pagination.limit),
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMembersResponse { data: page }))
}
