use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use roster_core::domain::member::ports::MemberService;
use roster_core::domain::member::value_objects::AgeStatistics;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMemberStatisticsResponse {
    pub data: AgeStatistics,
}

#[utoipa::path(
    get,
    path = "/statistics",
    tag = "member",
    summary = "Member age statistics",
    description = "Count, sum, average, maximum and minimum of member ages.",
    responses(
        (status = 200, body = GetMemberStatisticsResponse)
    ),
)]
pub async fn get_member_statistics(
    State(state): State<AppState>,
) -> Result<Response<GetMemberStatisticsResponse>, ApiError> {
    let statistics = state
        .service
        .get_age_statistics()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMemberStatisticsResponse { data: statistics }))
}
