use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use roster_core::domain::member::value_objects::TeamAgeAverage;
use roster_core::domain::team::ports::TeamService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetTeamStatisticsResponse {
    pub data: Vec<TeamAgeAverage>,
}

#[utoipa::path(
    get,
    path = "/statistics",
    tag = "team",
    summary = "Average age per team",
    description = "Teams without members are omitted.",
    responses(
        (status = 200, body = GetTeamStatisticsResponse)
    ),
)]
pub async fn get_team_statistics(
    State(state): State<AppState>,
) -> Result<Response<GetTeamStatisticsResponse>, ApiError> {
    let averages = state
        .service
        .get_team_age_averages()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetTeamStatisticsResponse { data: averages }))
}
