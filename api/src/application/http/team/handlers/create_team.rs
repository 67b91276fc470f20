use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::team::validators::CreateTeamValidator;
use axum::extract::State;
use roster_core::domain::team::entities::Team;
use roster_core::domain::team::ports::TeamService;
use roster_core::domain::team::value_objects::CreateTeamInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateTeamResponse {
    pub data: Team,
}

#[utoipa::path(
    post,
    path = "",
    tag = "team",
    summary = "Create team",
    request_body = CreateTeamValidator,
    responses(
        (status = 201, body = CreateTeamResponse),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "A team with this name already exists")
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateTeamValidator>,
) -> Result<Response<CreateTeamResponse>, ApiError> {
    let team = state
        .service
        .create_team(CreateTeamInput { name: payload.name })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateTeamResponse { data: team }))
}
