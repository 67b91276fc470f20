use crate::application::http::member::validators::CreateMemberValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use roster_core::domain::member::entities::Member;
use roster_core::domain::member::ports::MemberService;
use roster_core::domain::member::value_objects::CreateMemberInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateMemberResponse {
    pub data: Member,
}

#[utoipa::path(
    post,
    path = "",
    tag = "member",
    summary = "Create member",
    description = "Creates a member, optionally attached to an existing team looked up by name.",
    request_body = CreateMemberValidator,
    responses(
        (status = 201, body = CreateMemberResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Team not found")
    ),
)]
pub async fn create_member(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateMemberValidator>,
) -> Result<Response<CreateMemberResponse>, ApiError> {
    let member = state
        .service
        .create_member(CreateMemberInput {
            username: payload.username,
            age: payload.age,
            team_name: payload.team_name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateMemberResponse { data: member }))
}
