use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use roster_core::domain::member::entities::Member;
use roster_core::domain::member::ports::MemberService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMemberResponse {
    pub data: Member,
}

#[utoipa::path(
    get,
    path = "/{member_id}",
    tag = "member",
    summary = "Get member",
    params(
        ("member_id" = i32, Path, description = "Member id"),
    ),
    responses(
        (status = 200, body = GetMemberResponse),
        (status = 404, description = "Member not found")
    ),
)]
pub async fn get_member(
    Path(member_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Response<GetMemberResponse>, ApiError> {
    let member = state
        .service
        .get_member(member_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMemberResponse { data: member }))
}
