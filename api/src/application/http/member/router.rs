use super::handlers::create_member::{__path_create_member, create_member};
use super::handlers::get_member::{__path_get_member, get_member};
use super::handlers::get_member_statistics::{__path_get_member_statistics, get_member_statistics};
use super::handlers::get_members::{__path_get_members, get_members};
use super::handlers::search_members::{__path_search_members, search_members};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    search_members,
    get_members,
    create_member,
    get_member,
    get_member_statistics
))]
pub struct MemberApiDoc;

pub fn member_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/members", state.args.server.root_path),
            get(get_members),
        )
        .route(
            &format!("{}/members", state.args.server.root_path),
            post(create_member),
        )
        .route(
            &format!("{}/members/search", state.args.server.root_path),
            get(search_members),
        )
        .route(
            &format!("{}/members/statistics", state.args.server.root_path),
            get(get_member_statistics),
        )
        .route(
            &format!("{}/members/{{member_id}}", state.args.server.root_path),
            get(get_member),
        )
}
