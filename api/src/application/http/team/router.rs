use super::handlers::create_team::{__path_create_team, create_team};
use super::handlers::get_team_statistics::{__path_get_team_statistics, get_team_statistics};
use super::handlers::get_teams::{__path_get_teams, get_teams};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_team, get_teams, get_team_statistics))]
pub struct TeamApiDoc;

pub fn team_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/teams", state.args.server.root_path),
            get(get_teams),
        )
        .route(
            &format!("{}/teams", state.args.server.root_path),
            post(create_team),
        )
        .route(
            &format!("{}/teams/statistics", state.args.server.root_path),
            get(get_team_statistics),
        )
}
