use crate::application::http::{member::router::MemberApiDoc, team::router::TeamApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API"
    ),
    nest(
        (path = "/members", api = MemberApiDoc),
        (path = "/teams", api = TeamApiDoc),
    )
)]
pub struct ApiDoc;
