use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use clap::Parser;
use roster_core::{
    application::service_from_connection, infrastructure::db::schema::create_schema,
};
use sea_orm::{ConnectOptions, Database};
use serde_json::json;
use test_context::{AsyncTestContext, test_context};

use crate::application::http::{
    health::HealthResponse,
    member::handlers::{
        create_member::CreateMemberResponse, get_member::GetMemberResponse,
        get_member_statistics::GetMemberStatisticsResponse, get_members::GetMembersResponse,
        search_members::SearchMembersResponse,
    },
    server::{
        api_entities::api_error::ApiErrorResponse, app_state::AppState,
        http_server::api_routes,
    },
    team::handlers::{
        create_team::CreateTeamResponse, get_team_statistics::GetTeamStatisticsResponse,
        get_teams::GetTeamsResponse,
    },
};
use crate::args::Args;

struct ApiContext {
    server: TestServer,
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1);
        let db = Database::connect(options).await.unwrap();
        create_schema(&db).await.unwrap();

        let args = Arc::new(Args::parse_from(["roster-api"]));
        let state = AppState::new(args, service_from_connection(db));
        let server = TestServer::new(api_routes(state)).unwrap();

        for team in ["teamA", "teamB"] {
            server
                .post("/teams")
                .json(&json!({ "name": team }))
                .await
                .assert_status(StatusCode::CREATED);
        }
        for (username, age, team) in [
            ("member1", 10, "teamA"),
            ("member2", 20, "teamA"),
            ("member3", 40, "teamB"),
            ("member4", 50, "teamB"),
        ] {
            server
                .post("/members")
                .json(&json!({ "username": username, "age": age, "team_name": team }))
                .await
                .assert_status(StatusCode::CREATED);
        }

        Self { server }
    }
}

fn usernames(members: &[roster_core::domain::member::value_objects::MemberTeamDto]) -> Vec<&str> {
    members
        .iter()
        .filter_map(|m| m.username.as_deref())
        .collect()
}

#[test_context(ApiContext)]
#[tokio::test]
async fn health_reports_ok(ctx: &mut ApiContext) {
    let response = ctx.server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<HealthResponse>().status, "ok");

    ctx.server.get("/health/ready").await.assert_status_ok();
}

#[test_context(ApiContext)]
#[tokio::test]
async fn search_without_filters_returns_everyone(ctx: &mut ApiContext) {
    let response = ctx.server.get("/members/search").await;

    response.assert_status_ok();
    let body = response.json::<SearchMembersResponse>();
    assert_eq!(
        usernames(&body.data),
        vec!["member1", "member2", "member3", "member4"]
    );
}

#[test_context(ApiContext)]
#[tokio::test]
async fn search_combines_team_and_age_bound(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .get("/members/search")
        .add_query_param("age_loe", 20)
        .add_query_param("team_name", "teamA")
        .await;

    response.assert_status_ok();
    let body = response.json::<SearchMembersResponse>();
    assert_eq!(usernames(&body.data), vec!["member1", "member2"]);
    assert!(
        body.data
            .iter()
            .all(|m| m.team_name.as_deref() == Some("teamA"))
    );
}

#[test_context(ApiContext)]
#[tokio::test]
async fn search_rejects_non_numeric_age(ctx: &mut ApiContext) {
    ctx.server
        .get("/members/search")
        .add_query_param("age_goe", "old")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn list_members_applies_filter_and_paging(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .get("/members")
        .add_query_param("filter[age][gte]", 20)
        .add_query_param("offset", 1)
        .add_query_param("limit", 1)
        .await;

    response.assert_status_ok();
    let page = response.json::<GetMembersResponse>().data;
    assert_eq!(page.total, 3);
    assert_eq!(page.offset, 1);
    assert_eq!(page.limit, 1);
    assert_eq!(usernames(&page.items), vec!["member3"]);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn list_members_filters_by_exact_age(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .get("/members")
        .add_query_param("filter[age]", 40)
        .await;

    response.assert_status_ok();
    let page = response.json::<GetMembersResponse>().data;
    assert_eq!(page.total, 1);
    assert_eq!(usernames(&page.items), vec!["member3"]);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn list_members_rejects_bad_age_filter(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .get("/members")
        .add_query_param("filter[age][lte]", "abc")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<ApiErrorResponse>().code, "E_BAD_REQUEST");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn create_and_get_member(ctx: &mut ApiContext) {
    let created = ctx
        .server
        .post("/members")
        .json(&json!({ "username": "member5", "age": 30 }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let member = created.json::<CreateMemberResponse>().data;
    assert_eq!(member.team_id, None);

    let fetched = ctx.server.get(&format!("/members/{}", member.id)).await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<GetMemberResponse>().data, member);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn create_member_with_unknown_team_is_not_found(ctx: &mut ApiContext) {
    ctx.server
        .post("/members")
        .json(&json!({ "username": "member5", "age": 30, "team_name": "teamZ" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn create_member_validates_payload(ctx: &mut ApiContext) {
    ctx.server
        .post("/members")
        .json(&json!({ "username": "", "age": -1 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn missing_member_is_not_found(ctx: &mut ApiContext) {
    ctx.server
        .get("/members/999")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn member_statistics(ctx: &mut ApiContext) {
    let response = ctx.server.get("/members/statistics").await;

    response.assert_status_ok();
    let statistics = response.json::<GetMemberStatisticsResponse>().data;
    assert_eq!(statistics.count, 4);
    assert_eq!(statistics.sum, Some(120));
    assert_eq!(statistics.avg, Some(30.0));
    assert_eq!(statistics.max, Some(50));
    assert_eq!(statistics.min, Some(10));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn team_listing_and_statistics(ctx: &mut ApiContext) {
    let teams = ctx.server.get("/teams").await.json::<GetTeamsResponse>().data;
    let names: Vec<_> = teams.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["teamA", "teamB"]);

    let averages = ctx
        .server
        .get("/teams/statistics")
        .await
        .json::<GetTeamStatisticsResponse>()
        .data;
    assert_eq!(averages.len(), 2);
    assert_eq!(averages[0].team_name, "teamA");
    assert_eq!(averages[0].average_age, 15.0);
    assert_eq!(averages[1].team_name, "teamB");
    assert_eq!(averages[1].average_age, 45.0);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn duplicate_team_is_conflict(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/teams")
        .json(&json!({ "name": "teamA" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let error = response.json::<ApiErrorResponse>();
    assert_eq!(error.status, 409);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn created_team_is_returned(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/teams")
        .json(&json!({ "name": "teamC" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<CreateTeamResponse>().data.name, "teamC");
}
