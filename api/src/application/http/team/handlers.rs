pub mod create_team;
pub mod get_team_statistics;
pub mod get_teams;
