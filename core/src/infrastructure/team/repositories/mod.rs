pub mod team_repository;

pub use team_repository::PostgresTeamRepository;
