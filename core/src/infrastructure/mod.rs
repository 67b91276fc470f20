pub mod db;
pub mod member;
pub mod team;
