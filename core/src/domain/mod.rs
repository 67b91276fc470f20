pub mod common;
pub mod member;
pub mod team;
