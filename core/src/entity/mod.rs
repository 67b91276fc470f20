//! `SeaORM` entities for the `members` and `teams` tables.

pub mod prelude;

pub mod members;
pub mod teams;
