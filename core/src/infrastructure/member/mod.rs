pub mod mappers;
pub mod predicates;
pub mod repositories;

pub use repositories::{PostgresMemberQueryRepository, PostgresMemberRepository};
