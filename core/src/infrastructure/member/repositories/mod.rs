pub mod member_query_repository;
pub mod member_repository;

pub use member_query_repository::PostgresMemberQueryRepository;
pub use member_repository::PostgresMemberRepository;
