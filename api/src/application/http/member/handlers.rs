pub mod create_member;
pub mod get_member;
pub mod get_member_statistics;
pub mod get_members;
pub mod search_members;
