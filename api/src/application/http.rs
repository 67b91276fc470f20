pub mod health;
pub mod member;
pub mod query_builder;
pub mod query_extractor;
pub mod query_params;
pub mod server;
pub mod team;

#[cfg(test)]
mod tests;
