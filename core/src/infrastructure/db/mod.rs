pub mod postgres;
pub mod schema;
