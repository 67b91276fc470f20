pub use super::members::Entity as Members;
pub use super::teams::Entity as Teams;
