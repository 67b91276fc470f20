use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMemberValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "username must not be empty"))]
    pub username: Option<String>,

    #[validate(range(min = 0, max = 200, message = "age must be between 0 and 200"))]
    pub age: i32,

    /// Name of an existing team the member joins.
    #[serde(default)]
    #[validate(length(min = 1, message = "team_name must not be empty"))]
    pub team_name: Option<String>,
}
