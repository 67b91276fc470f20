#[derive(Debug, Clone)]
pub struct CreateTeamInput {
    pub name: String,
}
