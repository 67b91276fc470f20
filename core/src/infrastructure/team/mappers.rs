use crate::{domain::team::entities::Team, entity::teams};

impl From<&teams::Model> for Team {
    fn from(model: &teams::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
        }
    }
}

impl From<teams::Model> for Team {
    fn from(model: teams::Model) -> Self {
        Self::from(&model)
    }
}
