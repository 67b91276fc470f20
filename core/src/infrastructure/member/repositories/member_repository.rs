use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};
use tracing::error;

use crate::{
    domain::{
        common::{
            Pagination,
            entities::{app_errors::CoreError, page::Page},
        },
        member::{
            entities::{Member, NewMember},
            ports::MemberRepository,
            value_objects::{MemberSearchCondition, MemberTeamDto},
        },
    },
    entity::{
        members::{ActiveModel, Column, Entity},
        teams,
    },
    infrastructure::member::{
        mappers::MemberTeamRow,
        predicates::{all_of, search_condition, where_params},
    },
};

#[derive(Debug, Clone)]
pub struct PostgresMemberRepository {
    pub db: DatabaseConnection,
}

impl PostgresMemberRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// members LEFT JOIN teams, projected onto the flattened search row.
    fn member_team_query(condition: Condition) -> Select<Entity> {
        Entity::find()
            .select_only()
            .column_as(Column::Id, "member_id")
            .column(Column::Username)
            .column(Column::Age)
            .column_as(teams::Column::Id, "team_id")
            .column_as(teams::Column::Name, "team_name")
            .left_join(teams::Entity)
            .filter(condition)
    }

    async fn fetch_member_teams(
        &self,
        query: Select<Entity>,
    ) -> Result<Vec<MemberTeamDto>, CoreError> {
        let rows = query
            .order_by_asc(Column::Id)
            .into_model::<MemberTeamRow>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search members: {}", e);
                CoreError::from(e)
            })?;

        Ok(rows.into_iter().map(MemberTeamDto::from).collect())
    }
}

impl MemberRepository for PostgresMemberRepository {
    async fn create_member(&self, member: NewMember) -> Result<Member, CoreError> {
        let active_model = ActiveModel {
            id: NotSet,
            username: Set(member.username),
            age: Set(member.age),
            team_id: Set(member.team_id),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create member: {}", e);
                CoreError::from(e)
            })?;

        Ok(Member::from(created))
    }

    async fn get_by_id(&self, member_id: i32) -> Result<Option<Member>, CoreError> {
        let member = Entity::find_by_id(member_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get member by id: {}", e);
                CoreError::from(e)
            })?;

        Ok(member.map(Member::from))
    }

    async fn find_all(&self) -> Result<Vec<Member>, CoreError> {
        let members = Entity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch members: {}", e);
                CoreError::from(e)
            })?
            .into_iter()
            .map(Member::from)
            .collect();

        Ok(members)
    }

    async fn find_by_username(&self, username: String) -> Result<Vec<Member>, CoreError> {
        let members = Entity::find()
            .filter(Column::Username.eq(username))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find members by username: {}", e);
                CoreError::from(e)
            })?
            .into_iter()
            .map(Member::from)
            .collect();

        Ok(members)
    }

    async fn search(&self, condition: MemberSearchCondition) -> Result<Vec<MemberTeamDto>, CoreError> {
        self.fetch_member_teams(Self::member_team_query(search_condition(&condition)))
            .await
    }

    async fn search_where_params(
        &self,
        condition: MemberSearchCondition,
    ) -> Result<Vec<MemberTeamDto>, CoreError> {
        self.fetch_member_teams(Self::member_team_query(all_of(where_params(&condition))))
            .await
    }

    async fn search_page(
        &self,
        condition: MemberSearchCondition,
        pagination: Pagination,
    ) -> Result<Page<MemberTeamDto>, CoreError> {
        let query = Self::member_team_query(search_condition(&condition));

        let total = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count members: {}", e);
            CoreError::from(e)
        })?;

        let items = self
            .fetch_member_teams(query.offset(pagination.offset).limit(pagination.limit))
            .await?;

        Ok(Page::new(items, total, pagination.offset, pagination.limit))
    }
}
