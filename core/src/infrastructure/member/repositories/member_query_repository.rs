use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, QueryTrait, RelationTrait,
    sea_query::{
        Alias, BinOper, CaseStatement, Expr, Func, IntoCondition, NullOrdering, Query, SelectStatement,
        SimpleExpr, SubQueryStatement,
    },
};
use tracing::error;

use crate::{
    domain::{
        common::{
            Pagination,
            entities::{app_errors::CoreError, page::Page},
        },
        member::{
            entities::{Member, MemberWithTeam},
            ports::MemberQueryRepository,
            value_objects::{AgeStatistics, MemberDto, TeamAgeAverage},
        },
    },
    entity::{
        members::{self, Column, Entity},
        teams,
    },
    infrastructure::member::{
        mappers::{AgeStatisticsRow, MemberDtoRow, TeamAgeAverageRow},
        predicates::{age_eq, all_of, username_eq},
    },
};

const SUB_MEMBER: &str = "sub_member";

fn concat(left: SimpleExpr, right: SimpleExpr) -> SimpleExpr {
    SimpleExpr::Binary(Box::new(left), BinOper::Custom("||"), Box::new(right))
}

/// `username || '_' || CAST(age AS TEXT)`, NULL when the username is NULL.
fn username_age_label() -> SimpleExpr {
    concat(
        concat(Expr::col((Entity, Column::Username)).into(), Expr::val("_").into()),
        Expr::col((Entity, Column::Age)).cast_as(Alias::new("TEXT")),
    )
}

#[derive(Debug, Clone)]
pub struct PostgresMemberQueryRepository {
    pub db: DatabaseConnection,
}

impl PostgresMemberQueryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// `SELECT <expr> FROM members AS sub_member [WHERE ...]`, for use as a subquery.
    fn sub_member_select(expr: SimpleExpr) -> SelectStatement {
        Query::select()
            .expr(expr)
            .from_as(Entity, Alias::new(SUB_MEMBER))
            .to_owned()
    }

    fn sub_member_age() -> Expr {
        Expr::col((Alias::new(SUB_MEMBER), Column::Age))
    }

    fn scalar(select: SelectStatement) -> SimpleExpr {
        SimpleExpr::SubQuery(None, Box::new(SubQueryStatement::SelectStatement(select)))
    }

    fn as_double(expr: SimpleExpr) -> SimpleExpr {
        Expr::expr(expr).cast_as(Alias::new("double precision"))
    }

    async fn fetch_members(
        &self,
        query: sea_orm::Select<Entity>,
        action: &str,
    ) -> Result<Vec<Member>, CoreError> {
        let members = query.all(&self.db).await.map_err(|e| {
            error!("Failed to {}: {}", action, e);
            CoreError::from(e)
        })?;

        Ok(members.into_iter().map(Member::from).collect())
    }

    async fn fetch_labels<T>(
        &self,
        label: SimpleExpr,
        action: &str,
    ) -> Result<Vec<T>, CoreError>
    where
        T: sea_orm::TryGetableMany + Send + Sync,
    {
        Entity::find()
            .select_only()
            .column_as(label, "label")
            .order_by_asc(Column::Id)
            .into_tuple::<T>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to {}: {}", action, e);
                CoreError::from(e)
            })
    }
}

impl MemberQueryRepository for PostgresMemberQueryRepository {
    async fn find_by_username_and_age(
        &self,
        username: Option<String>,
        age: Option<i32>,
    ) -> Result<Vec<Member>, CoreError> {
        let mut query = Entity::find();

        if let Some(username) = username {
            query = query.filter(Column::Username.eq(username));
        }

        if let Some(age) = age {
            query = query.filter(Column::Age.eq(age));
        }

        self.fetch_members(query.order_by_asc(Column::Id), "find members by username and age")
            .await
    }

    async fn find_by_username_and_age_where_params(
        &self,
        username: Option<String>,
        age: Option<i32>,
    ) -> Result<Vec<Member>, CoreError> {
        let query = Entity::find()
            .filter(all_of([username_eq(username.as_deref()), age_eq(age)]))
            .order_by_asc(Column::Id);

        self.fetch_members(query, "find members by username and age")
            .await
    }

    async fn fetch_page(&self, pagination: Pagination) -> Result<Vec<Member>, CoreError> {
        let query = Entity::find()
            .order_by_desc(Column::Username)
            .offset(pagination.offset)
            .limit(pagination.limit);

        self.fetch_members(query, "fetch member page").await
    }

    async fn fetch_page_with_total(
        &self,
        pagination: Pagination,
    ) -> Result<Page<Member>, CoreError> {
        let total = Entity::find().count(&self.db).await.map_err(|e| {
            error!("Failed to count members: {}", e);
            CoreError::from(e)
        })?;

        let items = self.fetch_page(pagination).await?;

        Ok(Page::new(items, total, pagination.offset, pagination.limit))
    }

    async fn find_by_age_sorted(&self, age: i32) -> Result<Vec<Member>, CoreError> {
        let query = Entity::find()
            .filter(Column::Age.eq(age))
            .order_by(Column::Age, Order::Desc)
            .order_by_with_nulls(Column::Username, Order::Asc, NullOrdering::Last);

        self.fetch_members(query, "fetch sorted members").await
    }

    async fn age_statistics(&self) -> Result<AgeStatistics, CoreError> {
        let age = || Expr::col((Entity, Column::Age));

        let row = Entity::find()
            .select_only()
            .column_as(Expr::col((Entity, Column::Id)).count(), "count")
            .column_as(age().sum(), "sum")
            .column_as(Self::as_double(Func::avg(age()).into()), "avg")
            .column_as(age().max(), "max")
            .column_as(age().min(), "min")
            .into_model::<AgeStatisticsRow>()
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to compute age statistics: {}", e);
                CoreError::from(e)
            })?
            .ok_or(CoreError::InternalServerError)?;

        Ok(AgeStatistics::from(row))
    }

    async fn team_age_averages(&self) -> Result<Vec<TeamAgeAverage>, CoreError> {
        let rows = Entity::find()
            .select_only()
            .column_as(teams::Column::Name, "team_name")
            .column_as(
                Self::as_double(Func::avg(Expr::col((Entity, Column::Age))).into()),
                "average_age",
            )
            .inner_join(teams::Entity)
            .group_by(teams::Column::Name)
            .order_by_asc(teams::Column::Name)
            .into_model::<TeamAgeAverageRow>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to compute team age averages: {}", e);
                CoreError::from(e)
            })?;

        Ok(rows.into_iter().map(TeamAgeAverage::from).collect())
    }

    async fn find_by_team_name(&self, team_name: String) -> Result<Vec<Member>, CoreError> {
        let query = Entity::find()
            .inner_join(teams::Entity)
            .filter(teams::Column::Name.eq(team_name))
            .order_by_asc(Column::Id);

        self.fetch_members(query, "find members by team name").await
    }

    async fn find_usernames_matching_team_names(&self) -> Result<Vec<Member>, CoreError> {
        let mut query = Entity::find()
            .filter(Expr::col((Entity, Column::Username)).equals((teams::Entity, teams::Column::Name)))
            .order_by_asc(Column::Id);
        QueryTrait::query(&mut query).from(teams::Entity);

        self.fetch_members(query, "theta join members and teams")
            .await
    }

    async fn find_with_team_joined_on(
        &self,
        team_name: String,
    ) -> Result<Vec<MemberWithTeam>, CoreError> {
        let relation = members::Relation::Teams
            .def()
            .on_condition(move |_left, right| {
                Expr::col((right, teams::Column::Name))
                    .eq(team_name.clone())
                    .into_condition()
            });

        let rows = Entity::find()
            .select_also(teams::Entity)
            .join(JoinType::LeftJoin, relation)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to left join members and teams: {}", e);
                CoreError::from(e)
            })?;

        Ok(rows.into_iter().map(MemberWithTeam::from).collect())
    }

    async fn find_with_team(&self, username: String) -> Result<Option<MemberWithTeam>, CoreError> {
        let row = Entity::find()
            .find_also_related(teams::Entity)
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch member with team: {}", e);
                CoreError::from(e)
            })?;

        Ok(row.map(MemberWithTeam::from))
    }

    async fn find_oldest(&self) -> Result<Vec<Member>, CoreError> {
        let max_age = Self::sub_member_select(Self::sub_member_age().max());
        let query = Entity::find()
            .filter(Expr::col((Entity, Column::Age)).eq(Self::scalar(max_age)))
            .order_by_asc(Column::Id);

        self.fetch_members(query, "find oldest members").await
    }

    async fn find_at_least_average_age(&self) -> Result<Vec<Member>, CoreError> {
        let avg_age = Self::sub_member_select(Func::avg(Self::sub_member_age()).into());
        let query = Entity::find()
            .filter(Expr::col((Entity, Column::Age)).gte(Self::scalar(avg_age)))
            .order_by_asc(Column::Id);

        self.fetch_members(query, "find members at least average age")
            .await
    }

    async fn find_with_age_in_older_than(&self, age: i32) -> Result<Vec<Member>, CoreError> {
        let ages = Self::sub_member_select(Self::sub_member_age().into())
            .and_where(Self::sub_member_age().gt(age))
            .to_owned();
        let query = Entity::find()
            .filter(Column::Age.in_subquery(ages))
            .order_by_asc(Column::Id);

        self.fetch_members(query, "find members with age in subquery")
            .await
    }

    async fn age_labels(&self) -> Result<Vec<String>, CoreError> {
        let label = CaseStatement::new()
            .case(Column::Age.eq(10), "ten")
            .case(Column::Age.eq(20), "twenty")
            .finally("other");

        self.fetch_labels(label.into(), "label member ages").await
    }

    async fn age_bands(&self) -> Result<Vec<String>, CoreError> {
        let band = CaseStatement::new()
            .case(Column::Age.between(0, 20), "0~20")
            .case(Column::Age.between(20, 40), "20~40")
            .finally("40+");

        self.fetch_labels(band.into(), "band member ages").await
    }

    async fn username_age_labels(&self) -> Result<Vec<Option<String>>, CoreError> {
        self.fetch_labels(username_age_label(), "concatenate member labels")
            .await
    }

    async fn usernames(&self) -> Result<Vec<Option<String>>, CoreError> {
        Entity::find()
            .select_only()
            .column(Column::Username)
            .order_by_asc(Column::Id)
            .into_tuple::<Option<String>>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to project usernames: {}", e);
                CoreError::from(e)
            })
    }

    async fn username_age_pairs(&self) -> Result<Vec<(Option<String>, i32)>, CoreError> {
        Entity::find()
            .select_only()
            .column(Column::Username)
            .column(Column::Age)
            .order_by_asc(Column::Id)
            .into_tuple::<(Option<String>, i32)>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to project username and age: {}", e);
                CoreError::from(e)
            })
    }

    async fn member_dtos(&self) -> Result<Vec<MemberDto>, CoreError> {
        let rows = Entity::find()
            .select_only()
            .column(Column::Username)
            .column(Column::Age)
            .order_by_asc(Column::Id)
            .into_model::<MemberDtoRow>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to project member dtos: {}", e);
                CoreError::from(e)
            })?;

        Ok(rows.into_iter().map(MemberDto::from).collect())
    }

    async fn bulk_rename_younger_than(&self, age: i32, username: String) -> Result<u64, CoreError> {
        let result = Entity::update_many()
            .col_expr(Column::Username, Expr::value(username))
            .filter(Column::Age.lt(age))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to bulk rename members: {}", e);
                CoreError::from(e)
            })?;

        Ok(result.rows_affected)
    }

    async fn bulk_add_age(&self, delta: i32) -> Result<u64, CoreError> {
        let result = Entity::update_many()
            .col_expr(Column::Age, Expr::col(Column::Age).add(delta))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to bulk update member ages: {}", e);
                CoreError::from(e)
            })?;

        Ok(result.rows_affected)
    }
}
