//! Builds filter conditions for member queries out of optional search fields.
//!
//! Two equivalent styles are supported. [`search_condition`] grows a single
//! conjunction, adding a term for each present field. The `*_eq`/`age_*`
//! functions each yield an optional term on their own, and [`all_of`] drops
//! the absent ones before conjoining the rest. In both styles a condition with
//! no terms matches every row.

use sea_orm::{ColumnTrait, Condition, sea_query::SimpleExpr};

use crate::{
    domain::member::value_objects::MemberSearchCondition,
    entity::{members, teams},
};

pub fn search_condition(condition: &MemberSearchCondition) -> Condition {
    let mut builder = Condition::all();

    if let Some(username) = &condition.username {
        builder = builder.add(members::Column::Username.eq(username.as_str()));
    }

    if let Some(team_name) = &condition.team_name {
        builder = builder.add(teams::Column::Name.eq(team_name.as_str()));
    }

    if let Some(age_goe) = condition.age_goe {
        builder = builder.add(members::Column::Age.gte(age_goe));
    }

    if let Some(age_loe) = condition.age_loe {
        builder = builder.add(members::Column::Age.lte(age_loe));
    }

    builder
}

pub fn where_params(condition: &MemberSearchCondition) -> [Option<SimpleExpr>; 4] {
    [
        username_eq(condition.username.as_deref()),
        team_name_eq(condition.team_name.as_deref()),
        age_goe(condition.age_goe),
        age_loe(condition.age_loe),
    ]
}

pub fn all_of<I>(predicates: I) -> Condition
where
    I: IntoIterator<Item = Option<SimpleExpr>>,
{
    predicates
        .into_iter()
        .fold(Condition::all(), |conjunction, predicate| {
            conjunction.add_option(predicate)
        })
}

pub fn username_eq(username: Option<&str>) -> Option<SimpleExpr> {
    username.map(|username| members::Column::Username.eq(username))
}

pub fn team_name_eq(team_name: Option<&str>) -> Option<SimpleExpr> {
    team_name.map(|team_name| teams::Column::Name.eq(team_name))
}

pub fn age_eq(age: Option<i32>) -> Option<SimpleExpr> {
    age.map(|age| members::Column::Age.eq(age))
}

pub fn age_goe(age: Option<i32>) -> Option<SimpleExpr> {
    age.map(|age| members::Column::Age.gte(age))
}

pub fn age_loe(age: Option<i32>) -> Option<SimpleExpr> {
    age.map(|age| members::Column::Age.lte(age))
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    use super::*;

    fn render(condition: Condition) -> String {
        members::Entity::find()
            .filter(condition)
            .build(DbBackend::Postgres)
            .to_string()
    }

    fn full_condition() -> MemberSearchCondition {
        MemberSearchCondition {
            username: Some("member1".to_string()),
            team_name: Some("teamA".to_string()),
            age_goe: Some(10),
            age_loe: Some(20),
        }
    }

    #[test]
    fn absent_fields_produce_no_terms() {
        let sql = render(search_condition(&MemberSearchCondition::default()));

        assert!(!sql.contains(r#""members"."username" ="#));
        assert!(!sql.contains(r#""teams"."name" ="#));
        assert!(!sql.contains(r#""members"."age" >="#));
        assert!(!sql.contains(r#""members"."age" <="#));
    }

    #[test]
    fn present_fields_are_conjoined() {
        let sql = render(search_condition(&full_condition()));

        assert!(sql.contains(r#""members"."username" = 'member1'"#));
        assert!(sql.contains(r#""teams"."name" = 'teamA'"#));
        assert!(sql.contains(r#""members"."age" >= 10"#));
        assert!(sql.contains(r#""members"."age" <= 20"#));
        assert_eq!(sql.matches(" AND ").count(), 3);
        assert!(!sql.contains(" OR "));
    }

    #[test]
    fn only_range_bounds() {
        let sql = render(search_condition(&MemberSearchCondition {
            age_goe: Some(30),
            age_loe: Some(45),
            ..Default::default()
        }));

        assert!(sql.contains(r#""members"."age" >= 30 AND "members"."age" <= 45"#));
        assert!(!sql.contains(r#""teams"."name" ="#));
    }

    #[test]
    fn where_params_skip_absent_predicates() {
        let params = where_params(&MemberSearchCondition {
            team_name: Some("teamB".to_string()),
            ..Default::default()
        });

        assert_eq!(params.iter().filter(|p| p.is_some()).count(), 1);
        assert!(render(all_of(params)).contains(r#""teams"."name" = 'teamB'"#));
    }

    #[test]
    fn both_styles_render_the_same_filter() {
        let conditions = [
            MemberSearchCondition::default(),
            full_condition(),
            MemberSearchCondition {
                username: Some("member2".to_string()),
                age_loe: Some(20),
                ..Default::default()
            },
            MemberSearchCondition {
                team_name: Some("teamA".to_string()),
                age_goe: Some(15),
                ..Default::default()
            },
        ];

        for condition in conditions {
            assert_eq!(
                render(search_condition(&condition)),
                render(all_of(where_params(&condition))),
                "styles diverged for {condition:?}"
            );
        }
    }

    #[test]
    fn inverted_range_is_not_rejected() {
        let sql = render(search_condition(&MemberSearchCondition {
            age_goe: Some(50),
            age_loe: Some(10),
            ..Default::default()
        }));

        assert!(sql.contains(r#""members"."age" >= 50 AND "members"."age" <= 10"#));
    }
}
