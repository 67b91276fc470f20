use std::future::Future;

use crate::domain::{
    common::{
        Pagination,
        entities::{app_errors::CoreError, page::Page},
    },
    member::{
        entities::{Member, MemberWithTeam, NewMember},
        value_objects::{
            AgeStatistics, CreateMemberInput, MemberDto, MemberSearchCondition, MemberTeamDto,
            TeamAgeAverage,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait MemberService: Send + Sync {
    fn search_members(
        &self,
        condition: MemberSearchCondition,
    ) -> impl Future<Output = Result<Vec<MemberTeamDto>, CoreError>> + Send;

    fn search_members_page(
        &self,
        condition: MemberSearchCondition,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Page<MemberTeamDto>, CoreError>> + Send;

    fn create_member(
        &self,
        input: CreateMemberInput,
    ) -> impl Future<Output = Result<Member, CoreError>> + Send;

    fn get_member(&self, member_id: i32)
    -> impl Future<Output = Result<Member, CoreError>> + Send;

    fn get_age_statistics(&self) -> impl Future<Output = Result<AgeStatistics, CoreError>> + Send;
}

/// Repository trait for members
#[cfg_attr(test, mockall::automock)]
pub trait MemberRepository: Send + Sync {
    fn create_member(
        &self,
        member: NewMember,
    ) -> impl Future<Output = Result<Member, CoreError>> + Send;

    fn get_by_id(
        &self,
        member_id: i32,
    ) -> impl Future<Output = Result<Option<Member>, CoreError>> + Send;

    fn find_all(&self) -> impl Future<Output = Result<Vec<Member>, CoreError>> + Send;

    fn find_by_username(
        &self,
        username: String,
    ) -> impl Future<Output = Result<Vec<Member>, CoreError>> + Send;

    /// Members joined with their team, filtered by the present fields of `condition`.
    fn search(
        &self,
        condition: MemberSearchCondition,
    ) -> impl Future<Output = Result<Vec<MemberTeamDto>, CoreError>> + Send;

    /// Same result as [`MemberRepository::search`], built from a list of optional predicates.
    fn search_where_params(
        &self,
        condition: MemberSearchCondition,
    ) -> impl Future<Output = Result<Vec<MemberTeamDto>, CoreError>> + Send;

    fn search_page(
        &self,
        condition: MemberSearchCondition,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Page<MemberTeamDto>, CoreError>> + Send;
}

/// Read and bulk-write queries over members that go beyond plain lookups:
/// joins, aggregates, subqueries, case expressions and projections.
#[cfg_attr(test, mockall::automock)]
pub trait MemberQueryRepository: Send + Sync {
    fn find_by_username_and_age(
        &self,
        username: Option<String>,
        age: Option<i32>,
    ) -> impl Future<Output = Result<Vec<Member>, CoreError>> + Send;

    fn find_by_username_and_age_where_params(
        &self,
        username: Option<String>,
        age: Option<i32>,
    ) -> impl Future<Output = Result<Vec<Member>, CoreError>> + Send;

    fn fetch_page(
        &self,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Vec<Member>, CoreError>> + Send;

    fn fetch_page_with_total(
        &self,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Page<Member>, CoreError>> + Send;

    fn find_by_age_sorted(
        &self,
        age: i32,
    ) -> impl Future<Output = Result<Vec<Member>, CoreError>> + Send;

    fn age_statistics(&self) -> impl Future<Output = Result<AgeStatistics, CoreError>> + Send;

    fn team_age_averages(
        &self,
    ) -> impl Future<Output = Result<Vec<TeamAgeAverage>, CoreError>> + Send;

    fn find_by_team_name(
        &self,
        team_name: String,
    ) -> impl Future<Output = Result<Vec<Member>, CoreError>> + Send;

    fn find_usernames_matching_team_names(
        &self,
    ) -> impl Future<Output = Result<Vec<Member>, CoreError>> + Send;

    fn find_with_team_joined_on(
        &self,
        team_name: String,
    ) -> impl Future<Output = Result<Vec<MemberWithTeam>, CoreError>> + Send;

    fn find_with_team(
        &self,
        username: String,
    ) -> impl Future<Output = Result<Option<MemberWithTeam>, CoreError>> + Send;

    fn find_oldest(&self) -> impl Future<Output = Result<Vec<Member>, CoreError>> + Send;

    fn find_at_least_average_age(
        &self,
    ) -> impl Future<Output = Result<Vec<Member>, CoreError>> + Send;

    fn find_with_age_in_older_than(
        &self,
        age: i32,
    ) -> impl Future<Output = Result<Vec<Member>, CoreError>> + Send;

    fn age_labels(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn age_bands(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn username_age_labels(
        &self,
    ) -> impl Future<Output = Result<Vec<Option<String>>, CoreError>> + Send;

    fn usernames(&self) -> impl Future<Output = Result<Vec<Option<String>>, CoreError>> + Send;

    fn username_age_pairs(
        &self,
    ) -> impl Future<Output = Result<Vec<(Option<String>, i32)>, CoreError>> + Send;

    fn member_dtos(&self) -> impl Future<Output = Result<Vec<MemberDto>, CoreError>> + Send;

    fn bulk_rename_younger_than(
        &self,
        age: i32,
        username: String,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn bulk_add_age(&self, delta: i32) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
