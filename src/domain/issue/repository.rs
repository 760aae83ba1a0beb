use crate::domain::errors::DomainResult;
use crate::domain::issue::entity::{Issue, IssueLink, NewIssue};
use crate::domain::issue::value_objects::IssueId;
use crate::domain::slugged_name::{DegeneracyLookup, UriName};
use crate::domain::social_link::SocialLink;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait IssueRepository: DegeneracyLookup {
    async fn insert(&self, issue: NewIssue) -> DomainResult<Issue>;
    async fn find_by_id(&self, id: IssueId) -> DomainResult<Option<Issue>>;
    async fn find_by_uri_name(&self, uri_name: &UriName) -> DomainResult<Option<Issue>>;
    async fn add_link(
        &self,
        issue_id: IssueId,
        link: SocialLink,
        created_at: DateTime<Utc>,
    ) -> DomainResult<IssueLink>;
    async fn list_links(&self, issue_id: IssueId) -> DomainResult<Vec<IssueLink>>;
}
