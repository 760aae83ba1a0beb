// tests/support/mocks/issue_repo.rs
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use issuewise_core::domain::errors::{DomainError, DomainResult};
use issuewise_core::domain::issue::{
    Issue, IssueId, IssueLink, IssueLinkId, IssueRepository, NewIssue,
};
use issuewise_core::domain::slugged_name::{
    Degeneracy, DegeneracyLookup, EntityKind, EntityName, HasSlug, UriName, collapse_whitespace,
};
use issuewise_core::domain::social_link::SocialLink;

/// Issue store backed by vectors. Enforces unique uri names like the SQLite
/// schema does.
#[derive(Default)]
pub struct InMemoryIssueRepo {
    issues: Mutex<Vec<Issue>>,
    links: Mutex<Vec<IssueLink>>,
    lookups: Mutex<Vec<String>>,
}

impl InMemoryIssueRepo {
    /// Names passed to `max_degeneracy`, in call order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn issues(&self) -> Vec<Issue> {
        self.issues.lock().unwrap().clone()
    }
}

#[async_trait]
impl DegeneracyLookup for InMemoryIssueRepo {
    async fn max_degeneracy(
        &self,
        kind: EntityKind,
        name_key: &EntityName,
    ) -> DomainResult<Option<Degeneracy>> {
        assert_eq!(kind, NewIssue::KIND);
        self.lookups.lock().unwrap().push(name_key.as_str().to_string());
        let issues = self.issues.lock().unwrap();
        Ok(issues
            .iter()
            .filter(|issue| collapse_whitespace(issue.name.as_str()) == name_key.as_str())
            .map(|issue| issue.degeneracy)
            .max())
    }
}

#[async_trait]
impl IssueRepository for InMemoryIssueRepo {
    async fn insert(&self, issue: NewIssue) -> DomainResult<Issue> {
        let prepared = issue.prepared()?;
        let mut issues = self.issues.lock().unwrap();
        if issues.iter().any(|existing| existing.uri_name == *prepared.uri_name) {
            return Err(DomainError::Conflict("uri name already exists".into()));
        }

        let stored = Issue {
            id: IssueId::new(issues.len() as i64 + 1)?,
            name: prepared.name,
            uri_name: prepared.uri_name.clone(),
            degeneracy: prepared.degeneracy,
            created_at: prepared.created_at,
            updated_at: prepared.created_at,
        };
        issues.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: IssueId) -> DomainResult<Option<Issue>> {
        let issues = self.issues.lock().unwrap();
        Ok(issues.iter().find(|issue| issue.id == id).cloned())
    }

    async fn find_by_uri_name(&self, uri_name: &UriName) -> DomainResult<Option<Issue>> {
        let issues = self.issues.lock().unwrap();
        Ok(issues.iter().find(|issue| issue.uri_name == *uri_name).cloned())
    }

    async fn add_link(
        &self,
        issue_id: IssueId,
        link: SocialLink,
        created_at: DateTime<Utc>,
    ) -> DomainResult<IssueLink> {
        let mut links = self.links.lock().unwrap();
        let stored = IssueLink {
            id: IssueLinkId::new(links.len() as i64 + 1)?,
            issue_id,
            link,
            created_at,
        };
        links.push(stored.clone());
        Ok(stored)
    }

    async fn list_links(&self, issue_id: IssueId) -> DomainResult<Vec<IssueLink>> {
        let links = self.links.lock().unwrap();
        Ok(links
            .iter()
            .filter(|link| link.issue_id == issue_id)
            .cloned()
            .collect())
    }
}
