// src/infrastructure/repositories/sqlite_issue.rs
use super::{degeneracy::max_degeneracy_in, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::issue::{Issue, IssueId, IssueLink, IssueLinkId, IssueRepository, NewIssue};
use crate::domain::slugged_name::{
    Degeneracy, DegeneracyLookup, EntityKind, EntityName, HasSlug, UriName,
};
use crate::domain::social_link::SocialLink;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

const ISSUE_COLUMNS: &str = "id, name, uri_name, degeneracy, created_at, updated_at";
const LINK_COLUMNS: &str = "id, issue_id, link, link_type, created_at";

#[derive(Clone)]
pub struct SqliteIssueRepository {
    pool: SqlitePool,
}

impl SqliteIssueRepository {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct IssueRow {
    id: i64,
    name: String,
    uri_name: String,
    degeneracy: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<IssueRow> for Issue {
    type Error = DomainError;

    fn try_from(row: IssueRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: IssueId::new(row.id)?,
            name: EntityName::new(row.name)?,
            uri_name: UriName::new(row.uri_name)?,
            degeneracy: Degeneracy::try_from(row.degeneracy)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct IssueLinkRow {
    id: i64,
    issue_id: i64,
    link: String,
    link_type: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<IssueLinkRow> for IssueLink {
    type Error = DomainError;

    fn try_from(row: IssueLinkRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: IssueLinkId::new(row.id)?,
            issue_id: IssueId::new(row.issue_id)?,
            link: SocialLink::parse(&row.link, &row.link_type)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl DegeneracyLookup for SqliteIssueRepository {
    async fn max_degeneracy(
        &self,
        kind: EntityKind,
        name_key: &EntityName,
    ) -> DomainResult<Option<Degeneracy>> {
        if kind != NewIssue::KIND {
            return Err(DomainError::validation(format!(
                "issue repository cannot look up {kind}"
            )));
        }
        max_degeneracy_in(&self.pool, kind, name_key).await
    }
}

#[async_trait]
impl IssueRepository for SqliteIssueRepository {
    async fn insert(&self, issue: NewIssue) -> DomainResult<Issue> {
        let prepared = issue.prepared()?;

        let sql = format!(
            "INSERT INTO issues (name, name_key, uri_name, degeneracy, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING {ISSUE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, IssueRow>(&sql)
            .bind(prepared.name.as_str())
            .bind(prepared.name_key.as_str())
            .bind(prepared.uri_name.as_str())
            .bind(i64::from(prepared.degeneracy))
            .bind(prepared.created_at)
            .bind(prepared.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Issue::try_from(row)
    }

    async fn find_by_id(&self, id: IssueId) -> DomainResult<Option<Issue>> {
        let sql = format!("SELECT {ISSUE_COLUMNS} FROM issues WHERE id = ?");
        let row = sqlx::query_as::<_, IssueRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Issue::try_from).transpose()
    }

    async fn find_by_uri_name(&self, uri_name: &UriName) -> DomainResult<Option<Issue>> {
        let sql = format!("SELECT {ISSUE_COLUMNS} FROM issues WHERE uri_name = ?");
        let row = sqlx::query_as::<_, IssueRow>(&sql)
            .bind(uri_name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Issue::try_from).transpose()
    }

    async fn add_link(
        &self,
        issue_id: IssueId,
        link: SocialLink,
        created_at: DateTime<Utc>,
    ) -> DomainResult<IssueLink> {
        let sql = format!(
            "INSERT INTO issue_social_links (issue_id, link, link_type, created_at) \
             VALUES (?, ?, ?, ?) RETURNING {LINK_COLUMNS}"
        );
        let row = sqlx::query_as::<_, IssueLinkRow>(&sql)
            .bind(i64::from(issue_id))
            .bind(link.link().as_str())
            .bind(link.link_type().code())
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        IssueLink::try_from(row)
    }

    async fn list_links(&self, issue_id: IssueId) -> DomainResult<Vec<IssueLink>> {
        let sql = format!(
            "SELECT {LINK_COLUMNS} FROM issue_social_links WHERE issue_id = ? ORDER BY id"
        );
        let rows = sqlx::query_as::<_, IssueLinkRow>(&sql)
            .bind(i64::from(issue_id))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(IssueLink::try_from).collect()
    }
}
