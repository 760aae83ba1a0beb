// src/domain/issue/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::issue::value_objects::{IssueId, IssueLinkId};
use crate::domain::slugged_name::{
    Degeneracy, EntityKind, EntityName, HasName, HasSlug, SluggedName, UriName, name_key,
};
use crate::domain::social_link::SocialLink;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Issue {
    pub id: IssueId,
    pub name: EntityName,
    pub uri_name: UriName,
    pub degeneracy: Degeneracy,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An issue that has not been stored yet. Its slug is filled in by
/// `UriNameService::assign` on the save path.
#[derive(Debug, Clone)]
pub struct NewIssue {
    name: String,
    slug: SluggedName,
    pub created_at: DateTime<Utc>,
}

impl NewIssue {
    pub fn new(name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            slug: SluggedName::default(),
            created_at,
        }
    }

    /// Fields ready for insertion. Fails if the record skipped normalization.
    pub fn prepared(&self) -> DomainResult<PreparedIssue<'_>> {
        let (uri_name, degeneracy) = self.slug.assigned().ok_or_else(|| {
            DomainError::validation("issue must be normalized before it is persisted")
        })?;
        let name = EntityName::new(self.name.as_str())?;
        Ok(PreparedIssue {
            name_key: name_key(&name)?,
            name,
            uri_name,
            degeneracy,
            created_at: self.created_at,
        })
    }
}

impl HasName for NewIssue {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl HasSlug for NewIssue {
    const KIND: EntityKind = EntityKind::new("issues");

    fn slugged_name(&self) -> &SluggedName {
        &self.slug
    }

    fn slugged_name_mut(&mut self) -> &mut SluggedName {
        &mut self.slug
    }
}

#[derive(Debug)]
pub struct PreparedIssue<'a> {
    pub name: EntityName,
    pub name_key: EntityName,
    pub uri_name: &'a UriName,
    pub degeneracy: Degeneracy,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct IssueLink {
    pub id: IssueLinkId,
    pub issue_id: IssueId,
    pub link: SocialLink,
    pub created_at: DateTime<Utc>,
}
