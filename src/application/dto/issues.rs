use crate::domain::issue::{Issue, IssueLink};
use crate::domain::social_link::LinkType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueDto {
    pub id: i64,
    pub name: String,
    pub uri_name: String,
    pub degeneracy: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Issue> for IssueDto {
    fn from(issue: Issue) -> Self {
        Self {
            id: issue.id.into(),
            name: issue.name.into_inner(),
            uri_name: issue.uri_name.into_inner(),
            degeneracy: issue.degeneracy.get(),
            created_at: issue.created_at,
            updated_at: issue.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLinkDto {
    pub id: i64,
    pub issue_id: i64,
    pub link: String,
    pub link_type: LinkType,
    pub created_at: DateTime<Utc>,
}

impl From<IssueLink> for SocialLinkDto {
    fn from(link: IssueLink) -> Self {
        Self {
            id: link.id.into(),
            issue_id: link.issue_id.into(),
            link: link.link.link().as_str().to_string(),
            link_type: link.link.link_type(),
            created_at: link.created_at,
        }
    }
}
