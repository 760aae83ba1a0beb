use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IssueId(pub i64);

impl IssueId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("issue id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<IssueId> for i64 {
    fn from(value: IssueId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IssueLinkId(pub i64);

impl IssueLinkId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("issue link id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<IssueLinkId> for i64 {
    fn from(value: IssueLinkId) -> Self {
        value.0
    }
}
