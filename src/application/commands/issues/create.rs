// src/application/commands/issues/create.rs
use super::IssueCommandService;
use crate::{
    application::{dto::IssueDto, error::ApplicationResult},
    domain::{errors::DomainError, issue::NewIssue},
};

pub struct CreateIssueCommand {
    pub name: String,
}

impl CreateIssueCommand {
    pub fn builder() -> CreateIssueCommandBuilder {
        CreateIssueCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateIssueCommandBuilder {
    name: Option<String>,
}

impl CreateIssueCommandBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn build(self) -> Result<CreateIssueCommand, &'static str> {
        Ok(CreateIssueCommand {
            name: self.name.ok_or("name is required")?,
        })
    }
}

impl IssueCommandService {
    pub async fn create_issue(&self, command: CreateIssueCommand) -> ApplicationResult<IssueDto> {
        let mut issue = NewIssue::new(command.name, self.clock.now());

        // normalization has to run immediately before the insert
        self.uri_names.assign(&mut issue).await?;

        let created = self.repo.insert(issue).await.inspect_err(|err| {
            if let DomainError::Conflict(reason) = err {
                tracing::warn!(%reason, "issue insert rejected by a uniqueness constraint");
            }
        })?;

        tracing::info!(
            issue_id = i64::from(created.id),
            uri_name = %created.uri_name,
            degeneracy = %created.degeneracy,
            "issue created"
        );
        Ok(created.into())
    }
}
