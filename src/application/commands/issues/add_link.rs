// src/application/commands/issues/add_link.rs
use super::IssueCommandService;
use crate::{
    application::{
        dto::SocialLinkDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{slugged_name::UriName, social_link::SocialLink},
};

pub struct AddSocialLinkCommand {
    pub issue_uri_name: String,
    pub link: String,
    /// Three character link type code, e.g. `twi`.
    pub link_type: String,
}

impl IssueCommandService {
    pub async fn add_social_link(
        &self,
        command: AddSocialLinkCommand,
    ) -> ApplicationResult<SocialLinkDto> {
        let link = SocialLink::parse(&command.link, &command.link_type)?;
        let uri_name = UriName::new(command.issue_uri_name)?;

        let issue = self
            .repo
            .find_by_uri_name(&uri_name)
            .await?
            .ok_or_else(|| ApplicationError::not_found("issue not found"))?;

        let stored = self.repo.add_link(issue.id, link, self.clock.now()).await?;
        tracing::debug!(
            issue_id = i64::from(issue.id),
            link_type = stored.link.link_type().code(),
            "social link added"
        );
        Ok(stored.into())
    }
}
