use super::IssueQueryService;
use crate::{
    application::{
        dto::SocialLinkDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::issue::IssueId,
};

pub struct ListIssueLinksQuery {
    pub issue_id: i64,
}

impl IssueQueryService {
    pub async fn list_issue_links(
        &self,
        query: ListIssueLinksQuery,
    ) -> ApplicationResult<Vec<SocialLinkDto>> {
        let issue_id = IssueId::new(query.issue_id)?;
        if self.repo.find_by_id(issue_id).await?.is_none() {
            return Err(ApplicationError::not_found("issue not found"));
        }

        let links = self.repo.list_links(issue_id).await?;
        Ok(links.into_iter().map(Into::into).collect())
    }
}
