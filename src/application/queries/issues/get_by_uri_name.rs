use super::IssueQueryService;
use crate::{
    application::{
        dto::IssueDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slugged_name::UriName,
};

pub struct GetIssueByUriNameQuery {
    pub uri_name: String,
}

impl IssueQueryService {
    pub async fn get_issue_by_uri_name(
        &self,
        query: GetIssueByUriNameQuery,
    ) -> ApplicationResult<IssueDto> {
        let uri_name = UriName::new(query.uri_name)?;
        let issue = self
            .repo
            .find_by_uri_name(&uri_name)
            .await?
            .ok_or_else(|| ApplicationError::not_found("issue not found"))?;

        Ok(issue.into())
    }
}
