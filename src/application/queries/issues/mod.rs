mod get_by_uri_name;
mod list_links;
mod service;

pub use get_by_uri_name::GetIssueByUriNameQuery;
pub use list_links::ListIssueLinksQuery;
pub use service::IssueQueryService;
