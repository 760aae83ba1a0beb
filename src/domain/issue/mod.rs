pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Issue, IssueLink, NewIssue, PreparedIssue};
pub use repository::IssueRepository;
pub use value_objects::{IssueId, IssueLinkId};
