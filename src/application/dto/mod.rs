pub mod issues;

pub use issues::{IssueDto, SocialLinkDto};
