// src/application/commands/issues/mod.rs
mod add_link;
mod create;
mod service;

pub use add_link::AddSocialLinkCommand;
pub use create::{CreateIssueCommand, CreateIssueCommandBuilder};
pub use service::IssueCommandService;
