// src/application/commands/issues/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{issue::IssueRepository, slugged_name::UriNameService},
};

pub struct IssueCommandService {
    pub(super) repo: Arc<dyn IssueRepository>,
    pub(super) uri_names: Arc<UriNameService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl IssueCommandService {
    pub fn new(
        repo: Arc<dyn IssueRepository>,
        uri_names: Arc<UriNameService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            uri_names,
            clock,
        }
    }
}
