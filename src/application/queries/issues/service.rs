use std::sync::Arc;

use crate::domain::issue::IssueRepository;

pub struct IssueQueryService {
    pub(super) repo: Arc<dyn IssueRepository>,
}

impl IssueQueryService {
    pub fn new(repo: Arc<dyn IssueRepository>) -> Self {
        Self { repo }
    }
}
