// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::issues::IssueCommandService,
        ports::{time::Clock, util::SegmentEncoder},
        queries::issues::IssueQueryService,
    },
    domain::{
        issue::IssueRepository,
        slugged_name::{DegeneracyLookup, UriNameService},
    },
};

pub struct ApplicationServices {
    pub issue_commands: Arc<IssueCommandService>,
    pub issue_queries: Arc<IssueQueryService>,
}

impl ApplicationServices {
    /// Wire the services around one repository, which also answers the
    /// degeneracy lookups for issue slugs.
    pub fn new<R>(issue_repo: Arc<R>, clock: Arc<dyn Clock>, encoder: Arc<dyn SegmentEncoder>) -> Self
    where
        R: IssueRepository + 'static,
    {
        let lookup: Arc<dyn DegeneracyLookup> = Arc::clone(&issue_repo) as Arc<dyn DegeneracyLookup>;
        let issue_repo: Arc<dyn IssueRepository> = issue_repo;

        let uri_names = Arc::new(UriNameService::new(lookup, encoder));

        let issue_commands = Arc::new(IssueCommandService::new(
            Arc::clone(&issue_repo),
            Arc::clone(&uri_names),
            Arc::clone(&clock),
        ));
        let issue_queries = Arc::new(IssueQueryService::new(Arc::clone(&issue_repo)));

        Self {
            issue_commands,
            issue_queries,
        }
    }
}
