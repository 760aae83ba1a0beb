// tests/support/helpers.rs
use std::sync::Arc;

use issuewise_core::application::services::ApplicationServices;
use issuewise_core::config::AppConfig;
use issuewise_core::infrastructure::{
    database, repositories::SqliteIssueRepository, telemetry, util::PercentSegmentEncoder,
};
use sqlx::SqlitePool;

use super::mocks::{DummyClock, InMemoryIssueRepo};

pub fn in_memory_services() -> (ApplicationServices, Arc<InMemoryIssueRepo>) {
    telemetry::init_tracing();
    let repo = Arc::new(InMemoryIssueRepo::default());
    let services = ApplicationServices::new(
        Arc::clone(&repo),
        Arc::new(DummyClock),
        Arc::new(PercentSegmentEncoder),
    );
    (services, repo)
}

pub async fn migrated_pool() -> SqlitePool {
    telemetry::init_tracing();
    let pool = database::init_pool(&AppConfig::in_memory())
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool)
        .await
        .expect("run migrations");
    pool
}

pub async fn sqlite_services() -> (ApplicationServices, SqlitePool) {
    let pool = migrated_pool().await;
    let repo = Arc::new(SqliteIssueRepository::new(pool.clone()));
    let services = ApplicationServices::new(
        repo,
        Arc::new(DummyClock),
        Arc::new(PercentSegmentEncoder),
    );
    (services, pool)
}
