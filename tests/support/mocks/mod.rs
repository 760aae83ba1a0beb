// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod issue_repo;
pub mod time;
pub mod util;

pub use issue_repo::InMemoryIssueRepo;
pub use time::fixed_now;
pub use util::DummyClock;
