//! Social-link and slugged-name field groups for Issuewise records.
//!
//! Host records compose [`domain::social_link::SocialLink`] and
//! [`domain::slugged_name::SluggedName`] and implement
//! [`domain::slugged_name::HasSlug`]. The save path calls
//! [`domain::slugged_name::UriNameService::assign`] right before persisting.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
