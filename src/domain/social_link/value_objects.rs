// src/domain/social_link/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use url::Url;

pub const MAX_LINK_LENGTH: usize = 300;

const ALLOWED_SCHEMES: [&str; 4] = ["http", "https", "ftp", "ftps"];

/// Where a social link points. Persisted as a three character code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkType {
    #[serde(rename = "fac")]
    Facebook,
    #[serde(rename = "twi")]
    Twitter,
    #[serde(rename = "quo")]
    Quora,
    #[serde(rename = "wik")]
    Wikipedia,
    #[serde(rename = "lin")]
    Linkedin,
    #[serde(rename = "blo")]
    Blog,
}

impl LinkType {
    pub const ALL: [Self; 6] = [
        Self::Facebook,
        Self::Twitter,
        Self::Quora,
        Self::Wikipedia,
        Self::Linkedin,
        Self::Blog,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Facebook => "fac",
            Self::Twitter => "twi",
            Self::Quora => "quo",
            Self::Wikipedia => "wik",
            Self::Linkedin => "lin",
            Self::Blog => "blo",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::Quora => "quora",
            Self::Wikipedia => "wikipedia",
            Self::Linkedin => "linkedin",
            Self::Blog => "blog",
        }
    }

    pub fn from_code(code: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.code() == code)
            .ok_or_else(|| DomainError::validation(format!("unknown link type code: {code:?}")))
    }
}

impl FromStr for LinkType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An absolute URL of at most [`MAX_LINK_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialUrl(String);

impl SocialUrl {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("social link cannot be empty"));
        }
        if trimmed.chars().count() > MAX_LINK_LENGTH {
            return Err(DomainError::validation(format!(
                "social link must be at most {MAX_LINK_LENGTH} characters"
            )));
        }

        let parsed = Url::parse(trimmed)
            .map_err(|err| DomainError::validation(format!("social link is not a valid url: {err}")))?;
        if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
            return Err(DomainError::validation(format!(
                "social link scheme {:?} is not supported",
                parsed.scheme()
            )));
        }
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(DomainError::validation("social link must include a host"));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SocialUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SocialUrl> for String {
    fn from(value: SocialUrl) -> Self {
        value.0
    }
}
