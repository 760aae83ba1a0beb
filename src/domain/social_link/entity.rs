// src/domain/social_link/entity.rs
use crate::domain::errors::DomainResult;
use crate::domain::social_link::value_objects::{LinkType, SocialUrl};

/// Link fields that any host entity can carry. Both halves are always set
/// together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    link: SocialUrl,
    link_type: LinkType,
}

impl SocialLink {
    pub const fn new(link: SocialUrl, link_type: LinkType) -> Self {
        Self { link, link_type }
    }

    /// Validate a raw url and link-type code in one step.
    pub fn parse(link: &str, code: &str) -> DomainResult<Self> {
        let link = SocialUrl::new(link)?;
        let link_type = LinkType::from_code(code)?;
        Ok(Self::new(link, link_type))
    }

    pub const fn link(&self) -> &SocialUrl {
        &self.link
    }

    pub const fn link_type(&self) -> LinkType {
        self.link_type
    }
}
