// src/domain/slugged_name/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use percent_encoding::percent_decode_str;
use std::fmt;

/// Identifies the family of records a slug must be unique within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityKind(&'static str);

impl EntityKind {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A human readable name with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityName(String);

impl EntityName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if trimmed.len() == value.len() {
            Ok(Self(value))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EntityName> for String {
    fn from(value: EntityName) -> Self {
        value.0
    }
}

/// Number of earlier records that shared a name when this one was saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Degeneracy(u32);

impl Degeneracy {
    pub const ZERO: Self = Self(0);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// The degeneracy a new record receives given the highest one already
    /// stored for its name. `None` means no record has that name yet.
    pub fn following(max_prior: Option<Self>) -> DomainResult<Self> {
        match max_prior {
            None => Ok(Self::ZERO),
            Some(prior) => prior
                .0
                .checked_add(1)
                .map(Self)
                .ok_or_else(|| DomainError::Conflict("degeneracy counter exhausted".into())),
        }
    }
}

impl TryFrom<i64> for Degeneracy {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::validation(format!("degeneracy out of range: {value}")))
    }
}

impl From<Degeneracy> for i64 {
    fn from(value: Degeneracy) -> Self {
        Self::from(value.0)
    }
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Percent-encoded, whitespace free slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UriName(String);

impl UriName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::validation("uri name cannot be empty"));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(DomainError::validation("uri name cannot contain whitespace"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn decode(&self) -> DomainResult<String> {
        percent_decode_str(&self.0)
            .decode_utf8()
            .map(std::borrow::Cow::into_owned)
            .map_err(|err| DomainError::validation(format!("uri name is not valid utf-8: {err}")))
    }

    /// Decoded slug with the disambiguation suffix removed.
    pub fn base_name(&self, degeneracy: Degeneracy) -> DomainResult<String> {
        let decoded = self.decode()?;
        if degeneracy == Degeneracy::ZERO {
            return Ok(decoded);
        }

        let suffix = format!("-{degeneracy}");
        decoded
            .strip_suffix(&suffix)
            .map(str::to_string)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "uri name {:?} does not end with degeneracy suffix {suffix:?}",
                    self.0
                ))
            })
    }
}

impl fmt::Display for UriName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UriName> for String {
    fn from(value: UriName) -> Self {
        value.0
    }
}
