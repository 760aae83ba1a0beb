// src/domain/slugged_name/entity.rs
use crate::domain::slugged_name::value_objects::{Degeneracy, EntityKind, UriName};

/// Slug fields composed into a host record. Both stay empty until the
/// normalization pass runs on the save path; nothing else writes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SluggedName {
    uri_name: Option<UriName>,
    degeneracy: Option<Degeneracy>,
}

impl SluggedName {
    pub const fn uri_name(&self) -> Option<&UriName> {
        self.uri_name.as_ref()
    }

    pub const fn degeneracy(&self) -> Option<Degeneracy> {
        self.degeneracy
    }

    pub const fn is_assigned(&self) -> bool {
        self.uri_name.is_some() && self.degeneracy.is_some()
    }

    /// Both fields, or `None` if the record has not been normalized yet.
    pub fn assigned(&self) -> Option<(&UriName, Degeneracy)> {
        self.uri_name.as_ref().zip(self.degeneracy)
    }

    pub(crate) fn assign(&mut self, uri_name: UriName, degeneracy: Degeneracy) {
        self.uri_name = Some(uri_name);
        self.degeneracy = Some(degeneracy);
    }
}

/// A record with a human readable `name`.
pub trait HasName {
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);
}

/// A record that carries a [`SluggedName`] derived from its name.
pub trait HasSlug: HasName {
    const KIND: EntityKind;

    fn slugged_name(&self) -> &SluggedName;
    fn slugged_name_mut(&mut self) -> &mut SluggedName;
}
