pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{HasName, HasSlug, SluggedName};
pub use repository::DegeneracyLookup;
pub use services::{UriNameService, collapse_whitespace, max_degeneracy, name_key, render_uri_name};
pub use value_objects::{Degeneracy, EntityKind, EntityName, UriName};
