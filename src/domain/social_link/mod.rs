pub mod entity;
pub mod value_objects;

pub use entity::SocialLink;
pub use value_objects::{LinkType, MAX_LINK_LENGTH, SocialUrl};
