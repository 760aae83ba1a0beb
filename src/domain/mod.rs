pub mod errors;
pub mod issue;
pub mod slugged_name;
pub mod social_link;
