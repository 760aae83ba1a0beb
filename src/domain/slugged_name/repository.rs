use crate::domain::errors::DomainResult;
use crate::domain::slugged_name::value_objects::{Degeneracy, EntityKind, EntityName};
use async_trait::async_trait;

#[async_trait]
pub trait DegeneracyLookup: Send + Sync {
    /// Highest degeneracy among persisted records of `kind` whose collapsed
    /// name equals `name_key`, or `None` when there are none.
    async fn max_degeneracy(
        &self,
        kind: EntityKind,
        name_key: &EntityName,
    ) -> DomainResult<Option<Degeneracy>>;
}
