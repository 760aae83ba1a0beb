// src/domain/slugged_name/services.rs
use std::sync::Arc;

use crate::application::ports::util::SegmentEncoder;
use crate::domain::errors::DomainResult;
use crate::domain::slugged_name::entity::HasSlug;
use crate::domain::slugged_name::repository::DegeneracyLookup;
use crate::domain::slugged_name::value_objects::{Degeneracy, EntityKind, EntityName, UriName};

/// Replace every run of whitespace with a single hyphen.
pub fn collapse_whitespace(input: &str) -> String {
    let mut collapsed = String::with_capacity(input.len());
    let mut in_run = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !in_run {
                collapsed.push('-');
                in_run = true;
            }
        } else {
            collapsed.push(ch);
            in_run = false;
        }
    }
    collapsed
}

/// Lookup key for a trimmed name: the name with whitespace collapsed.
pub fn name_key(name: &EntityName) -> DomainResult<EntityName> {
    EntityName::new(collapse_whitespace(name.as_str()))
}

pub async fn max_degeneracy(
    lookup: &dyn DegeneracyLookup,
    kind: EntityKind,
    name_key: &EntityName,
) -> DomainResult<Option<Degeneracy>> {
    lookup.max_degeneracy(kind, name_key).await
}

/// Encode a collapsed name, appending `-{degeneracy}` first when the name
/// was already taken. The suffix is encoded together with the name.
pub fn render_uri_name(
    encoder: &dyn SegmentEncoder,
    collapsed: &str,
    degeneracy: Degeneracy,
) -> DomainResult<UriName> {
    let encoded = if degeneracy == Degeneracy::ZERO {
        encoder.encode_segment(collapsed)
    } else {
        encoder.encode_segment(&format!("{collapsed}-{degeneracy}"))
    };
    UriName::new(encoded)
}

/// Domain service that runs the pre-save normalization for slugged records.
pub struct UriNameService {
    lookup: Arc<dyn DegeneracyLookup>,
    encoder: Arc<dyn SegmentEncoder>,
}

impl UriNameService {
    pub fn new(lookup: Arc<dyn DegeneracyLookup>, encoder: Arc<dyn SegmentEncoder>) -> Self {
        Self { lookup, encoder }
    }

    /// Trim the entity's name and derive its `uri_name` and `degeneracy`.
    /// Names that collapse to the same key share one degeneracy sequence.
    ///
    /// Must be called once per save, right before the record is persisted.
    /// The lookup and the later insert are not atomic: two concurrent saves
    /// of the same name can end up with the same slug.
    pub async fn assign<E>(&self, entity: &mut E) -> DomainResult<()>
    where
        E: HasSlug + Send,
    {
        let name = EntityName::new(entity.name())?;
        entity.set_name(name.as_str().to_string());

        let key = name_key(&name)?;
        let max_prior = max_degeneracy(self.lookup.as_ref(), E::KIND, &key).await?;
        let degeneracy = Degeneracy::following(max_prior)?;
        let uri_name = render_uri_name(self.encoder.as_ref(), key.as_str(), degeneracy)?;

        if let Some(prior) = max_prior {
            tracing::debug!(kind = %E::KIND, name_key = %key, %prior, "name already taken");
        }
        tracing::debug!(kind = %E::KIND, %uri_name, %degeneracy, "assigned uri name");

        entity.slugged_name_mut().assign(uri_name, degeneracy);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use crate::domain::slugged_name::entity::{HasName, SluggedName};
    use crate::infrastructure::util::PercentSegmentEncoder;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubLookup {
        maxima: Mutex<HashMap<(&'static str, String), u32>>,
        queried: Mutex<Vec<String>>,
    }

    impl StubLookup {
        fn with(kind: EntityKind, name: &str, max: u32) -> Self {
            let lookup = Self::default();
            lookup
                .maxima
                .lock()
                .unwrap()
                .insert((kind.as_str(), name.to_string()), max);
            lookup
        }
    }

    #[async_trait]
    impl DegeneracyLookup for StubLookup {
        async fn max_degeneracy(
            &self,
            kind: EntityKind,
            name_key: &EntityName,
        ) -> DomainResult<Option<Degeneracy>> {
            self.queried.lock().unwrap().push(name_key.as_str().to_string());
            let maxima = self.maxima.lock().unwrap();
            Ok(maxima
                .get(&(kind.as_str(), name_key.as_str().to_string()))
                .copied()
                .map(Degeneracy::new))
        }
    }

    #[derive(Default)]
    struct Topic {
        name: String,
        slug: SluggedName,
    }

    impl HasName for Topic {
        fn name(&self) -> &str {
            &self.name
        }

        fn set_name(&mut self, name: String) {
            self.name = name;
        }
    }

    impl HasSlug for Topic {
        const KIND: EntityKind = EntityKind::new("topics");

        fn slugged_name(&self) -> &SluggedName {
            &self.slug
        }

        fn slugged_name_mut(&mut self) -> &mut SluggedName {
            &mut self.slug
        }
    }

    fn topic(name: &str) -> Topic {
        Topic {
            name: name.to_string(),
            ..Topic::default()
        }
    }

    fn service(lookup: Arc<StubLookup>) -> UriNameService {
        UriNameService::new(lookup, Arc::new(PercentSegmentEncoder))
    }

    #[test]
    fn collapse_replaces_runs_with_single_hyphen() {
        assert_eq!(collapse_whitespace("foo   bar"), "foo-bar");
        assert_eq!(collapse_whitespace("a \t\n b c"), "a-b-c");
        assert_eq!(collapse_whitespace("plain"), "plain");
        assert_eq!(collapse_whitespace(" edge "), "-edge-");
    }

    #[test]
    fn render_appends_suffix_before_encoding() {
        let encoder = PercentSegmentEncoder;
        let plain = render_uri_name(&encoder, "Issue-One", Degeneracy::ZERO).unwrap();
        assert_eq!(plain.as_str(), "Issue-One");

        let suffixed = render_uri_name(&encoder, "Café", Degeneracy::new(3)).unwrap();
        assert_eq!(suffixed.as_str(), "Caf%C3%A9-3");
    }

    #[tokio::test]
    async fn unique_name_gets_degeneracy_zero() {
        let lookup = Arc::new(StubLookup::default());
        let mut entity = topic("  foo   bar  ");

        service(Arc::clone(&lookup)).assign(&mut entity).await.unwrap();

        assert_eq!(entity.name, "foo   bar");
        let (uri_name, degeneracy) = entity.slugged_name().assigned().unwrap();
        assert_eq!(uri_name.as_str(), "foo-bar");
        assert_eq!(degeneracy, Degeneracy::ZERO);
    }

    #[tokio::test]
    async fn lookup_uses_collapsed_name() {
        let lookup = Arc::new(StubLookup::default());
        let mut entity = topic("\tfoo   bar\n");

        service(Arc::clone(&lookup)).assign(&mut entity).await.unwrap();

        assert_eq!(*lookup.queried.lock().unwrap(), vec!["foo-bar".to_string()]);
    }

    #[tokio::test]
    async fn spacing_variants_continue_the_same_sequence() {
        let lookup = Arc::new(StubLookup::with(Topic::KIND, "Issue-One", 0));
        let mut entity = topic("Issue   One");

        service(lookup).assign(&mut entity).await.unwrap();

        let (uri_name, degeneracy) = entity.slugged_name().assigned().unwrap();
        assert_eq!(uri_name.as_str(), "Issue-One-1");
        assert_eq!(degeneracy, Degeneracy::new(1));
    }

    #[tokio::test]
    async fn colliding_name_gets_next_degeneracy() {
        let lookup = Arc::new(StubLookup::with(Topic::KIND, "Issue-One", 4));
        let mut entity = topic("Issue One");

        service(lookup).assign(&mut entity).await.unwrap();

        let (uri_name, degeneracy) = entity.slugged_name().assigned().unwrap();
        assert_eq!(uri_name.as_str(), "Issue-One-5");
        assert_eq!(degeneracy, Degeneracy::new(5));
        assert_eq!(uri_name.base_name(degeneracy).unwrap(), "Issue-One");
    }

    #[tokio::test]
    async fn lookup_is_scoped_to_entity_kind() {
        let lookup = Arc::new(StubLookup::with(EntityKind::new("groups"), "Issue-One", 2));
        let mut entity = topic("Issue One");

        service(lookup).assign(&mut entity).await.unwrap();

        assert_eq!(entity.slugged_name().degeneracy(), Some(Degeneracy::ZERO));
    }

    #[tokio::test]
    async fn blank_name_is_rejected_without_assignment() {
        let lookup = Arc::new(StubLookup::default());
        let mut entity = topic("   ");

        let err = service(Arc::clone(&lookup)).assign(&mut entity).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(!entity.slugged_name().is_assigned());
        assert!(lookup.queried.lock().unwrap().is_empty());
    }
}
