// src/infrastructure/repositories/degeneracy.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slugged_name::{Degeneracy, DegeneracyLookup, EntityKind, EntityName};
use async_trait::async_trait;
use sqlx::SqlitePool;

/// Kinds map one to one onto table names, so they are restricted to plain
/// SQL identifiers before being spliced into a query.
fn table_for(kind: EntityKind) -> DomainResult<&'static str> {
    let table = kind.as_str();
    let valid = table
        .chars()
        .next()
        .is_some_and(|first| first.is_ascii_lowercase() || first == '_')
        && table
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_');
    if valid {
        Ok(table)
    } else {
        Err(DomainError::validation(format!("unsupported entity kind: {kind}")))
    }
}

pub(super) async fn max_degeneracy_in(
    pool: &SqlitePool,
    kind: EntityKind,
    name_key: &EntityName,
) -> DomainResult<Option<Degeneracy>> {
    let table = table_for(kind)?;
    let sql = format!("SELECT MAX(degeneracy) FROM {table} WHERE name_key = ?");

    let max = sqlx::query_scalar::<_, Option<i64>>(&sql)
        .bind(name_key.as_str())
        .fetch_one(pool)
        .await
        .map_err(map_sqlx)?;

    max.map(Degeneracy::try_from).transpose()
}

/// Degeneracy lookup over any table with `name_key` and `degeneracy` columns.
#[derive(Clone)]
pub struct SqliteDegeneracyLookup {
    pool: SqlitePool,
}

impl SqliteDegeneracyLookup {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DegeneracyLookup for SqliteDegeneracyLookup {
    async fn max_degeneracy(
        &self,
        kind: EntityKind,
        name_key: &EntityName,
    ) -> DomainResult<Option<Degeneracy>> {
        max_degeneracy_in(&self.pool, kind, name_key).await
    }
}
