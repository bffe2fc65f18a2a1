//! An in-memory cache of query results.
//!
//! Results are stored under the operation name combined with the operation
//! variables. Two operations with the same name, and the same variables, share
//! a cache entry, regardless of how the variables were ordered.

use crate::error::Result;
use crate::link::query_body;
use graphql_client::GraphQLQuery;
use log::trace;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};

/// The key under which a query result is cached.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CacheKey {
    operation_name: String,
    variables: String,
}

impl CacheKey {
    /// Create the key for an operation and its variables.
    pub fn new(operation_name: &str, variables: &Value) -> Self {
        Self {
            operation_name: operation_name.to_owned(),
            variables: canonical(variables).to_string(),
        }
    }

    /// Create the key of a typed query.
    pub fn for_query<Q: GraphQLQuery>(variables: Q::Variables) -> Result<Self> {
        let body = query_body::<Q>(variables)?;

        Ok(Self::new(body.operation_name, &body.variables))
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.operation_name, self.variables)
    }
}

/// Rebuild a value with all object keys sorted.
fn canonical(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries = map.iter().collect::<Vec<_>>();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));

            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.clone(), canonical(v)))
                    .collect(),
            )
        }
        Value::Array(values) => Value::Array(values.iter().map(canonical).collect()),
        value => value.clone(),
    }
}

/// The query result cache.
///
/// The cache is shared by all clones of a [`Client`](crate::Client), and is
/// safe to use from concurrent operations.
#[derive(Debug, Default)]
pub struct Cache {
    entries: RwLock<HashMap<CacheKey, Value>>,
}

impl Cache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(&self, key: &CacheKey) -> Option<Value> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub(crate) fn write(&self, key: CacheKey, data: Value) {
        trace!("caching {}", key);

        let _ = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, data);
    }

    /// Read the cached result of a query, if any.
    pub fn read_query<Q: GraphQLQuery>(&self, variables: Q::Variables) -> Result<Option<Q::ResponseData>> {
        let key = CacheKey::for_query::<Q>(variables)?;

        match self.read(&key) {
            Some(data) => Ok(Some(serde_json::from_value(data)?)),
            None => Ok(None),
        }
    }

    /// Store `data` as the result of a query, as if the server had returned it.
    ///
    /// Any operation with a response of the same type can be stored this way,
    /// for example the result of a mutation that returns what a later query
    /// would fetch.
    pub fn write_query<Q>(&self, variables: Q::Variables, data: &Q::ResponseData) -> Result<()>
    where
        Q: GraphQLQuery,
        Q::ResponseData: Serialize,
    {
        let key = CacheKey::for_query::<Q>(variables)?;
        self.write(key, serde_json::to_value(data)?);

        Ok(())
    }

    /// Remove the cached result of a query. Returns `true` if there was one.
    pub fn evict<Q: GraphQLQuery>(&self, variables: Q::Variables) -> Result<bool> {
        let key = CacheKey::for_query::<Q>(variables)?;

        Ok(self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&key)
            .is_some())
    }

    /// Remove all cached results, for example after the session logged out.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// The number of cached results.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
