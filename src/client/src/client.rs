//! The GraphQL client: a chain of links, a transport, and a result cache.

use crate::cache::{Cache, CacheKey};
use crate::error::{Error, Result};
use crate::link::{query_body, Link, Next, Operation};
use crate::transport::Transport;
use graphql_client::{GraphQLQuery, QueryBody};
use log::{debug, warn};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Decides whether a query is answered from the cache or the network.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum FetchPolicy {
    /// Return the cached result if there is one, otherwise fetch and cache it.
    #[default]
    CacheFirst,

    /// Always fetch, and cache the result.
    NetworkOnly,

    /// Always fetch, and leave the cache untouched.
    NoCache,

    /// Only return a cached result, never fetch.
    CacheOnly,
}

impl FetchPolicy {
    const fn reads_cache(self) -> bool {
        matches!(self, FetchPolicy::CacheFirst | FetchPolicy::CacheOnly)
    }

    const fn writes_cache(self) -> bool {
        matches!(self, FetchPolicy::CacheFirst | FetchPolicy::NetworkOnly)
    }
}

/// A GraphQL client.
///
/// The client is cheap to clone, all clones share the same links, transport
/// and cache.
#[derive(Clone)]
pub struct Client {
    links: Arc<[Arc<dyn Link>]>,
    transport: Arc<dyn Transport>,
    cache: Arc<Cache>,
}

impl Client {
    /// Create a client without links, and with an empty cache.
    pub fn new<T: Transport + 'static>(transport: T) -> Self {
        Self {
            links: Vec::new().into(),
            transport: Arc::new(transport),
            cache: Arc::default(),
        }
    }

    /// Append a link to the chain. Links run in the order they are added.
    pub fn with_link<L: Link + 'static>(self, link: L) -> Self {
        let mut links = self.links.to_vec();
        links.push(Arc::new(link));

        Self {
            links: links.into(),
            ..self
        }
    }

    /// The result cache.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Run a query, following the given fetch policy.
    ///
    /// # Errors
    ///
    /// Besides transport failures, any GraphQL error returned by the server
    /// fails the query, and nothing is cached.
    ///
    /// With [`FetchPolicy::CacheOnly`], a missing cache entry results in an
    /// [`Error::CacheMiss`].
    pub async fn query<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
        policy: FetchPolicy,
    ) -> Result<Q::ResponseData> {
        let body = query_body::<Q>(variables)?;
        let key = CacheKey::new(body.operation_name, &body.variables);

        if policy.reads_cache() {
            if let Some(data) = self.cache.read(&key) {
                debug!("cache hit for {}", key);
                return serde_json::from_value(data).map_err(Into::into);
            }

            if policy == FetchPolicy::CacheOnly {
                return Err(Error::CacheMiss(key.to_string()));
            }

            debug!("cache miss for {}", key);
        }

        // Only results that decode are cached, a malformed response must not
        // shadow later fetches.
        let data = self.execute(body).await?;
        let decoded: Q::ResponseData = serde_json::from_value(data.clone())?;
        if policy.writes_cache() {
            self.cache.write(key, data);
        }

        Ok(decoded)
    }

    /// Run a mutation.
    ///
    /// Mutation results are never read from the cache. Once the server
    /// responds, `update` is called with the cache and the response data,
    /// before the data is returned.
    pub async fn mutate<Q, F>(&self, variables: Q::Variables, update: F) -> Result<Q::ResponseData>
    where
        Q: GraphQLQuery,
        F: FnOnce(&Cache, &Q::ResponseData) -> Result<()>,
    {
        let body = query_body::<Q>(variables)?;
        let data: Q::ResponseData = serde_json::from_value(self.execute(body).await?)?;

        update(&self.cache, &data)?;
        Ok(data)
    }

    /// Send an operation through the link chain, and unwrap its data.
    async fn execute(&self, body: QueryBody<Value>) -> Result<Value> {
        let operation_name = body.operation_name;
        debug!("sending {} operation", operation_name);

        let next = Next::new(&self.links, self.transport.as_ref());
        let response = next.run(Operation::new(body)).await?;

        if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
            warn!("{} returned {} error(s)", operation_name, errors.len());
            return Err(Error::GraphQL(errors));
        }

        response.data.ok_or(Error::MissingData("data"))
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("links", &self.links.len())
            .field("cache", &self.cache.len())
            .finish()
    }
}
