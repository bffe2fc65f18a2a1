//! Links intercept outbound operations before they reach the transport.
//!
//! A link receives the [`Operation`] and a [`Next`] continuation. It may modify
//! the operation, and is expected to pass it on by calling [`Next::run`], which
//! runs the remaining links and eventually the [`Transport`].

use crate::auth::Session;
use crate::error::Result;
use crate::transport::Transport;
use async_trait::async_trait;
use futures::future::BoxFuture;
use graphql_client::{GraphQLQuery, QueryBody, Response};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;
use std::sync::Arc;

/// A single GraphQL request on its way to the server.
#[derive(Debug)]
pub struct Operation {
    /// The document, operation name and (serialized) variables.
    pub body: QueryBody<Value>,

    /// Extra HTTP headers to send along with the request.
    pub headers: HeaderMap,
}

impl Operation {
    /// Create an operation without any headers.
    pub fn new(body: QueryBody<Value>) -> Self {
        Self {
            body,
            headers: HeaderMap::new(),
        }
    }

    /// The name of the GraphQL operation.
    pub fn operation_name(&self) -> &'static str {
        self.body.operation_name
    }

    /// The variables of the operation.
    pub fn variables(&self) -> &Value {
        &self.body.variables
    }
}

/// Build the request body of a typed query, with its variables serialized.
pub(crate) fn query_body<Q: GraphQLQuery>(variables: Q::Variables) -> Result<QueryBody<Value>> {
    let body = Q::build_query(variables);

    Ok(QueryBody {
        variables: serde_json::to_value(&body.variables)?,
        query: body.query,
        operation_name: body.operation_name,
    })
}

/// A request interceptor.
#[async_trait]
pub trait Link: Send + Sync {
    /// Handle the operation, usually by forwarding it to `next`.
    async fn call(&self, operation: Operation, next: Next<'_>) -> Result<Response<Value>>;
}

/// The remainder of the link chain.
pub struct Next<'a> {
    links: &'a [Arc<dyn Link>],
    transport: &'a dyn Transport,
}

impl<'a> Next<'a> {
    pub(crate) fn new(links: &'a [Arc<dyn Link>], transport: &'a dyn Transport) -> Self {
        Self { links, transport }
    }

    /// Pass the operation to the next link, or to the transport once all links
    /// have run.
    pub fn run(self, operation: Operation) -> BoxFuture<'a, Result<Response<Value>>> {
        match self.links.split_first() {
            Some((link, links)) => link.call(
                operation,
                Next {
                    links,
                    transport: self.transport,
                },
            ),
            None => self.transport.execute(operation),
        }
    }
}

impl std::fmt::Debug for Next<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Next")
            .field("links", &self.links.len())
            .finish()
    }
}

/// Attaches the bearer token of a logged in session to each operation.
///
/// The session is consulted per operation, never cached.
pub struct AuthLink {
    session: Arc<dyn Session>,
}

impl AuthLink {
    /// Create a new auth link for the given session.
    pub fn new(session: Arc<dyn Session>) -> Self {
        Self { session }
    }
}

impl std::fmt::Debug for AuthLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthLink")
            .field("logged_in", &self.session.is_logged_in())
            .finish()
    }
}

#[async_trait]
impl Link for AuthLink {
    async fn call(&self, mut operation: Operation, next: Next<'_>) -> Result<Response<Value>> {
        if self.session.is_logged_in() {
            if let Some(token) = self.session.access_token() {
                let value = HeaderValue::from_str(&format!("Bearer {}", token))?;
                let _ = operation.headers.insert(AUTHORIZATION, value);
            }
        }

        next.run(operation).await
    }
}
