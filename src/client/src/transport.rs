//! The transport delivers operations to the GraphQL server.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::link::Operation;
use async_trait::async_trait;
use graphql_client::Response;
use log::debug;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

/// The final step of every operation: send it, and return the raw response.
///
/// GraphQL errors in the response are not treated as failures at this level.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute the operation.
    async fn execute(&self, operation: Operation) -> Result<Response<Value>>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, operation: Operation) -> Result<Response<Value>> {
        (**self).execute(operation).await
    }
}

/// Sends operations as JSON `POST` requests to a single HTTP endpoint.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    inner: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    /// Create a new HTTP transport.
    ///
    /// Without a configured timeout, the defaults of the underlying HTTP client
    /// apply.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            inner: builder.build()?,
            endpoint: config.endpoint.clone(),
        })
    }

    /// The endpoint all operations are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, operation: Operation) -> Result<Response<Value>> {
        let Operation { body, headers } = operation;
        debug!("POST {} ({})", self.endpoint, body.operation_name);

        let response = self
            .inner
            .post(self.endpoint.clone())
            .headers(headers)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        // Servers may answer GraphQL errors with a non-success status, in which
        // case the GraphQL body takes precedence.
        match serde_json::from_slice::<Response<Value>>(&bytes) {
            Ok(body) if body.data.is_some() || body.errors.is_some() => Ok(body),
            _ if !status.is_success() => Err(Error::Status {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            }),
            Ok(body) => Ok(body),
            Err(err) => Err(err.into()),
        }
    }
}
