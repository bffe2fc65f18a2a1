//! The job board operations used by the UI.

use crate::auth::Session;
use crate::client::{Client, FetchPolicy};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::graphql::{CompanyQuery, CreateJob, JobQuery, JobsQuery};
use crate::link::AuthLink;
use crate::models::{
    Company, CreateJobInput, CreateJobVariables, Id, IdVariables, Job, JobSummary, NoVariables,
};
use crate::transport::HttpTransport;
use std::sync::Arc;

/// The job board service.
///
/// Each operation is a single request/response round trip. Failures are
/// returned as-is, nothing is retried.
#[derive(Clone, Debug)]
pub struct JobBoard {
    client: Client,
}

impl JobBoard {
    /// Create the service on top of an existing client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create the service talking to the configured endpoint over HTTP,
    /// authenticating requests with the given session.
    pub fn from_config(config: &Config, session: Arc<dyn Session>) -> Result<Self> {
        let client = Client::new(HttpTransport::new(config)?).with_link(AuthLink::new(session));

        Ok(Self::new(client))
    }

    /// The underlying client, for example to clear its cache.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Create a new job.
    ///
    /// The created job is cached as the result of [`JobBoard::load_job`] for
    /// its ID, so loading it right after creation does not hit the network.
    pub async fn create_job(&self, input: CreateJobInput) -> Result<Job> {
        let data = self
            .client
            .mutate::<CreateJob, _>(CreateJobVariables { input }, |cache, data| {
                match &data.job {
                    Some(job) => cache.write_query::<JobQuery>(
                        IdVariables {
                            id: job.id.clone(),
                        },
                        data,
                    ),
                    None => Ok(()),
                }
            })
            .await?;

        data.job.ok_or(Error::MissingData("job"))
    }

    /// Load a company, and the IDs and titles of its jobs.
    pub async fn load_company(&self, id: &Id) -> Result<Company> {
        let variables = IdVariables { id: id.clone() };
        let data = self
            .client
            .query::<CompanyQuery>(variables, FetchPolicy::CacheFirst)
            .await?;

        data.company.ok_or(Error::MissingData("company"))
    }

    /// Load the details of a single job.
    pub async fn load_job(&self, id: &Id) -> Result<Job> {
        let variables = IdVariables { id: id.clone() };
        let data = self
            .client
            .query::<JobQuery>(variables, FetchPolicy::CacheFirst)
            .await?;

        data.job.ok_or(Error::MissingData("job"))
    }

    /// Load all jobs.
    ///
    /// The listing must reflect created and removed jobs right away, so it is
    /// always fetched from the server, and never cached.
    pub async fn load_jobs(&self) -> Result<Vec<JobSummary>> {
        let data = self
            .client
            .query::<JobsQuery>(NoVariables {}, FetchPolicy::NoCache)
            .await?;

        Ok(data.jobs)
    }
}
