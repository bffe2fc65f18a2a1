//! The shapes exchanged with the job board API.
//!
//! These types only exist on the wire. Nothing in this crate creates, mutates
//! or persists them, they are serialized into requests and deserialized from
//! responses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The opaque identifier assigned by the server to jobs and companies.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    /// Create a new `Id`.
    pub fn new<T: Into<String>>(id: T) -> Self {
        Self(id.into())
    }

    /// The string representation of the ID.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Id {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The company a job belongs to, as embedded in job responses.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CompanyRef {
    /// The company ID.
    pub id: Id,
    /// The company name.
    pub name: String,
}

/// The full details of a single job.
///
/// This is the `JobDetail` fragment shape, shared by the job creation mutation
/// and the single job query.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Job {
    /// The job ID.
    pub id: Id,
    /// The job title.
    pub title: String,
    /// The company offering the job.
    pub company: CompanyRef,
    /// The job description.
    pub description: Option<String>,
}

/// A job as it appears in the job listing, without its description.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct JobSummary {
    /// The job ID.
    pub id: Id,
    /// The job title.
    pub title: String,
    /// The company offering the job.
    pub company: CompanyRef,
}

/// A job as listed on its company page.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CompanyJob {
    /// The job ID.
    pub id: Id,
    /// The job title.
    pub title: String,
}

/// A company, with the jobs it has posted.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Company {
    /// The company ID.
    pub id: Id,
    /// The company name.
    pub name: String,
    /// The company description.
    pub description: Option<String>,
    /// The jobs posted by the company.
    pub jobs: Vec<CompanyJob>,
}

/// The details of a job to create.
///
/// The server validates the input, no fields are checked on the client.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobInput {
    /// The title of the new job.
    pub title: String,

    /// The company to post the job for. Servers that derive the company from
    /// the authenticated user accept this being left out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<Id>,

    /// The description of the new job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Variables of operations that select a single entity by ID.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct IdVariables {
    /// The ID of the entity to fetch.
    pub id: Id,
}

/// Variables of the job creation mutation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CreateJobVariables {
    /// The job to create.
    pub input: CreateJobInput,
}

/// Variables of operations that take none.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct NoVariables {}

/// Response data carrying a single job.
///
/// Both the job creation mutation and the single job query respond with this
/// shape, which is what allows a created job to be stored as the result of a
/// job query.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct JobData {
    /// The job, or `None` if the server found no match.
    pub job: Option<Job>,
}

/// Response data of the job listing query.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct JobsData {
    /// All listed jobs.
    pub jobs: Vec<JobSummary>,
}

/// Response data of the company query.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CompanyData {
    /// The company, or `None` if the server found no match.
    pub company: Option<Company>,
}
