//! The GraphQL query and mutation documents.
//!
//! Each document is a unit struct implementing [`GraphQLQuery`], laid out the
//! way `graphql_client` derives them: a module per operation holding its
//! `OPERATION_NAME` and `QUERY` constants.

use crate::models::{
    CompanyData, CreateJobVariables, IdVariables, JobData, JobsData, NoVariables,
};
use graphql_client::{GraphQLQuery, QueryBody};

/// Appends the `JobDetail` fragment to a document.
///
/// The fragment must match the `Job` type on the server. Every document using
/// it responds with [`JobData`].
macro_rules! with_job_detail {
    ($document:literal) => {
        concat!(
            $document,
            r#"
fragment JobDetail on Job {
  id
  title
  company {
    id
    name
  }
  description
}
"#
        )
    };
}

macro_rules! documents {
    ($(
        $(#[$meta:meta])*
        ($name:ident, $operation:literal, $module:ident, $variables:ty, $data:ty, $query:expr);
    )+) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
            pub struct $name;

            #[allow(missing_docs)]
            pub mod $module {
                pub const OPERATION_NAME: &str = $operation;
                pub const QUERY: &str = $query;
            }

            impl GraphQLQuery for $name {
                type Variables = $variables;
                type ResponseData = $data;

                fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
                    QueryBody {
                        variables,
                        query: $module::QUERY,
                        operation_name: $module::OPERATION_NAME,
                    }
                }
            }
        )+
    };
}

documents! {
    /// Create a new job.
    ///
    /// The result is aliased to `job`, so the response has the exact shape of a
    /// [`JobQuery`] response.
    (CreateJob, "CreateJob", create_job, CreateJobVariables, JobData, with_job_detail!(r#"
mutation CreateJob($input: CreateJobInput) {
  job: createJob(input: $input) {
    ...JobDetail
  }
}
"#));

    /// Fetch a company, and the IDs and titles of its jobs.
    (CompanyQuery, "CompanyQuery", company_query, IdVariables, CompanyData, r#"
query CompanyQuery($id: ID!) {
  company(id: $id) {
    id
    name
    description
    jobs {
      id
      title
    }
  }
}
"#);

    /// Fetch the details of a single job.
    (JobQuery, "JobQuery", job_query, IdVariables, JobData, with_job_detail!(r#"
query JobQuery($id: ID!) {
  job(id: $id) {
    ...JobDetail
  }
}
"#));

    /// Fetch all jobs, without their descriptions.
    (JobsQuery, "jobsQuery", jobs_query, NoVariables, JobsData, r#"
query jobsQuery {
  jobs {
    id
    title
    company {
      id
      name
    }
  }
}
"#);
}
