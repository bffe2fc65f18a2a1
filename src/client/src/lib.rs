//! A GraphQL client for the job board API.
//!
//! This crate is the data access layer between the job board UI and its
//! GraphQL server. It exposes four operations on [`JobBoard`]:
//!
//! * [`JobBoard::create_job`] – create a job, and seed the cache with the
//!   result, so loading the new job right after does not hit the network.
//! * [`JobBoard::load_company`] – a company, with the IDs and titles of its
//!   jobs.
//! * [`JobBoard::load_job`] – the details of a single job.
//! * [`JobBoard::load_jobs`] – the job listing, always fetched from the
//!   server.
//!
//! # Architecture
//!
//! A [`Client`] is explicitly constructed, and owns three things:
//!
//! * A chain of [`Link`]s, run for every outbound operation. The [`AuthLink`]
//!   adds an `authorization: Bearer <token>` header whenever the [`Session`]
//!   reports it is logged in.
//! * A [`Transport`] that delivers the operation. [`HttpTransport`] sends it
//!   as a JSON `POST` request to a single endpoint.
//! * A [`Cache`] of query results, consulted according to the
//!   [`FetchPolicy`] of each query.
//!
//! Documents are defined once in [`graphql`], and share the `JobDetail`
//! fragment where their responses must have the same shape.
//!
//! # Examples
//!
//! ```no_run
//! # async fn run() -> jobboard::Result<()> {
//! use jobboard::{Config, CreateJobInput, Id, JobBoard, MemorySession};
//! use std::sync::Arc;
//!
//! let session = Arc::new(MemorySession::new());
//! let board = JobBoard::from_config(&Config::from_environment()?, session.clone())?;
//!
//! session.login("secret-token");
//! let job = board
//!     .create_job(CreateJobInput {
//!         title: "Cook".to_owned(),
//!         company_id: Some(Id::new("c1")),
//!         description: None,
//!     })
//!     .await?;
//!
//! // Served from the cache.
//! let same = board.load_job(&job.id).await?;
//! assert_eq!(job, same);
//! # Ok(())
//! # }
//! ```
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    unsafe_code,
    unused_import_braces,
    unused_lifetimes
)]
#![warn(
    clippy::all,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_qualifications
)]
#![doc(html_root_url = "https://docs.rs/jobboard-client/0.1.0")]

mod auth;
mod board;
mod cache;
mod client;
mod config;
mod error;
pub mod graphql;
mod link;
mod models;
#[cfg(test)]
mod testing;
mod transport;

pub use auth::{MemorySession, Session};
pub use board::JobBoard;
pub use cache::{Cache, CacheKey};
pub use client::{Client, FetchPolicy};
pub use config::{Config, DEFAULT_ENDPOINT};
pub use error::{Error, Result};
pub use link::{AuthLink, Link, Next, Operation};
pub use models::{
    Company, CompanyData, CompanyJob, CompanyRef, CreateJobInput, CreateJobVariables, Id,
    IdVariables, Job, JobData, JobSummary, JobsData, NoVariables,
};
pub use transport::{HttpTransport, Transport};
