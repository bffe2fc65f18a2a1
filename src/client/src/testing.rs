//! Test doubles for the transport.

use crate::error::Result;
use crate::link::Operation;
use crate::transport::Transport;
use async_trait::async_trait;
use graphql_client::Response;
use reqwest::header::HeaderMap;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

type Responder = Box<dyn Fn(&Operation) -> Response<Value> + Send + Sync>;

/// A recorded operation.
#[derive(Debug)]
pub(crate) struct Recorded {
    pub(crate) operation_name: &'static str,
    pub(crate) variables: Value,
    pub(crate) headers: HeaderMap,
}

/// A transport that records every operation, and answers it using a closure.
pub(crate) struct MockTransport {
    responder: Responder,
    recorded: Mutex<Vec<Recorded>>,
}

impl MockTransport {
    pub(crate) fn responding<F>(responder: F) -> Self
    where
        F: Fn(&Operation) -> Response<Value> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            recorded: Mutex::default(),
        }
    }

    /// Answer every operation with the same data.
    pub(crate) fn replying(data: Value) -> Self {
        Self::responding(move |_| response(json!({ "data": data.clone() })))
    }

    /// The number of operations that reached the transport.
    pub(crate) fn calls(&self) -> usize {
        self.recorded.lock().unwrap().len()
    }

    /// The names of all operations, in the order they were received.
    pub(crate) fn operations(&self) -> Vec<&'static str> {
        self.recorded
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.operation_name)
            .collect()
    }

    /// The variables of the last operation.
    pub(crate) fn last_variables(&self) -> Option<Value> {
        self.recorded
            .lock()
            .unwrap()
            .last()
            .map(|r| r.variables.clone())
    }

    /// The value of a header on the last operation.
    pub(crate) fn last_header(&self, name: &str) -> Option<String> {
        self.recorded
            .lock()
            .unwrap()
            .last()
            .and_then(|r| r.headers.get(name))
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, operation: Operation) -> Result<Response<Value>> {
        let response = (self.responder)(&operation);

        self.recorded.lock().unwrap().push(Recorded {
            operation_name: operation.operation_name(),
            variables: operation.body.variables,
            headers: operation.headers,
        });

        Ok(response)
    }
}

pub(crate) fn response(body: Value) -> Response<Value> {
    serde_json::from_value(body).unwrap()
}

#[derive(Debug)]
struct FakeJob {
    id: String,
    title: String,
    company_id: String,
    description: Option<String>,
}

#[derive(Debug)]
struct FakeCompany {
    id: String,
    name: String,
    description: String,
}

#[derive(Debug)]
struct State {
    companies: Vec<FakeCompany>,
    jobs: Vec<FakeJob>,
}

impl State {
    fn company_ref(&self, id: &str) -> Value {
        self.companies
            .iter()
            .find(|c| c.id == id)
            .map(|c| json!({ "id": c.id, "name": c.name }))
            .unwrap_or(Value::Null)
    }

    fn job_detail(&self, job: &FakeJob) -> Value {
        json!({
            "id": job.id,
            "title": job.title,
            "company": self.company_ref(&job.company_id),
            "description": job.description,
        })
    }

    fn respond(&mut self, operation: &Operation) -> Value {
        let variables = operation.variables();

        match operation.operation_name() {
            "jobsQuery" => {
                let jobs = self
                    .jobs
                    .iter()
                    .map(|j| {
                        json!({
                            "id": j.id,
                            "title": j.title,
                            "company": self.company_ref(&j.company_id),
                        })
                    })
                    .collect::<Vec<_>>();

                json!({ "data": { "jobs": jobs } })
            }
            "JobQuery" => {
                let job = self
                    .jobs
                    .iter()
                    .find(|j| variables["id"] == j.id.as_str())
                    .map(|j| self.job_detail(j))
                    .unwrap_or(Value::Null);

                json!({ "data": { "job": job } })
            }
            "CompanyQuery" => {
                let company = self
                    .companies
                    .iter()
                    .find(|c| variables["id"] == c.id.as_str())
                    .map(|c| {
                        let jobs = self
                            .jobs
                            .iter()
                            .filter(|j| j.company_id == c.id)
                            .map(|j| json!({ "id": j.id, "title": j.title }))
                            .collect::<Vec<_>>();

                        json!({
                            "id": c.id,
                            "name": c.name,
                            "description": c.description,
                            "jobs": jobs,
                        })
                    })
                    .unwrap_or(Value::Null);

                json!({ "data": { "company": company } })
            }
            "CreateJob" => {
                let input = &variables["input"];
                let job = FakeJob {
                    id: format!("j{}", self.jobs.len() + 1),
                    title: input["title"].as_str().unwrap_or_default().to_owned(),
                    company_id: input["companyId"].as_str().unwrap_or("c1").to_owned(),
                    description: input["description"].as_str().map(str::to_owned),
                };

                let detail = self.job_detail(&job);
                self.jobs.push(job);

                json!({ "data": { "job": detail } })
            }
            other => json!({ "errors": [{ "message": format!("unknown operation {}", other) }] }),
        }
    }
}

/// An in-memory job board, served through a [`MockTransport`].
pub(crate) struct FakeBackend;

impl FakeBackend {
    /// A backend with one company, `c1` ("Acme"), and one job, `j1`
    /// ("Engineer").
    pub(crate) fn seeded() -> MockTransport {
        let state = Arc::new(Mutex::new(State {
            companies: vec![FakeCompany {
                id: "c1".to_owned(),
                name: "Acme".to_owned(),
                description: "Makes everything".to_owned(),
            }],
            jobs: vec![FakeJob {
                id: "j1".to_owned(),
                title: "Engineer".to_owned(),
                company_id: "c1".to_owned(),
                description: Some("Builds things".to_owned()),
            }],
        }));

        MockTransport::responding(move |operation| {
            response(state.lock().unwrap().respond(operation))
        })
    }
}
