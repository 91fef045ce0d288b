use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use datanexus::{FilePicker, Gateway, GatewayError, PlatformError, Project};
use serde_json::Value;

/// One call the client made to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListProjects,
    CreateProject(String),
    Ingest(String),
    SelectCurrentProject(i64),
    ListTables,
}

#[derive(Default)]
struct Script {
    calls: Vec<Call>,
    projects: VecDeque<Result<Option<Vec<String>>, GatewayError>>,
    creations: VecDeque<Result<Option<String>, GatewayError>>,
    ingestions: VecDeque<Result<Option<String>, GatewayError>>,
    selections: VecDeque<Result<(), GatewayError>>,
    tables: VecDeque<Result<Vec<Value>, GatewayError>>,
}

/// In-memory backend with scripted replies that records every call.
///
/// Replies are consumed in order. When a queue runs dry the last sensible
/// default is used: no projects, no message, success, no tables.
#[derive(Clone, Default)]
pub struct MockGateway {
    script: Arc<Mutex<Script>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.script.lock().unwrap().calls.clone()
    }

    pub fn reply_projects(&self, reply: Result<Option<Vec<String>>, GatewayError>) -> &Self {
        self.script.lock().unwrap().projects.push_back(reply);
        self
    }

    pub fn reply_create(&self, reply: Result<Option<String>, GatewayError>) -> &Self {
        self.script.lock().unwrap().creations.push_back(reply);
        self
    }

    pub fn reply_ingest(&self, reply: Result<Option<String>, GatewayError>) -> &Self {
        self.script.lock().unwrap().ingestions.push_back(reply);
        self
    }

    pub fn reply_select(&self, reply: Result<(), GatewayError>) -> &Self {
        self.script.lock().unwrap().selections.push_back(reply);
        self
    }

    pub fn reply_tables(&self, reply: Result<Vec<Value>, GatewayError>) -> &Self {
        self.script.lock().unwrap().tables.push_back(reply);
        self
    }

    fn record(&self, call: Call) -> std::sync::MutexGuard<'_, Script> {
        let mut script = self.script.lock().unwrap();
        script.calls.push(call);
        script
    }
}

impl Gateway for MockGateway {
    async fn list_projects(&self) -> Result<Option<Vec<String>>, GatewayError> {
        let reply = self.record(Call::ListProjects).projects.pop_front();
        reply.unwrap_or(Ok(None))
    }

    async fn create_project(&self, project_name: &str) -> Result<Option<String>, GatewayError> {
        let reply = self
            .record(Call::CreateProject(project_name.to_string()))
            .creations
            .pop_front();
        reply.unwrap_or(Ok(None))
    }

    async fn ingest(&self, file_path: &str) -> Result<Option<String>, GatewayError> {
        let reply = self
            .record(Call::Ingest(file_path.to_string()))
            .ingestions
            .pop_front();
        reply.unwrap_or(Ok(None))
    }

    async fn select_current_project(&self, project_id: i64) -> Result<(), GatewayError> {
        let reply = self
            .record(Call::SelectCurrentProject(project_id))
            .selections
            .pop_front();
        reply.unwrap_or(Ok(()))
    }

    async fn list_tables(&self) -> Result<Vec<Value>, GatewayError> {
        let reply = self.record(Call::ListTables).tables.pop_front();
        reply.unwrap_or(Ok(Vec::new()))
    }
}

/// File dialog returning scripted results; cancels once the script is empty.
#[derive(Clone, Default)]
pub struct StubPicker {
    results: Arc<Mutex<VecDeque<Result<Option<String>, PlatformError>>>>,
}

impl StubPicker {
    pub fn returning(result: Result<Option<String>, PlatformError>) -> Self {
        let picker = Self::default();
        picker.results.lock().unwrap().push_back(result);
        picker
    }
}

impl FilePicker for StubPicker {
    async fn pick_data_file(&self) -> Result<Option<String>, PlatformError> {
        let result = self.results.lock().unwrap().pop_front();
        result.unwrap_or(Ok(None))
    }
}

/// A project record the way `GET /` encodes it: a JSON string per project.
pub fn project_json(id: i64, name: &str) -> String {
    format!(r#"{{"id":{id},"name":"{name}","created_at":"2024-01-01T00:00:00Z"}}"#)
}

pub fn sample_project(id: i64, name: &str) -> Project {
    serde_json::from_str(&project_json(id, name)).expect("sample project decodes")
}

pub fn server_error(status: u16, error: &str) -> GatewayError {
    GatewayError::Status {
        status,
        error: Some(error.to_string()),
    }
}
