//! The client's project/session state machine.
//!
//! [`Session::update`] applies one [`Event`] and returns the [`Command`]s
//! (backend or dialog calls) to run next. Running a command produces the event
//! that carries its result; see [`crate::core::runtime`].

mod creation;
mod dashboard;
mod directory;
mod ingestion;
mod status;

use serde_json::Value;

use crate::core::{
    error::{GatewayError, PlatformError},
    model::{Project, TableName},
};

pub use status::{MessageKind, OperationKind, OperationStatus, Ticket};
use status::Operations;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Landing,
    ProjectList,
    Dashboard,
}

/// User actions and command results.
#[derive(Debug, Clone)]
pub enum Event {
    /// Application start; fetches the project directory.
    Startup,
    RefreshProjects,
    ProjectsFetched(Ticket, Result<Option<Vec<String>>, GatewayError>),

    CreateProject(String),
    ProjectCreated(Ticket, Result<Option<String>, GatewayError>),

    PickFile,
    FilePicked(Result<Option<String>, PlatformError>),
    Ingest,
    Ingested(Ticket, Result<Option<String>, GatewayError>),

    OpenDashboard(Project),
    RefreshDashboard,
    CurrentProjectSelected(Ticket, Result<(), GatewayError>),
    TablesFetched(Ticket, Result<Vec<Value>, GatewayError>),

    /// Dashboard → ProjectList.
    BackToProjects,
    /// ProjectList → Landing.
    NewProject,
}

/// Side effects requested by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchProjects(Ticket),
    CreateProject { ticket: Ticket, project_name: String },
    PickFile,
    Ingest { ticket: Ticket, file_path: String },
    SelectCurrentProject { ticket: Ticket, project_id: i64 },
    FetchTables(Ticket),
}

impl Command {
    pub fn ticket(&self) -> Option<Ticket> {
        match self {
            Command::FetchProjects(ticket)
            | Command::CreateProject { ticket, .. }
            | Command::Ingest { ticket, .. }
            | Command::SelectCurrentProject { ticket, .. }
            | Command::FetchTables(ticket) => Some(*ticket),
            Command::PickFile => None,
        }
    }
}

/// Everything the UI shows, for the lifetime of one run.
#[derive(Debug, Clone, Default)]
pub struct Session {
    screen: Screen,
    projects: Vec<Project>,
    selected_project: Option<Project>,
    tables: Vec<TableName>,
    file_path: Option<String>,
    project_created: bool,
    created_project_name: Option<String>,
    startup_complete: bool,
    file_dialog_open: bool,
    reload_pending: bool,
    operations: Operations,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, event: Event) -> Vec<Command> {
        tracing::trace!(?event, screen = ?self.screen, "Session event");
        let command = match event {
            Event::Startup | Event::RefreshProjects => self.request_projects(),
            Event::ProjectsFetched(ticket, result) => {
                self.projects_fetched(ticket, result);
                None
            }

            Event::CreateProject(name) => self.create_project(&name),
            Event::ProjectCreated(ticket, result) => self.creation_finished(ticket, result),

            Event::PickFile => self.pick_file(),
            Event::FilePicked(result) => {
                self.file_picked(result);
                None
            }
            Event::Ingest => self.ingest(),
            Event::Ingested(ticket, result) => self.ingested(ticket, result),

            Event::OpenDashboard(project) => self.open_dashboard(project),
            Event::RefreshDashboard => self.refresh_dashboard(),
            Event::CurrentProjectSelected(ticket, result) => {
                self.current_project_selected(ticket, result)
            }
            Event::TablesFetched(ticket, result) => self.tables_fetched(ticket, result),

            Event::BackToProjects => {
                self.back_to_projects();
                None
            }
            Event::NewProject => {
                self.new_project();
                None
            }
        };
        command.into_iter().collect()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.selected_project.as_ref()
    }

    pub fn tables(&self) -> &[TableName] {
        &self.tables
    }

    pub fn file_path(&self) -> Option<&str> {
        self.file_path.as_deref()
    }

    pub fn project_created(&self) -> bool {
        self.project_created
    }

    pub fn created_project_name(&self) -> Option<&str> {
        self.created_project_name.as_deref()
    }

    /// False until the first directory fetch has resolved.
    pub fn startup_complete(&self) -> bool {
        self.startup_complete
    }

    pub fn file_dialog_open(&self) -> bool {
        self.file_dialog_open
    }

    pub fn status(&self, kind: OperationKind) -> &OperationStatus {
        self.operations.get(kind)
    }

    pub fn is_busy(&self, kind: OperationKind) -> bool {
        self.status(kind).in_flight()
    }

    /// The project whose dashboard is being opened right now, if any.
    pub fn opening_project(&self) -> Option<&Project> {
        self.selected_project
            .as_ref()
            .filter(|_| self.is_busy(OperationKind::LoadDashboard))
    }

    fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            tracing::info!(from = ?self.screen, to = ?screen, "Switching screen");
            self.screen = screen;
        }
    }

    fn ignore(&self, kind: OperationKind, reason: &str) -> Option<Command> {
        tracing::debug!(operation = ?kind, reason, "Ignoring trigger");
        None
    }
}
