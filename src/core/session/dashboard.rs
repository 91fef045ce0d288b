use serde_json::Value;

use super::{Command, OperationKind, Screen, Session, Ticket};
use crate::core::{
    error::GatewayError,
    model::{Project, normalize_tables},
};

const KIND: OperationKind = OperationKind::LoadDashboard;

impl Session {
    /// Select `project` as current on the backend, then load its tables.
    pub(super) fn open_dashboard(&mut self, project: Project) -> Option<Command> {
        if self.is_busy(KIND) {
            return self.ignore(KIND, "dashboard load in flight");
        }
        self.operations.get_mut(KIND).clear_message();
        let ticket = self.operations.start(KIND);
        tracing::info!(project_id = project.id, name = %project.name, "Opening dashboard");
        let project_id = project.id;
        self.selected_project = Some(project);
        Some(Command::SelectCurrentProject { ticket, project_id })
    }

    pub(super) fn refresh_dashboard(&mut self) -> Option<Command> {
        match self.selected_project.clone() {
            Some(project) => self.open_dashboard(project),
            None => self.ignore(KIND, "no project selected"),
        }
    }

    pub(super) fn current_project_selected(
        &mut self,
        ticket: Ticket,
        result: Result<(), GatewayError>,
    ) -> Option<Command> {
        if !self.operations.is_current(ticket) {
            return None;
        }
        match result {
            Ok(()) => Some(Command::FetchTables(ticket)),
            Err(e) => {
                self.dashboard_failed(e);
                self.take_pending_reload()
            }
        }
    }

    pub(super) fn tables_fetched(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<Value>, GatewayError>,
    ) -> Option<Command> {
        if !self.operations.is_current(ticket) {
            return None;
        }
        match result {
            Ok(entries) => {
                self.tables = normalize_tables(&entries);
                tracing::info!(count = self.tables.len(), "Dashboard loaded");
                self.operations.get_mut(KIND).succeed(None);
                if self.selected_project.is_some() {
                    self.set_screen(Screen::Dashboard);
                }
            }
            Err(e) => self.dashboard_failed(e),
        }
        self.take_pending_reload()
    }

    /// Asks for a reload once the dashboard load in flight has settled.
    pub(super) fn reload_dashboard_after_load(&mut self) -> Option<Command> {
        if self.is_busy(KIND) {
            tracing::debug!("Dashboard load in flight, reloading once it settles");
            self.reload_pending = true;
            return None;
        }
        self.refresh_dashboard()
    }

    fn take_pending_reload(&mut self) -> Option<Command> {
        if !std::mem::take(&mut self.reload_pending) {
            return None;
        }
        self.refresh_dashboard()
    }

    fn dashboard_failed(&mut self, error: GatewayError) {
        tracing::warn!(
            project_id = ?self.selected_project.as_ref().map(|p| p.id),
            %error,
            "Failed to load dashboard"
        );
        let message = error.user_message(KIND.failure_message());
        self.operations.get_mut(KIND).fail(error.into(), message);
    }

    pub(super) fn back_to_projects(&mut self) {
        if self.screen != Screen::Dashboard {
            tracing::debug!(screen = ?self.screen, "Ignoring back outside the dashboard");
            return;
        }
        self.abandon_dashboard();
        self.set_screen(Screen::ProjectList);
    }

    fn abandon_dashboard(&mut self) {
        let status = self.operations.get_mut(KIND);
        status.abandon();
        status.clear_message();
        self.reload_pending = false;
    }

    pub(super) fn new_project(&mut self) {
        if self.screen != Screen::ProjectList {
            tracing::debug!(screen = ?self.screen, "Ignoring new project outside the project list");
            return;
        }
        for kind in OperationKind::ALL {
            let status = self.operations.get_mut(kind);
            status.abandon();
            status.clear_message();
        }
        self.enter_landing();
    }

    /// Switches to Landing with a fresh creation form and nothing selected.
    pub(super) fn enter_landing(&mut self) {
        self.abandon_dashboard();
        self.projects.clear();
        self.tables.clear();
        self.selected_project = None;
        self.file_path = None;
        self.project_created = false;
        self.created_project_name = None;
        self.set_screen(Screen::Landing);
    }
}
