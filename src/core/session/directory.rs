use super::{Command, OperationKind, Screen, Session, Ticket};
use crate::core::{
    error::{FlowError, GatewayError},
    model::decode_projects,
};

impl Session {
    pub(super) fn request_projects(&mut self) -> Option<Command> {
        if self.is_busy(OperationKind::FetchProjects) {
            return self.ignore(OperationKind::FetchProjects, "already fetching projects");
        }
        Some(self.start_projects_fetch())
    }

    /// Starts a fetch even if one is in flight; the older result becomes stale.
    pub(super) fn start_projects_fetch(&mut self) -> Command {
        let ticket = self.operations.start(OperationKind::FetchProjects);
        tracing::info!(epoch = ticket.epoch(), "Fetching project directory");
        Command::FetchProjects(ticket)
    }

    pub(super) fn projects_fetched(
        &mut self,
        ticket: Ticket,
        result: Result<Option<Vec<String>>, GatewayError>,
    ) {
        if !self.operations.is_current(ticket) {
            return;
        }
        self.startup_complete = true;
        let status = self.operations.get_mut(OperationKind::FetchProjects);

        let raw = match result {
            Ok(raw) => raw.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch projects");
                let message = e.user_message(OperationKind::FetchProjects.failure_message());
                status.fail(e.into(), message);
                return;
            }
        };

        let (projects, errors) = decode_projects(&raw);
        if errors.is_empty() {
            status.succeed(None);
        } else {
            for error in &errors {
                tracing::warn!(%error, "Skipping project record");
            }
            let message = format!("Skipped {} malformed project record(s)", errors.len());
            status.fail(FlowError::Decode(errors), message);
        }

        tracing::info!(count = projects.len(), "Project directory loaded");
        self.projects = projects;
        // An open dashboard stays open; the list is kept for "back".
        match (self.screen, self.projects.is_empty()) {
            (Screen::Dashboard, _) => {}
            (Screen::Landing, true) => {}
            (_, true) => self.enter_landing(),
            (_, false) => self.set_screen(Screen::ProjectList),
        }
    }
}
