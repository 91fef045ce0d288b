use super::{Command, OperationKind, Screen, Session, Ticket};
use crate::core::error::{GatewayError, ValidationError};

const CREATED_MESSAGE: &str = "Project created successfully!";

impl Session {
    pub(super) fn create_project(&mut self, name: &str) -> Option<Command> {
        const KIND: OperationKind = OperationKind::CreateProject;
        if self.is_busy(KIND) {
            return self.ignore(KIND, "already creating a project");
        }
        if self.screen != Screen::Landing || self.project_created {
            return self.ignore(KIND, "creation form is not shown");
        }

        let name = name.trim();
        if name.is_empty() {
            let error = ValidationError::MissingProjectName;
            self.operations
                .get_mut(KIND)
                .report(error.clone().into(), error.to_string());
            return None;
        }

        let ticket = self.operations.start(KIND);
        self.created_project_name = Some(name.to_string());
        tracing::info!(name, "Creating project");
        Some(Command::CreateProject {
            ticket,
            project_name: name.to_string(),
        })
    }

    pub(super) fn creation_finished(
        &mut self,
        ticket: Ticket,
        result: Result<Option<String>, GatewayError>,
    ) -> Option<Command> {
        if !self.operations.is_current(ticket) {
            return None;
        }
        let status = self.operations.get_mut(OperationKind::CreateProject);
        match result {
            Ok(message) => {
                let message = message
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| CREATED_MESSAGE.to_string());
                status.succeed(Some(message));
                self.project_created = true;
                tracing::info!(name = ?self.created_project_name, "Project created");
                // the new project must show up even if an older fetch is still out
                Some(self.start_projects_fetch())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to create project");
                let message = e.user_message(OperationKind::CreateProject.failure_message());
                status.fail(e.into(), message);
                self.created_project_name = None;
                None
            }
        }
    }
}
