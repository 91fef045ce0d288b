use super::{Command, OperationKind, Screen, Session, Ticket};
use crate::core::error::{GatewayError, PlatformError, ValidationError};

const INGESTED_MESSAGE: &str = "Data ingested successfully!";
const PICK_FAILED_MESSAGE: &str = "Error selecting file";

impl Session {
    pub(super) fn pick_file(&mut self) -> Option<Command> {
        if self.file_dialog_open {
            return self.ignore(OperationKind::Ingest, "file dialog already open");
        }
        if self.is_busy(OperationKind::Ingest) {
            return self.ignore(OperationKind::Ingest, "ingestion in flight");
        }
        self.file_dialog_open = true;
        Some(Command::PickFile)
    }

    pub(super) fn file_picked(&mut self, result: Result<Option<String>, PlatformError>) {
        self.file_dialog_open = false;
        match result {
            Ok(Some(path)) => {
                tracing::info!(%path, "Data file selected");
                self.file_path = Some(path);
                self.operations
                    .get_mut(OperationKind::Ingest)
                    .clear_message();
            }
            Ok(None) => tracing::debug!("File selection cancelled"),
            Err(e) => {
                tracing::warn!(error = %e, "File dialog failed");
                self.operations
                    .get_mut(OperationKind::Ingest)
                    .report(e.into(), PICK_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub(super) fn ingest(&mut self) -> Option<Command> {
        const KIND: OperationKind = OperationKind::Ingest;
        if self.is_busy(KIND) {
            return self.ignore(KIND, "already ingesting");
        }
        let Some(file_path) = self.file_path.clone() else {
            let error = ValidationError::MissingFilePath;
            self.operations
                .get_mut(KIND)
                .report(error.clone().into(), error.to_string());
            return None;
        };

        let ticket = self.operations.start(KIND);
        tracing::info!(%file_path, "Ingesting data file");
        Some(Command::Ingest { ticket, file_path })
    }

    pub(super) fn ingested(
        &mut self,
        ticket: Ticket,
        result: Result<Option<String>, GatewayError>,
    ) -> Option<Command> {
        if !self.operations.is_current(ticket) {
            return None;
        }
        let status = self.operations.get_mut(OperationKind::Ingest);
        match result {
            Ok(message) => {
                let message = message
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| INGESTED_MESSAGE.to_string());
                tracing::info!(%message, "Data ingested");
                status.succeed(Some(message));
                self.file_path = None;

                // new tables belong on the open dashboard
                if self.screen == Screen::Dashboard {
                    self.reload_dashboard_after_load()
                } else {
                    None
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to ingest data");
                let message = e.user_message(OperationKind::Ingest.failure_message());
                status.fail(e.into(), message);
                None
            }
        }
    }
}
