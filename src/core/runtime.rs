//! Runs the commands a [`Session`] emits and turns their results into events.

use crate::core::{
    gateway::Gateway,
    picker::FilePicker,
    session::{Command, Event, Session},
};

/// Executes one command. The returned event carries the command's ticket.
pub async fn execute<G: Gateway, P: FilePicker>(command: Command, gateway: G, picker: P) -> Event {
    match command {
        Command::FetchProjects(ticket) => {
            Event::ProjectsFetched(ticket, gateway.list_projects().await)
        }
        Command::CreateProject {
            ticket,
            project_name,
        } => Event::ProjectCreated(ticket, gateway.create_project(&project_name).await),
        Command::PickFile => Event::FilePicked(picker.pick_data_file().await),
        Command::Ingest { ticket, file_path } => {
            Event::Ingested(ticket, gateway.ingest(&file_path).await)
        }
        Command::SelectCurrentProject { ticket, project_id } => Event::CurrentProjectSelected(
            ticket,
            gateway.select_current_project(project_id).await,
        ),
        Command::FetchTables(ticket) => Event::TablesFetched(ticket, gateway.list_tables().await),
    }
}

/// Applies `event`, then runs every resulting command to completion in order,
/// feeding each result back into the session.
pub async fn run_to_idle<G: Gateway, P: FilePicker>(
    session: &mut Session,
    event: Event,
    gateway: &G,
    picker: &P,
) {
    let mut pending = session.update(event);
    while !pending.is_empty() {
        let command = pending.remove(0);
        let result = execute(command, gateway.clone(), picker.clone()).await;
        pending.extend(session.update(result));
    }
}
