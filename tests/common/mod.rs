#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from datanexus for tests
pub use datanexus::core::runtime::run_to_idle;
pub use datanexus::{
    Command, Event, FlowError, GatewayError, MessageKind, OperationKind, PlatformError, Project,
    Screen, Session, TableName, ValidationError,
};

/// A session that went through startup against `gateway`.
pub async fn started(gateway: &MockGateway) -> Session {
    let mut session = Session::new();
    run_to_idle(&mut session, Event::Startup, gateway, &StubPicker::default()).await;
    session
}

/// Replies for a startup fetch listing the given projects.
pub fn with_projects(gateway: &MockGateway, projects: &[(i64, &str)]) {
    gateway.reply_projects(Ok(Some(
        projects
            .iter()
            .map(|(id, name)| project_json(*id, name))
            .collect(),
    )));
}
