//! File selection and ingestion into the backend's current project.

mod common;
use common::*;

async fn created_project(gateway: &MockGateway) -> Session {
    let mut session = started(gateway).await;
    run_to_idle(
        &mut session,
        Event::CreateProject("Retail".to_string()),
        gateway,
        &StubPicker::default(),
    )
    .await;
    assert!(session.project_created());
    session
}

#[tokio::test]
async fn test_ingest_without_file_is_rejected_locally() -> anyhow::Result<()> {
    let gateway = MockGateway::new();
    let mut session = created_project(&gateway).await;
    let calls_before = gateway.calls().len();

    run_to_idle(&mut session, Event::Ingest, &gateway, &StubPicker::default()).await;

    let status = session.status(OperationKind::Ingest);
    assert_eq!(status.message(), "Please select a file");
    assert_eq!(status.message_kind(), MessageKind::Error);
    assert_eq!(
        status.error(),
        Some(&FlowError::Validation(ValidationError::MissingFilePath))
    );
    assert_eq!(gateway.calls().len(), calls_before);
    Ok(())
}

#[tokio::test]
async fn test_pick_then_ingest() -> anyhow::Result<()> {
    let gateway = MockGateway::new();
    let mut session = created_project(&gateway).await;
    let picker = StubPicker::returning(Ok(Some("/data/orders.csv".to_string())));

    run_to_idle(&mut session, Event::PickFile, &gateway, &picker).await;
    assert_eq!(session.file_path(), Some("/data/orders.csv"));
    assert!(!session.file_dialog_open());

    run_to_idle(&mut session, Event::Ingest, &gateway, &picker).await;

    let status = session.status(OperationKind::Ingest);
    assert_eq!(status.message(), "Data ingested successfully!");
    assert_eq!(status.message_kind(), MessageKind::Success);
    assert_eq!(session.file_path(), None);
    assert_eq!(
        gateway.calls().last(),
        Some(&Call::Ingest("/data/orders.csv".to_string()))
    );
    Ok(())
}

#[tokio::test]
async fn test_ingest_server_message_is_shown() -> anyhow::Result<()> {
    let gateway = MockGateway::new();
    gateway.reply_ingest(Ok(Some("Ingested 120 rows into orders".to_string())));
    let mut session = created_project(&gateway).await;

    session.update(Event::FilePicked(Ok(Some("/data/orders.csv".to_string()))));
    run_to_idle(&mut session, Event::Ingest, &gateway, &StubPicker::default()).await;

    assert_eq!(
        session.status(OperationKind::Ingest).message(),
        "Ingested 120 rows into orders"
    );
    Ok(())
}

#[tokio::test]
async fn test_ingest_failure_keeps_file() -> anyhow::Result<()> {
    let gateway = MockGateway::new();
    gateway.reply_ingest(Err(GatewayError::Status {
        status: 500,
        error: None,
    }));
    let mut session = created_project(&gateway).await;

    session.update(Event::FilePicked(Ok(Some("/data/orders.csv".to_string()))));
    run_to_idle(&mut session, Event::Ingest, &gateway, &StubPicker::default()).await;

    let status = session.status(OperationKind::Ingest);
    assert_eq!(status.message(), "Failed to ingest data");
    assert_eq!(status.message_kind(), MessageKind::Error);
    assert!(!status.in_flight());
    assert_eq!(session.file_path(), Some("/data/orders.csv"));
    Ok(())
}

#[tokio::test]
async fn test_cancelled_dialog_changes_nothing() -> anyhow::Result<()> {
    let gateway = MockGateway::new();
    let mut session = created_project(&gateway).await;
    session.update(Event::FilePicked(Ok(Some("/data/orders.csv".to_string()))));

    run_to_idle(
        &mut session,
        Event::PickFile,
        &gateway,
        &StubPicker::returning(Ok(None)),
    )
    .await;

    assert_eq!(session.file_path(), Some("/data/orders.csv"));
    assert_eq!(
        session.status(OperationKind::Ingest).message_kind(),
        MessageKind::None
    );
    assert!(!session.file_dialog_open());
    Ok(())
}

#[tokio::test]
async fn test_dialog_failure_reports_error() -> anyhow::Result<()> {
    let gateway = MockGateway::new();
    let mut session = created_project(&gateway).await;

    run_to_idle(
        &mut session,
        Event::PickFile,
        &gateway,
        &StubPicker::returning(Err(PlatformError::Dialog("portal missing".into()))),
    )
    .await;

    let status = session.status(OperationKind::Ingest);
    assert_eq!(status.message(), "Error selecting file");
    assert!(matches!(status.error(), Some(FlowError::Platform(_))));
    assert_eq!(session.file_path(), None);
    Ok(())
}

#[tokio::test]
async fn test_only_one_dialog_at_a_time() -> anyhow::Result<()> {
    let mut session = Session::new();

    assert_eq!(session.update(Event::PickFile), vec![Command::PickFile]);
    assert!(session.file_dialog_open());
    assert!(session.update(Event::PickFile).is_empty());

    session.update(Event::FilePicked(Ok(None)));
    assert_eq!(session.update(Event::PickFile), vec![Command::PickFile]);
    Ok(())
}

#[tokio::test]
async fn test_picking_clears_previous_ingest_message() -> anyhow::Result<()> {
    let gateway = MockGateway::new();
    let mut session = created_project(&gateway).await;

    run_to_idle(&mut session, Event::Ingest, &gateway, &StubPicker::default()).await;
    assert_eq!(
        session.status(OperationKind::Ingest).message_kind(),
        MessageKind::Error
    );

    session.update(Event::FilePicked(Ok(Some("/data/orders.csv".to_string()))));
    assert_eq!(session.status(OperationKind::Ingest).message(), "");
    Ok(())
}

#[tokio::test]
async fn test_ingest_on_dashboard_reloads_tables() -> anyhow::Result<()> {
    let gateway = MockGateway::new();
    with_projects(&gateway, &[(1, "Sales")]);
    gateway.reply_tables(Ok(vec![]));
    gateway.reply_tables(Ok(vec![serde_json::json!("orders")]));

    let mut session = started(&gateway).await;
    let project = session.projects()[0].clone();
    run_to_idle(
        &mut session,
        Event::OpenDashboard(project),
        &gateway,
        &StubPicker::default(),
    )
    .await;
    assert_eq!(session.screen(), Screen::Dashboard);
    assert!(session.tables().is_empty());

    session.update(Event::FilePicked(Ok(Some("/data/orders.csv".to_string()))));
    run_to_idle(&mut session, Event::Ingest, &gateway, &StubPicker::default()).await;

    assert_eq!(session.tables(), &[TableName::from("orders")]);
    assert_eq!(
        &gateway.calls()[3..],
        &[
            Call::Ingest("/data/orders.csv".to_string()),
            Call::SelectCurrentProject(1),
            Call::ListTables,
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_ingest_during_dashboard_load_reloads_afterwards() -> anyhow::Result<()> {
    let gateway = MockGateway::new();
    with_projects(&gateway, &[(1, "Sales")]);
    gateway.reply_tables(Ok(vec![]));
    let mut session = started(&gateway).await;
    let project = session.projects()[0].clone();
    run_to_idle(
        &mut session,
        Event::OpenDashboard(project),
        &gateway,
        &StubPicker::default(),
    )
    .await;
    assert_eq!(session.screen(), Screen::Dashboard);

    let refresh = session.update(Event::RefreshDashboard);
    let [Command::SelectCurrentProject { ticket, .. }] = refresh.as_slice() else {
        panic!("expected a selection, got {refresh:?}");
    };
    let load = *ticket;

    session.update(Event::FilePicked(Ok(Some("/data/orders.csv".to_string()))));
    let ingest = session.update(Event::Ingest);
    let ingest_ticket = ingest[0].ticket().expect("ingest carries a ticket");

    // ingestion finishes while the refresh is still out
    let after_ingest = session.update(Event::Ingested(ingest_ticket, Ok(None)));
    assert!(after_ingest.is_empty());

    let fetch = session.update(Event::CurrentProjectSelected(load, Ok(())));
    assert_eq!(fetch, vec![Command::FetchTables(load)]);
    let reload = session.update(Event::TablesFetched(load, Ok(vec![])));
    assert!(matches!(
        reload.as_slice(),
        [Command::SelectCurrentProject { project_id: 1, .. }]
    ));

    // only one extra reload
    let Command::SelectCurrentProject { ticket, .. } = &reload[0] else {
        unreachable!();
    };
    let ticket = *ticket;
    session.update(Event::CurrentProjectSelected(ticket, Ok(())));
    let settled = session.update(Event::TablesFetched(
        ticket,
        Ok(vec![serde_json::json!("orders")]),
    ));
    assert!(settled.is_empty());
    assert_eq!(session.tables(), &[TableName::from("orders")]);
    Ok(())
}
