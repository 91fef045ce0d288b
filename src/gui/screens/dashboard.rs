use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{Column, button, column, row, scrollable, text},
};

use crate::{
    core::session::{Event, OperationKind, Session},
    gui::{
        screens::{Screen, ScreenMessage},
        widgets::{card, file_name, page, status_banner},
    },
};

/// Tables of the selected project, plus ingestion into it.
#[derive(Debug, Clone)]
pub struct DashboardScreen;

impl Screen for DashboardScreen {
    type Message = Infallible;

    fn view<'a>(&'a self, session: &'a Session) -> Element<'a, ScreenMessage<Self>> {
        let loading = session.is_busy(OperationKind::LoadDashboard);
        let title = session
            .selected_project()
            .map(|project| project.name.as_str())
            .unwrap_or("Project Dashboard");

        let header = column![
            button(text("← Back to projects").size(14))
                .on_press(ScreenMessage::ParentMessage(Event::BackToProjects)),
            row![
                column![text(title).size(32), text("Tables").size(14)]
                    .spacing(4)
                    .width(Length::Fill),
                button(text("Refresh")).on_press_maybe(
                    (!loading && session.selected_project().is_some())
                        .then_some(ScreenMessage::ParentMessage(Event::RefreshDashboard))
                ),
            ]
            .spacing(12),
        ]
        .spacing(8);

        let mut content = Column::new().push(header).spacing(24);
        if let Some(banner) = status_banner(session.status(OperationKind::LoadDashboard)) {
            content = content.push(banner);
        }

        let tables: Element<'a, ScreenMessage<Self>> = if loading {
            text("Loading tables...").into()
        } else if session.tables().is_empty() {
            text("No tables found yet. Ingest data to get started.").into()
        } else {
            scrollable(
                Column::with_children(
                    session
                        .tables()
                        .iter()
                        .map(|table| card(text(table.as_str()).size(18))),
                )
                .spacing(12),
            )
            .height(Length::Fill)
            .into()
        };
        content = content.push(ingest_panel(session)).push(tables);

        page(content)
    }

    fn update(&mut self, message: Self::Message, _session: &Session) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}

fn ingest_panel(session: &Session) -> Element<'_, ScreenMessage<DashboardScreen>> {
    let ingesting = session.is_busy(OperationKind::Ingest);
    let can_pick = !ingesting && !session.file_dialog_open();
    let picked = session
        .file_path()
        .map(file_name)
        .unwrap_or("Select CSV, JSON, or Parquet file");

    let mut panel = Column::new()
        .push(
            row![
                button(text(picked))
                    .on_press_maybe(
                        can_pick.then_some(ScreenMessage::ParentMessage(Event::PickFile))
                    )
                    .width(Length::Fill),
                button(text(if ingesting { "Ingesting..." } else { "Ingest Data" })).on_press_maybe(
                    (!ingesting).then_some(ScreenMessage::ParentMessage(Event::Ingest))
                ),
            ]
            .spacing(12),
        )
        .spacing(8);
    if let Some(banner) = status_banner(session.status(OperationKind::Ingest)) {
        panel = panel.push(banner);
    }
    panel.into()
}
