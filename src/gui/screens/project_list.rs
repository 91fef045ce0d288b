use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{Column, button, column, row, scrollable, text},
};

use crate::{
    core::{
        model::Project,
        session::{Event, OperationKind, Session},
    },
    gui::{
        screens::{Screen, ScreenMessage},
        widgets::{card, page, status_banner},
    },
};

#[derive(Debug, Clone)]
pub struct ProjectListScreen;

impl Screen for ProjectListScreen {
    type Message = Infallible;

    fn view<'a>(&'a self, session: &'a Session) -> Element<'a, ScreenMessage<Self>> {
        let loading_dashboard = session.is_busy(OperationKind::LoadDashboard);
        let fetching = session.is_busy(OperationKind::FetchProjects);

        let header = row![
            text("Your Projects").size(32).width(Length::Fill),
            button(text("Refresh")).on_press_maybe(
                (!fetching).then_some(ScreenMessage::ParentMessage(Event::RefreshProjects))
            ),
            button(text("New Project")).on_press(ScreenMessage::ParentMessage(Event::NewProject)),
        ]
        .spacing(12);

        let mut content = Column::new().push(header).spacing(24);
        for status in [OperationKind::FetchProjects, OperationKind::LoadDashboard] {
            if let Some(banner) = status_banner(session.status(status)) {
                content = content.push(banner);
            }
        }

        let opening = session.opening_project().map(|project| project.id);
        let cards = session.projects().iter().map(|project| {
            project_card(project, loading_dashboard, opening == Some(project.id))
        });
        content = content.push(scrollable(Column::with_children(cards).spacing(16)));

        page(content)
    }

    fn update(&mut self, message: Self::Message, _session: &Session) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}

fn project_card(
    project: &Project,
    disabled: bool,
    opening: bool,
) -> Element<'_, ScreenMessage<ProjectListScreen>> {
    let mut body = column![
        text(project.name.as_str()).size(20),
        text(format!("Created: {}", project.created_date())).size(14),
    ]
    .spacing(8);
    if opening {
        body = body.push(text("Opening dashboard...").size(14));
    }
    button(card(body))
        .on_press_maybe(
            (!disabled).then(|| ScreenMessage::ParentMessage(Event::OpenDashboard(project.clone()))),
        )
        .padding(0)
        .width(Length::Fill)
        .into()
}
