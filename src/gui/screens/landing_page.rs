use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{Column, button, column, container, text, text_input},
};

use crate::{
    core::session::{Event, OperationKind, Session},
    gui::{
        screens::{Screen, ScreenMessage},
        widgets::{file_name, status_banner},
    },
};

/// Project creation form, followed by the ingestion form once a project exists.
#[derive(Debug, Clone, Default)]
pub struct LandingPageScreen {
    project_name: String,
}

#[derive(Debug, Clone)]
pub enum LandingPageMessage {
    ProjectNameChanged(String),
    SubmitProjectName,
}

impl Screen for LandingPageScreen {
    type Message = LandingPageMessage;

    fn view<'a>(&'a self, session: &'a Session) -> Element<'a, ScreenMessage<Self>> {
        let form = if session.project_created() {
            ingestion_form(session)
        } else {
            self.creation_form(session)
        };

        let mut content = Column::new()
            .push(text("DATANEXUS").size(56))
            .push(text("Your intelligent data workspace").size(18))
            .spacing(24)
            .padding(24)
            .align_x(Center)
            .max_width(560);
        if let Some(banner) = status_banner(session.status(OperationKind::FetchProjects)) {
            content = content.push(banner);
        }
        content = content.push(form);

        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn update(&mut self, message: Self::Message, _session: &Session) -> Task<ScreenMessage<Self>> {
        match message {
            LandingPageMessage::ProjectNameChanged(name) => {
                self.project_name = name;
                Task::none()
            }
            LandingPageMessage::SubmitProjectName => Task::done(ScreenMessage::ParentMessage(
                Event::CreateProject(self.project_name.clone()),
            )),
        }
    }
}

impl LandingPageScreen {
    fn creation_form<'a>(&'a self, session: &'a Session) -> Element<'a, ScreenMessage<Self>> {
        let creating = session.is_busy(OperationKind::CreateProject);
        let submit = (!creating)
            .then_some(ScreenMessage::ScreenMessage(LandingPageMessage::SubmitProjectName));

        let mut form = Column::new()
            .push(text("PROJECT NAME").size(14))
            .push(
                text_input("Enter your project name...", &self.project_name)
                    .on_input_maybe((!creating).then_some(|name| {
                        ScreenMessage::ScreenMessage(LandingPageMessage::ProjectNameChanged(name))
                    }))
                    .on_submit_maybe(submit.clone())
                    .padding(12)
                    .size(18),
            )
            .spacing(12)
            .width(Length::Fill);
        if let Some(banner) = status_banner(session.status(OperationKind::CreateProject)) {
            form = form.push(banner);
        }
        form.push(
            button(text(if creating { "Creating..." } else { "Create Project" }).size(18))
                .on_press_maybe(submit)
                .padding(12)
                .width(Length::Fill),
        )
        .into()
    }
}

fn ingestion_form(session: &Session) -> Element<'_, ScreenMessage<LandingPageScreen>> {
    let ingesting = session.is_busy(OperationKind::Ingest);
    let can_pick = !ingesting && !session.file_dialog_open();

    let picked = match session.file_path() {
        Some(path) => file_name(path).to_string(),
        None => "Select CSV, JSON, or Parquet file".to_string(),
    };
    let ingest_status = session.status(OperationKind::Ingest);
    let banner = if ingest_status.message().is_empty() {
        status_banner(session.status(OperationKind::CreateProject))
    } else {
        status_banner(ingest_status)
    };

    let mut form = Column::new()
        .push(
            column![
                text("✓ Project Created").size(14).style(text::success),
                text(session.created_project_name().unwrap_or_default()),
            ]
            .spacing(4)
            .align_x(Center)
            .width(Length::Fill),
        )
        .push(text("DATA FILE").size(14))
        .push(
            button(text(picked))
                .on_press_maybe(
                    can_pick.then_some(ScreenMessage::ParentMessage(Event::PickFile)),
                )
                .padding(12)
                .width(Length::Fill),
        )
        .spacing(12)
        .width(Length::Fill);
    if let Some(banner) = banner {
        form = form.push(banner);
    }
    form.push(
        button(text(if ingesting { "Ingesting..." } else { "Ingest Data" }).size(18))
            .on_press_maybe((!ingesting).then_some(ScreenMessage::ParentMessage(Event::Ingest)))
            .padding(12)
            .width(Length::Fill),
    )
    .into()
}
