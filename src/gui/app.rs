use iced::{Element, Task};

use super::{
    Message,
    screens::{Screen, ScreenData, ScreenMessage},
};
use crate::core::{
    gateway::HttpGateway,
    picker::RfdFilePicker,
    runtime,
    session::{Event, Screen as SessionScreen, Session},
};

pub struct DataNexusApp {
    session: Session,
    screen: ScreenData,
    gateway: HttpGateway,
    picker: RfdFilePicker,
}

impl DataNexusApp {
    pub fn new(gateway: HttpGateway) -> (Self, Task<Message>) {
        let session = Session::new();
        let mut app = Self {
            screen: ScreenData::for_session(&session),
            session,
            gateway,
            picker: RfdFilePicker,
        };
        let task = app.dispatch(Event::Startup);
        (app, task)
    }

    pub fn title(&self) -> String {
        match (self.session.screen(), self.session.selected_project()) {
            (SessionScreen::Dashboard, Some(project)) => format!("DataNexus - {}", project.name),
            _ => "DataNexus".to_string(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Session(event)
            | Message::LoadingPage(ScreenMessage::ParentMessage(event))
            | Message::LandingPage(ScreenMessage::ParentMessage(event))
            | Message::ProjectList(ScreenMessage::ParentMessage(event))
            | Message::Dashboard(ScreenMessage::ParentMessage(event)) => self.dispatch(event),

            Message::LandingPage(ScreenMessage::ScreenMessage(msg)) => match &mut self.screen {
                ScreenData::LandingPage(page) => {
                    page.update(msg, &self.session).map(Message::LandingPage)
                }
                _ => Task::none(),
            },
            Message::LoadingPage(ScreenMessage::ScreenMessage(never))
            | Message::ProjectList(ScreenMessage::ScreenMessage(never))
            | Message::Dashboard(ScreenMessage::ScreenMessage(never)) => match never {},
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.screen.view(&self.session)
    }

    /// Feeds an event to the session and schedules the commands it returns.
    fn dispatch(&mut self, event: Event) -> Task<Message> {
        let commands = self.session.update(event);
        if !self.screen.shows(&self.session) {
            self.screen = ScreenData::for_session(&self.session);
        }
        Task::batch(commands.into_iter().map(|command| {
            Task::perform(
                runtime::execute(command, self.gateway.clone(), self.picker),
                Message::Session,
            )
        }))
    }
}
