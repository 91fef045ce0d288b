pub mod dashboard;
pub mod landing_page;
pub mod loading_page;
pub mod project_list;

use iced::{Element, Task};

use crate::{
    core::session::{Event, Screen as SessionScreen, Session},
    gui::Message,
};

/// A screen either handles its own message or hands a session event up.
#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(Event),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    fn view<'a>(&'a self, session: &'a Session) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, session: &Session)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    LoadingPage(loading_page::LoadingPageScreen),
    LandingPage(landing_page::LandingPageScreen),
    ProjectList(project_list::ProjectListScreen),
    Dashboard(dashboard::DashboardScreen),
}

impl ScreenData {
    /// The widget screen for the session's current state.
    pub fn for_session(session: &Session) -> Self {
        if !session.startup_complete() {
            return ScreenData::LoadingPage(loading_page::LoadingPageScreen);
        }
        match session.screen() {
            SessionScreen::Landing => {
                ScreenData::LandingPage(landing_page::LandingPageScreen::default())
            }
            SessionScreen::ProjectList => {
                ScreenData::ProjectList(project_list::ProjectListScreen)
            }
            SessionScreen::Dashboard => ScreenData::Dashboard(dashboard::DashboardScreen),
        }
    }

    /// Whether this widget screen still matches the session.
    pub fn shows(&self, session: &Session) -> bool {
        match self {
            ScreenData::LoadingPage(_) => !session.startup_complete(),
            ScreenData::LandingPage(_) => {
                session.startup_complete() && session.screen() == SessionScreen::Landing
            }
            ScreenData::ProjectList(_) => session.screen() == SessionScreen::ProjectList,
            ScreenData::Dashboard(_) => session.screen() == SessionScreen::Dashboard,
        }
    }

    pub fn view<'a>(&'a self, session: &'a Session) -> Element<'a, Message> {
        match self {
            ScreenData::LoadingPage(screen) => screen.view(session).map(Message::LoadingPage),
            ScreenData::LandingPage(screen) => screen.view(session).map(Message::LandingPage),
            ScreenData::ProjectList(screen) => screen.view(session).map(Message::ProjectList),
            ScreenData::Dashboard(screen) => screen.view(session).map(Message::Dashboard),
        }
    }
}
