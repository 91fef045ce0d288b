use crate::{
    core::session::Event,
    gui::screens::{
        ScreenMessage, dashboard::DashboardScreen, landing_page::LandingPageScreen,
        loading_page::LoadingPageScreen, project_list::ProjectListScreen,
    },
};

#[derive(Debug, Clone)]
pub enum Message {
    /// A session event, usually the result of a finished command.
    Session(Event),
    LoadingPage(ScreenMessage<LoadingPageScreen>),
    LandingPage(ScreenMessage<LandingPageScreen>),
    ProjectList(ScreenMessage<ProjectListScreen>),
    Dashboard(ScreenMessage<DashboardScreen>),
}
