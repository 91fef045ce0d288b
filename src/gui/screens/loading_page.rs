use std::convert::Infallible;

use iced::{
    Element, Task,
    widget::{container, text},
};

use crate::{
    core::session::Session,
    gui::screens::{Screen, ScreenMessage},
};

/// Shown until the first project directory fetch resolves.
#[derive(Debug, Clone)]
pub struct LoadingPageScreen;

impl Screen for LoadingPageScreen {
    type Message = Infallible;

    fn view<'a>(&'a self, _session: &'a Session) -> Element<'a, ScreenMessage<Self>> {
        container(text("Loading...").size(24))
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill)
            .into()
    }

    fn update(&mut self, message: Self::Message, _session: &Session) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
