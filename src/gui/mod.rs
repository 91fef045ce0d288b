mod app;
mod message;
mod screens;
mod widgets;

pub use app::DataNexusApp;
pub use message::Message;

use crate::{config::ClientConfig, core::gateway::HttpGateway};

/// Opens the desktop window and blocks until it is closed.
pub fn run(config: ClientConfig) -> anyhow::Result<()> {
    let gateway = HttpGateway::new(config)?;
    iced::application(
        move || DataNexusApp::new(gateway.clone()),
        DataNexusApp::update,
        DataNexusApp::view,
    )
    .title(DataNexusApp::title)
    .run()?;
    Ok(())
}
