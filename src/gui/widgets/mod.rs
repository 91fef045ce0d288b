use std::path::Path;

use iced::{
    Element, Length,
    widget::{container, text},
};
use iced_widget::container::bordered_box;

use crate::core::session::{MessageKind, OperationStatus};

/// Success or error line for an operation; nothing when there is no message.
pub fn status_banner<'a, Message: 'a>(status: &'a OperationStatus) -> Option<Element<'a, Message>> {
    if status.message().is_empty() {
        return None;
    }
    let line = text(status.message()).size(14);
    let line = match status.message_kind() {
        MessageKind::Success => line.style(text::success),
        MessageKind::Error => line.style(text::danger),
        MessageKind::None => line,
    };
    Some(
        container(line)
            .padding(12)
            .width(Length::Fill)
            .style(bordered_box)
            .into(),
    )
}

/// Page body: padded, width-limited and centered horizontally.
pub fn page<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(container(content).max_width(960).padding(32))
        .center_x(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Card around one project or table entry.
pub fn card<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(20)
        .width(Length::Fill)
        .style(bordered_box)
        .into()
}

/// Last path component, for showing a picked file.
pub fn file_name(path: &str) -> &str {
    path.rsplit(['\\', '/'])
        .next()
        .filter(|name| !name.is_empty())
        .or_else(|| Path::new(path).file_name().and_then(|name| name.to_str()))
        .unwrap_or(path)
}
