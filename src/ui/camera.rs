/// Camera section
///
/// Renders the owner-supplied current photo (preview or placeholder) and
/// the capture trigger. Holds no authoritative state of its own.

use iced::widget::{button, column, container, image, text};
use iced::{Alignment, ContentFit, Element, Length};

use crate::state::data::PhotoReference;
use crate::Message;

/// Height of the preview box
const PREVIEW_HEIGHT: f32 = 200.0;

pub fn section(photo: Option<&PhotoReference>, is_loading: bool) -> Element<'_, Message> {
    let preview: Element<Message> = match photo {
        Some(photo) => image(image::Handle::from_path(&photo.path))
            .width(Length::Fill)
            .height(Length::Fixed(PREVIEW_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => text("No photo taken yet").size(16).into(),
    };

    let label = if is_loading {
        "Opening Camera..."
    } else {
        "Take Photo"
    };

    column![
        text("📷 Camera").size(18),
        container(preview)
            .center_x(Length::Fill)
            .center_y(Length::Fixed(PREVIEW_HEIGHT))
            .style(container::rounded_box),
        button(label)
            .on_press_maybe((!is_loading).then_some(Message::CapturePhoto))
            .padding(10),
    ]
    .spacing(10)
    .align_x(Alignment::Center)
    .into()
}
