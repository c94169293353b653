/// Location section
///
/// Renders the owner-supplied current coordinate and the fetch trigger.
/// Holds no authoritative state of its own: the coordinate and the map
/// preview both live in the application shell.

use iced::widget::{button, column, container, image, text};
use iced::{Alignment, ContentFit, Element, Length};

use crate::map::{MapPreview, MapStatus, MAP_HEIGHT};
use crate::state::data::Coordinate;
use crate::Message;

/// Height of the preview box
const PREVIEW_HEIGHT: f32 = 200.0;

pub fn section<'a>(
    coordinate: Option<Coordinate>,
    map: &'a MapPreview,
    is_loading: bool,
) -> Element<'a, Message> {
    let preview: Element<Message> = match coordinate {
        Some(coordinate) => preview_content(coordinate, map),
        None => text("No location selected yet").size(16).into(),
    };

    let label = if is_loading {
        "Getting Location..."
    } else {
        "Get Current Location"
    };

    column![
        text("📍 Location").size(18),
        container(preview)
            .center_x(Length::Fill)
            .center_y(Length::Fixed(PREVIEW_HEIGHT))
            .style(container::rounded_box),
        button(label)
            .on_press_maybe((!is_loading).then_some(Message::FetchLocation))
            .padding(10),
    ]
    .spacing(10)
    .align_x(Alignment::Center)
    .into()
}

/// Map preview when it loaded, coordinate text otherwise.
/// A failed map never hides the coordinate itself.
fn preview_content<'a>(coordinate: Coordinate, map: &'a MapPreview) -> Element<'a, Message> {
    match map.status() {
        Some(MapStatus::Ready(handle)) => column![
            image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(MAP_HEIGHT as f32))
                .content_fit(ContentFit::Cover),
            text(coordinate.display_short()).size(14),
        ]
        .spacing(5)
        .align_x(Alignment::Center)
        .into(),
        Some(MapStatus::Loading) => column![
            text("Loading map...").size(14),
            coordinate_lines(coordinate),
        ]
        .spacing(5)
        .align_x(Alignment::Center)
        .into(),
        _ => coordinate_lines(coordinate),
    }
}

fn coordinate_lines<'a>(coordinate: Coordinate) -> Element<'a, Message> {
    column![
        text(coordinate.latitude_line()).size(14),
        text(coordinate.longitude_line()).size(14),
    ]
    .spacing(5)
    .align_x(Alignment::Center)
    .into()
}
