/// Saved-logs section
///
/// A read-only view over the committed entries plus the purely local
/// selection state for the detail screen. Nothing here can alter the
/// journal itself.

use iced::widget::{
    button, column, container, horizontal_space, image, row, scrollable, text, Column,
};
use iced::{Alignment, ContentFit, Element, Length};

use crate::map::{MapError, MapPreview, MapStatus};
use crate::state::data::{Coordinate, LogEntry};
use crate::Message;

/// Side length of list thumbnails
const THUMBNAIL_SIDE: f32 = 60.0;
/// Height of the detail screen photo
const DETAIL_PHOTO_HEIGHT: f32 = 300.0;
/// Height of the detail screen map
const DETAIL_MAP_HEIGHT: f32 = 200.0;

/// Selection state for the detail screen
#[derive(Debug, Default)]
pub struct LogsView {
    selected: Option<LogEntry>,
    detail_open: bool,
    /// Map preview for the open detail screen. Reset on every open so a
    /// load failure from one entry never carries over to another.
    detail_map: MapPreview,
}

impl LogsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the detail screen for an entry. Returns the coordinate a map
    /// preview should be fetched for, if the entry has one.
    pub fn open(&mut self, entry: LogEntry) -> Option<Coordinate> {
        self.detail_map.clear();
        let coordinate = entry.coordinate;
        if let Some(coordinate) = coordinate {
            self.detail_map.begin(coordinate);
        }

        self.selected = Some(entry);
        self.detail_open = true;
        coordinate
    }

    /// Close the detail screen and drop the selection
    pub fn close(&mut self) {
        self.detail_open = false;
        self.selected = None;
        self.detail_map.clear();
    }

    pub fn is_open(&self) -> bool {
        self.detail_open
    }

    /// Apply a detail map fetch result (stale results are dropped)
    pub fn resolve_map(&mut self, coordinate: Coordinate, result: Result<Vec<u8>, MapError>) {
        self.detail_map.resolve(coordinate, result);
    }

    /// The detail screen, when one is open
    pub fn detail(&self) -> Option<Element<'_, Message>> {
        if !self.detail_open {
            return None;
        }
        let entry = self.selected.as_ref()?;
        Some(detail_screen(entry, &self.detail_map))
    }
}

/// Summary list over the committed entries (newest first)
pub fn section(entries: &[LogEntry]) -> Element<'_, Message> {
    let header = text(format!("📋 Saved Logs ({})", entries.len())).size(18);

    let body: Element<Message> = if entries.is_empty() {
        column![
            text("No logs saved yet.").size(16),
            text("Take a photo and get location to create your first log!").size(14),
        ]
        .spacing(5)
        .align_x(Alignment::Center)
        .into()
    } else {
        Column::with_children(entries.iter().map(summary_row))
            .spacing(10)
            .into()
    };

    column![header, body].spacing(10).into()
}

/// One clickable row: thumbnail-or-placeholder, timestamp, coordinate
fn summary_row(entry: &LogEntry) -> Element<'_, Message> {
    let thumbnail: Element<Message> = match &entry.photo {
        Some(photo) => {
            // Fall back to the full image when no thumbnail was cached
            let path = photo.thumbnail.as_ref().unwrap_or(&photo.path);
            image(image::Handle::from_path(path))
                .width(Length::Fixed(THUMBNAIL_SIDE))
                .height(Length::Fixed(THUMBNAIL_SIDE))
                .content_fit(ContentFit::Cover)
                .into()
        }
        None => container(text("📷").size(20))
            .center_x(Length::Fixed(THUMBNAIL_SIDE))
            .center_y(Length::Fixed(THUMBNAIL_SIDE))
            .style(container::rounded_box)
            .into(),
    };

    let mut info = column![text(&entry.timestamp).size(14)].spacing(2);
    if let Some(coordinate) = entry.coordinate {
        info = info.push(text(format!("📍 {}", coordinate.display_short())).size(12));
    }
    if entry.coordinate.is_none() && entry.photo.is_none() {
        info = info.push(text("No data available").size(12));
    }
    info = info.push(text("Click to view details").size(10));

    button(row![thumbnail, info].spacing(12).align_y(Alignment::Center))
        .on_press(Message::OpenEntry(entry.id.clone()))
        .style(button::secondary)
        .width(Length::Fill)
        .padding(12)
        .into()
}

/// Full-window detail screen for one entry
fn detail_screen<'a>(entry: &'a LogEntry, map: &'a MapPreview) -> Element<'a, Message> {
    let header = row![
        text("Log Details").size(26),
        horizontal_space(),
        button("✕ Close").on_press(Message::CloseDetail).padding(8),
    ]
    .align_y(Alignment::Center);

    let mut content = column![
        header,
        text(format!("Saved: {}", entry.timestamp)).size(16),
    ]
    .spacing(20)
    .padding(30);

    if let Some(photo) = &entry.photo {
        content = content.push(
            column![
                text("📷 Photo").size(18),
                image(image::Handle::from_path(&photo.path))
                    .width(Length::Fill)
                    .height(Length::Fixed(DETAIL_PHOTO_HEIGHT))
                    .content_fit(ContentFit::Contain),
            ]
            .spacing(10),
        );
    }

    if let Some(coordinate) = entry.coordinate {
        let mut section = column![
            text("📍 Location").size(18),
            text(coordinate.latitude_line()).size(14),
            text(coordinate.longitude_line()).size(14),
        ]
        .spacing(5);

        match map.status() {
            Some(MapStatus::Ready(handle)) => {
                section = section.push(
                    image(handle.clone())
                        .width(Length::Fill)
                        .height(Length::Fixed(DETAIL_MAP_HEIGHT))
                        .content_fit(ContentFit::Cover),
                );
            }
            Some(MapStatus::Loading) => {
                section = section.push(text("Loading map...").size(14));
            }
            // Failed: the coordinate lines above are the fallback
            _ => {}
        }

        content = content.push(section);
    }

    scrollable(content).into()
}
