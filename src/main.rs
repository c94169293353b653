use iced::widget::{button, column, container, row, scrollable, text, Column};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};

mod capture;
mod config;
mod map;
mod state;
mod ui;

use capture::{CaptureError, CaptureOptions, LocationError, PositionRequest};
use config::AppConfig;
use map::{MapError, MapPreview};
use state::data::{Coordinate, PhotoReference};
use state::journal::{CommitError, Journal};
use ui::logs::LogsView;

/// Main application state
///
/// Owns the authoritative data: the staged (not yet saved) photo and
/// coordinate inside the journal, the committed entries, and the flags
/// that gate the two device capabilities.
struct GeoLogger {
    /// User configuration (map provider, zoom, API key)
    config: AppConfig,
    /// Staged capture data plus the committed log entries
    journal: Journal,
    /// Selection state for the saved-logs detail screen
    logs_view: LogsView,
    /// Map preview for the staged coordinate
    staged_map: MapPreview,
    /// Permission grants, remembered for the process lifetime.
    /// A denial is not remembered; the user can simply try again.
    location_granted: bool,
    camera_granted: bool,
    /// Loading flags; each trigger is disabled while its own operation runs
    fetching_location: bool,
    capturing_photo: bool,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked "Get Current Location"
    FetchLocation,
    /// Position lookup finished
    LocationFetched(Result<Coordinate, LocationError>),
    /// User clicked "Take Photo"
    CapturePhoto,
    /// Photo capture finished (None means the user cancelled)
    PhotoCaptured(Result<Option<PhotoReference>, CaptureError>),
    /// User clicked "Save Log Entry"
    SaveEntry,
    /// User clicked "Discard"; opens the confirmation dialog
    DiscardStaged,
    /// Confirmation dialog answered
    DiscardConfirmed(bool),
    /// Map image fetch for the staged coordinate finished
    StagedMapLoaded(Coordinate, Result<Vec<u8>, MapError>),
    /// Map image fetch for the open detail screen finished
    DetailMapLoaded(Coordinate, Result<Vec<u8>, MapError>),
    /// User clicked a summary row
    OpenEntry(String),
    /// User closed the detail screen
    CloseDetail,
}

impl GeoLogger {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = AppConfig::load();
        println!(
            "🗺️  GeoLog initialized ({:?} maps, zoom {})",
            config.map_provider, config.map_zoom
        );

        (
            GeoLogger {
                config,
                journal: Journal::new(),
                logs_view: LogsView::new(),
                staged_map: MapPreview::new(),
                location_granted: false,
                camera_granted: false,
                fetching_location: false,
                capturing_photo: false,
                status: String::from("Ready. Capture a photo or fetch your location to begin."),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FetchLocation => {
                if self.fetching_location {
                    return Task::none();
                }
                self.fetching_location = true;
                self.status = String::from("Getting location...");

                Task::perform(
                    capture::location::current_position(
                        self.location_granted,
                        PositionRequest::default(),
                    ),
                    Message::LocationFetched,
                )
            }
            Message::LocationFetched(result) => {
                self.fetching_location = false;
                match result {
                    Ok(coordinate) => {
                        self.location_granted = true;
                        self.journal.stage_coordinate(coordinate);
                        self.staged_map.begin(coordinate);
                        self.status = format!("Location: {}", coordinate.display_short());

                        let url = map::preview_url(
                            self.config.map_provider,
                            &self.config.google_api_key,
                            coordinate,
                            self.config.map_zoom,
                        );
                        return Task::perform(map::fetch_map_image(url), move |result| {
                            Message::StagedMapLoaded(coordinate, result)
                        });
                    }
                    Err(LocationError::PermissionDenied) => {
                        self.status =
                            String::from("Permission denied. Location access is required.");
                    }
                    Err(e) => {
                        // The consent prompt was accepted, only the lookup failed
                        self.location_granted = true;
                        self.status = String::from("Could not fetch location. Please try again.");
                        eprintln!("⚠️  {}", e);
                    }
                }
                Task::none()
            }
            Message::CapturePhoto => {
                if self.capturing_photo {
                    return Task::none();
                }
                self.capturing_photo = true;
                self.status = String::from("Opening camera...");

                Task::perform(
                    capture::camera::capture_photo(self.camera_granted, CaptureOptions::default()),
                    Message::PhotoCaptured,
                )
            }
            Message::PhotoCaptured(result) => {
                self.capturing_photo = false;
                match result {
                    Ok(Some(photo)) => {
                        self.camera_granted = true;
                        self.journal.stage_photo(photo);
                        self.status = String::from("Photo captured.");
                    }
                    Ok(None) => {
                        // Cancelled: no value emitted, nothing changes
                        self.camera_granted = true;
                        self.status = String::from("Ready.");
                    }
                    Err(CaptureError::PermissionDenied) => {
                        self.status = String::from("Permission denied. Camera access is required.");
                    }
                    Err(e) => {
                        self.camera_granted = true;
                        self.status = String::from("Could not take photo.");
                        eprintln!("⚠️  {}", e);
                    }
                }
                Task::none()
            }
            Message::SaveEntry => {
                match self.journal.commit() {
                    Ok(entry) => {
                        println!("✅ Saved log entry {}", entry.id);
                    }
                    Err(CommitError::NothingStaged) => {
                        self.status =
                            String::from("No data yet. Get a location or take a photo first.");
                        return Task::none();
                    }
                }

                self.staged_map.clear();
                self.status = format!("✅ Log entry saved! {} total.", self.journal.len());
                Task::none()
            }
            Message::DiscardStaged => {
                if !self.journal.has_staged() {
                    return Task::none();
                }
                Task::perform(confirm_discard(), Message::DiscardConfirmed)
            }
            Message::DiscardConfirmed(confirmed) => {
                if confirmed {
                    self.journal.discard();
                    self.staged_map.clear();
                    self.status = String::from("Staged photo and location discarded.");
                }
                Task::none()
            }
            Message::StagedMapLoaded(coordinate, result) => {
                self.staged_map.resolve(coordinate, result);
                Task::none()
            }
            Message::DetailMapLoaded(coordinate, result) => {
                self.logs_view.resolve_map(coordinate, result);
                Task::none()
            }
            Message::OpenEntry(id) => {
                let Some(entry) = self
                    .journal
                    .entries()
                    .iter()
                    .find(|entry| entry.id == id)
                    .cloned()
                else {
                    return Task::none();
                };

                if let Some(coordinate) = self.logs_view.open(entry) {
                    let url = map::preview_url(
                        self.config.map_provider,
                        &self.config.google_api_key,
                        coordinate,
                        self.config.map_zoom,
                    );
                    return Task::perform(map::fetch_map_image(url), move |result| {
                        Message::DetailMapLoaded(coordinate, result)
                    });
                }
                Task::none()
            }
            Message::CloseDetail => {
                self.logs_view.close();
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        // The detail screen replaces the whole window while open
        if let Some(detail) = self.logs_view.detail() {
            return detail;
        }

        let header = column![
            text("Location & Camera Logger").size(26),
            text("Capture moments with location data").size(16),
        ]
        .spacing(5)
        .align_x(Alignment::Center);

        let actions = row![
            button("Save Log Entry").on_press(Message::SaveEntry).padding(10),
            button("Discard")
                .on_press_maybe(self.journal.has_staged().then_some(Message::DiscardStaged))
                .padding(10),
        ]
        .spacing(10);

        let content: Column<Message> = column![
            header,
            ui::location::section(
                self.journal.staged_coordinate(),
                &self.staged_map,
                self.fetching_location,
            ),
            ui::camera::section(self.journal.staged_photo(), self.capturing_photo),
            actions,
            ui::logs::section(self.journal.entries()),
            text(&self.status).size(14),
        ]
        .spacing(20)
        .padding(30)
        .align_x(Alignment::Center);

        scrollable(
            container(content)
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::GruvboxLight
    }
}

fn main() -> iced::Result {
    iced::application(
        "GeoLog",
        GeoLogger::update,
        GeoLogger::view,
    )
    .theme(GeoLogger::theme)
    .centered()
    .run_with(GeoLogger::new)
}

/// Ask before throwing away staged data
async fn confirm_discard() -> bool {
    let answer = AsyncMessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Discard staged data?")
        .set_description("The unsaved photo and location will be lost.")
        .set_buttons(MessageButtons::YesNo)
        .show()
        .await;

    matches!(answer, MessageDialogResult::Yes)
}
