/// Static map previews
///
/// Builds provider URLs for a marker-centered map image, fetches the image
/// bytes, and tracks per-view display state. A fetch produces exactly two
/// signals: loaded bytes or a failure with no structured detail, so the
/// display state machine only ever switches between map and text fallback.

use iced::widget::image;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::data::Coordinate;

/// Pixel size of map preview images
pub const MAP_WIDTH: u32 = 400;
pub const MAP_HEIGHT: u32 = 200;

/// Marker color on the map image
const MARKER_COLOR: &str = "red";

/// The two interchangeable static map providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapProvider {
    OpenStreetMap,
    GoogleMaps,
}

/// Map image fetch failure. Deliberately carries only a message: the
/// caller never reacts to anything beyond loaded/failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("map image failed to load: {0}")]
    Fetch(String),
}

/// Build the provider URL for a marker-centered preview image
pub fn preview_url(
    provider: MapProvider,
    api_key: &str,
    coordinate: Coordinate,
    zoom: u8,
) -> String {
    let lat = coordinate.latitude;
    let lng = coordinate.longitude;

    match provider {
        MapProvider::OpenStreetMap => format!(
            "https://staticmap.openstreetmap.de/staticmap.php?center={lat},{lng}&zoom={zoom}&size={MAP_WIDTH}x{MAP_HEIGHT}&markers={lat},{lng},{MARKER_COLOR}"
        ),
        MapProvider::GoogleMaps => format!(
            "https://maps.googleapis.com/maps/api/staticmap?center={lat},{lng}&zoom={zoom}&size={MAP_WIDTH}x{MAP_HEIGHT}&markers=color:{MARKER_COLOR}%7C{lat},{lng}&key={api_key}"
        ),
    }
}

/// Fetch a map image
///
/// Returns the raw image bytes on success. Any HTTP or transport problem
/// collapses into `MapError::Fetch`.
pub async fn fetch_map_image(url: String) -> Result<Vec<u8>, MapError> {
    let response = reqwest::get(&url)
        .await
        .map_err(|e| MapError::Fetch(e.to_string()))?
        .error_for_status()
        .map_err(|e| MapError::Fetch(e.to_string()))?;

    let bytes = response
        .bytes()
        .await
        .map_err(|e| MapError::Fetch(e.to_string()))?;

    Ok(bytes.to_vec())
}

/// Display state of one map preview
#[derive(Debug, Clone)]
pub enum MapStatus {
    /// Fetch in flight
    Loading,
    /// Image bytes arrived and can be drawn
    Ready(image::Handle),
    /// Fetch failed; the view falls back to coordinate text
    Failed,
}

/// One on-screen map preview.
///
/// Results are tagged with the coordinate they were fetched for; a result
/// arriving after the displayed coordinate has changed is dropped. A load
/// failure only switches this view to its text fallback, it never touches
/// the coordinate value itself.
#[derive(Debug, Clone, Default)]
pub struct MapPreview {
    current: Option<(Coordinate, MapStatus)>,
}

impl MapPreview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading a preview for a new coordinate. Any in-flight result
    /// for a previous coordinate becomes stale and will be dropped.
    pub fn begin(&mut self, coordinate: Coordinate) {
        self.current = Some((coordinate, MapStatus::Loading));
    }

    /// Apply a fetch result. Ignored when it is not for the coordinate
    /// currently on display.
    pub fn resolve(&mut self, coordinate: Coordinate, result: Result<Vec<u8>, MapError>) {
        let Some((current, status)) = &mut self.current else {
            return;
        };
        if *current != coordinate {
            // Stale callback for a superseded coordinate
            return;
        }

        *status = match result {
            Ok(bytes) => MapStatus::Ready(image::Handle::from_bytes(bytes)),
            Err(e) => {
                eprintln!("⚠️  {}", e);
                MapStatus::Failed
            }
        };
    }

    /// Forget the preview entirely
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        self.current.as_ref().map(|(coordinate, _)| *coordinate)
    }

    pub fn status(&self) -> Option<&MapStatus> {
        self.current.as_ref().map(|(_, status)| status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARIS: Coordinate = Coordinate {
        latitude: 48.8584,
        longitude: 2.2945,
    };
    const SYDNEY: Coordinate = Coordinate {
        latitude: -33.8568,
        longitude: 151.2153,
    };

    #[test]
    fn test_openstreetmap_url() {
        let url = preview_url(MapProvider::OpenStreetMap, "", PARIS, 14);
        assert_eq!(
            url,
            "https://staticmap.openstreetmap.de/staticmap.php?center=48.8584,2.2945&zoom=14&size=400x200&markers=48.8584,2.2945,red"
        );
    }

    #[test]
    fn test_google_url_carries_key_and_marker() {
        let url = preview_url(MapProvider::GoogleMaps, "abc123", PARIS, 14);
        assert_eq!(
            url,
            "https://maps.googleapis.com/maps/api/staticmap?center=48.8584,2.2945&zoom=14&size=400x200&markers=color:red%7C48.8584,2.2945&key=abc123"
        );
    }

    #[test]
    fn test_begin_enters_loading_state() {
        let mut preview = MapPreview::new();
        preview.begin(PARIS);

        assert_eq!(preview.coordinate(), Some(PARIS));
        assert!(matches!(preview.status(), Some(MapStatus::Loading)));
    }

    #[test]
    fn test_resolve_success_is_ready() {
        let mut preview = MapPreview::new();
        preview.begin(PARIS);
        preview.resolve(PARIS, Ok(vec![0xFF, 0xD8, 0xFF, 0xD9]));

        assert!(matches!(preview.status(), Some(MapStatus::Ready(_))));
    }

    #[test]
    fn test_resolve_failure_keeps_coordinate() {
        let mut preview = MapPreview::new();
        preview.begin(PARIS);
        preview.resolve(PARIS, Err(MapError::Fetch("404".to_string())));

        assert!(matches!(preview.status(), Some(MapStatus::Failed)));
        assert_eq!(preview.coordinate(), Some(PARIS));
    }

    #[test]
    fn test_stale_result_for_superseded_coordinate_is_dropped() {
        let mut preview = MapPreview::new();
        preview.begin(PARIS);
        preview.begin(SYDNEY);

        // The late answer for Paris must not touch the Sydney preview
        preview.resolve(PARIS, Err(MapError::Fetch("timeout".to_string())));

        assert_eq!(preview.coordinate(), Some(SYDNEY));
        assert!(matches!(preview.status(), Some(MapStatus::Loading)));
    }

    #[test]
    fn test_result_after_clear_is_dropped() {
        let mut preview = MapPreview::new();
        preview.begin(PARIS);
        preview.clear();
        preview.resolve(PARIS, Ok(vec![1, 2, 3]));

        assert!(preview.coordinate().is_none());
        assert!(preview.status().is_none());
    }

    #[test]
    fn test_begin_after_failure_starts_fresh() {
        let mut preview = MapPreview::new();
        preview.begin(PARIS);
        preview.resolve(PARIS, Err(MapError::Fetch("503".to_string())));

        preview.begin(PARIS);

        assert!(matches!(preview.status(), Some(MapStatus::Loading)));
    }
}
