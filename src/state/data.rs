/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the journal, the capture layer, and the UI layer.

use std::path::PathBuf;

/// A geographic position produced by a successful location fetch.
/// Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Short display form for list rows (4 decimal places)
    pub fn display_short(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }

    /// Full-precision latitude line for detail views (6 decimal places)
    pub fn latitude_line(&self) -> String {
        format!("Latitude: {:.6}", self.latitude)
    }

    /// Full-precision longitude line for detail views (6 decimal places)
    pub fn longitude_line(&self) -> String {
        format!("Longitude: {:.6}", self.longitude)
    }
}

/// Reference to a captured photo on disk
///
/// The thumbnail is a cached, downsized copy for list rows. It is generated
/// right after capture and may be absent if generation failed; nothing else
/// depends on it.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoReference {
    /// Full path to the captured image
    pub path: PathBuf,
    /// Path to the cached thumbnail (None if not generated)
    pub thumbnail: Option<PathBuf>,
}

/// A single saved log entry
///
/// Created exactly once, at commit time, from whatever was staged.
/// Never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Unique id, generated at commit time
    pub id: String,
    /// The photo captured for this entry, if any
    pub photo: Option<PhotoReference>,
    /// The position fetched for this entry, if any
    pub coordinate: Option<Coordinate>,
    /// Human-readable local time of the commit
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_short_rounds_to_four_places() {
        let coord = Coordinate {
            latitude: 48.858370123,
            longitude: 2.294481987,
        };
        assert_eq!(coord.display_short(), "48.8584, 2.2945");
    }

    #[test]
    fn test_detail_lines_keep_six_places() {
        let coord = Coordinate {
            latitude: -33.856784,
            longitude: 151.215297,
        };
        assert_eq!(coord.latitude_line(), "Latitude: -33.856784");
        assert_eq!(coord.longitude_line(), "Longitude: 151.215297");
    }
}
