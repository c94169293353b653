/// The Journal owns all authoritative logging state:
/// the staged (not yet saved) photo and coordinate, and the
/// ordered list of committed log entries (newest first).
///
/// Everything lives in memory for the lifetime of the process.
/// Entries are append-only and never mutated after creation.

use chrono::{Local, Utc};
use thiserror::Error;

use super::data::{Coordinate, LogEntry, PhotoReference};

/// Why a commit was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommitError {
    /// Neither a photo nor a coordinate has been staged
    #[error("nothing staged to save")]
    NothingStaged,
}

/// In-memory log of captured photo/position pairs
#[derive(Debug, Default)]
pub struct Journal {
    staged_photo: Option<PhotoReference>,
    staged_coordinate: Option<Coordinate>,
    entries: Vec<LogEntry>,
    /// Per-session sequence number, appended to the time-based id so that
    /// two commits inside the same millisecond still get distinct ids
    next_seq: u64,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the staged photo. Leaves the staged coordinate and the
    /// committed entries untouched.
    pub fn stage_photo(&mut self, photo: PhotoReference) {
        self.staged_photo = Some(photo);
    }

    /// Replace the staged coordinate. Leaves the staged photo and the
    /// committed entries untouched.
    pub fn stage_coordinate(&mut self, coordinate: Coordinate) {
        self.staged_coordinate = Some(coordinate);
    }

    pub fn staged_photo(&self) -> Option<&PhotoReference> {
        self.staged_photo.as_ref()
    }

    pub fn staged_coordinate(&self) -> Option<Coordinate> {
        self.staged_coordinate
    }

    /// Whether there is anything staged at all
    pub fn has_staged(&self) -> bool {
        self.staged_photo.is_some() || self.staged_coordinate.is_some()
    }

    /// Turn the staged fields into a permanent entry.
    ///
    /// Rejected when both staged fields are empty; otherwise the new entry
    /// is prepended (the list stays newest-first), both staged fields are
    /// cleared, and a reference to the new entry is returned.
    pub fn commit(&mut self) -> Result<&LogEntry, CommitError> {
        if !self.has_staged() {
            return Err(CommitError::NothingStaged);
        }

        let entry = LogEntry {
            id: format!("{}-{}", Utc::now().timestamp_millis(), self.next_seq),
            photo: self.staged_photo.take(),
            coordinate: self.staged_coordinate.take(),
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };
        self.next_seq += 1;

        self.entries.insert(0, entry);
        Ok(&self.entries[0])
    }

    /// Drop the staged fields without committing them.
    ///
    /// The caller is responsible for confirming with the user first;
    /// this method itself is unconditional.
    pub fn discard(&mut self) {
        self.staged_photo = None;
        self.staged_coordinate = None;
    }

    /// Committed entries, newest first
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn photo(name: &str) -> PhotoReference {
        PhotoReference {
            path: PathBuf::from(name),
            thumbnail: None,
        }
    }

    fn coordinate(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate {
            latitude,
            longitude,
        }
    }

    #[test]
    fn test_commit_with_nothing_staged_is_rejected() {
        let mut journal = Journal::new();

        let result = journal.commit();

        assert_eq!(result.unwrap_err(), CommitError::NothingStaged);
        assert!(journal.is_empty());
        assert!(!journal.has_staged());
    }

    #[test]
    fn test_commit_with_photo_only_succeeds() {
        let mut journal = Journal::new();
        journal.stage_photo(photo("p1.jpg"));

        let entry = journal.commit().unwrap().clone();

        assert_eq!(entry.photo, Some(photo("p1.jpg")));
        assert_eq!(entry.coordinate, None);
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn test_commit_with_coordinate_only_succeeds() {
        let mut journal = Journal::new();
        journal.stage_coordinate(coordinate(1.0, 2.0));

        let entry = journal.commit().unwrap().clone();

        assert_eq!(entry.coordinate, Some(coordinate(1.0, 2.0)));
        assert_eq!(entry.photo, None);
    }

    #[test]
    fn test_commit_copies_staged_fields_and_clears_them() {
        let mut journal = Journal::new();
        journal.stage_photo(photo("p1.jpg"));
        journal.stage_coordinate(coordinate(48.8584, 2.2945));

        let entry = journal.commit().unwrap().clone();

        assert_eq!(entry.photo, Some(photo("p1.jpg")));
        assert_eq!(entry.coordinate, Some(coordinate(48.8584, 2.2945)));
        assert!(journal.staged_photo().is_none());
        assert!(journal.staged_coordinate().is_none());
        assert!(!journal.has_staged());
    }

    #[test]
    fn test_entries_are_newest_first() {
        let mut journal = Journal::new();

        journal.stage_photo(photo("first.jpg"));
        journal.commit().unwrap();
        journal.stage_photo(photo("second.jpg"));
        journal.commit().unwrap();

        assert_eq!(journal.entries()[0].photo, Some(photo("second.jpg")));
        assert_eq!(journal.entries()[1].photo, Some(photo("first.jpg")));
    }

    #[test]
    fn test_rapid_commits_get_distinct_ids() {
        let mut journal = Journal::new();

        journal.stage_photo(photo("a.jpg"));
        journal.commit().unwrap();
        journal.stage_photo(photo("b.jpg"));
        journal.commit().unwrap();
        journal.stage_photo(photo("c.jpg"));
        journal.commit().unwrap();

        let ids: Vec<&str> = journal.entries().iter().map(|e| e.id.as_str()).collect();
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
        assert_ne!(ids[0], ids[2]);
    }

    #[test]
    fn test_staging_overwrites_previous_value_only() {
        let mut journal = Journal::new();
        journal.stage_coordinate(coordinate(1.0, 1.0));
        journal.stage_photo(photo("p.jpg"));

        journal.stage_coordinate(coordinate(2.0, 2.0));

        assert_eq!(journal.staged_coordinate(), Some(coordinate(2.0, 2.0)));
        assert_eq!(journal.staged_photo(), Some(&photo("p.jpg")));
    }

    #[test]
    fn test_discard_clears_staged_but_not_entries() {
        let mut journal = Journal::new();
        journal.stage_photo(photo("saved.jpg"));
        journal.commit().unwrap();

        journal.stage_photo(photo("staged.jpg"));
        journal.stage_coordinate(coordinate(3.0, 4.0));
        journal.discard();

        assert!(!journal.has_staged());
        assert_eq!(journal.len(), 1);
        assert_eq!(journal.entries()[0].photo, Some(photo("saved.jpg")));
    }

    #[test]
    fn test_failed_commit_leaves_entries_untouched() {
        let mut journal = Journal::new();
        journal.stage_coordinate(coordinate(5.0, 6.0));
        journal.commit().unwrap();

        assert!(journal.commit().is_err());
        assert_eq!(journal.len(), 1);
    }
}
