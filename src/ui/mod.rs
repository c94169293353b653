/// User interface module
///
/// View-only components in the "state down, messages up" style:
/// each renders owner-supplied state and emits Messages upward,
/// none holds authoritative data.
/// - Location section with map preview (location.rs)
/// - Camera section with photo preview (camera.rs)
/// - Saved-logs list and detail screen (logs.rs)

pub mod camera;
pub mod location;
pub mod logs;
