/// Photo capture capability
///
/// Desktop stand-in for a mobile camera: a consent prompt followed by a
/// native image pick dialog. Closing the dialog is a cancellation, not an
/// error, and emits no value.

use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};
use tokio::task;

use crate::state::data::PhotoReference;

use super::thumbnail;
use super::{CaptureError, CaptureOptions};

/// File types offered by the pick dialog
const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "bmp"];

/// Ask the user for camera access
async fn request_permission() -> bool {
    let answer = AsyncMessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title("Camera Access")
        .set_description("Allow this app to capture photos?")
        .set_buttons(MessageButtons::YesNo)
        .show()
        .await;

    matches!(answer, MessageDialogResult::Yes)
}

/// Capture one photo
///
/// Sequence: consent prompt (skipped when already granted), pick dialog,
/// thumbnail caching. Returns `Ok(None)` when the user cancels the dialog.
pub async fn capture_photo(
    already_granted: bool,
    options: CaptureOptions,
) -> Result<Option<PhotoReference>, CaptureError> {
    if !already_granted && !request_permission().await {
        return Err(CaptureError::PermissionDenied);
    }

    let picked = AsyncFileDialog::new()
        .set_title("Take a Photo")
        .add_filter("Images", &IMAGE_EXTENSIONS)
        .pick_file()
        .await;

    let Some(file) = picked else {
        return Ok(None);
    };
    let path = file.path().to_path_buf();

    // Decode/resize is CPU-bound, keep it off the UI executor
    let photo_path = path.clone();
    let thumbnail =
        task::spawn_blocking(move || thumbnail::generate_thumbnail(&photo_path, &options))
            .await
            .map_err(|e| CaptureError::Failed(format!("thumbnail task: {}", e)))?;

    println!("📷 Captured photo: {}", path.display());

    Ok(Some(PhotoReference { path, thumbnail }))
}
