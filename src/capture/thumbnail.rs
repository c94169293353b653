use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::GenericImageView;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::Utc;

use super::CaptureOptions;

/// Size of generated thumbnails (longest edge)
const THUMBNAIL_SIZE: u32 = 256;

/// Get the thumbnail cache directory
/// Returns ~/.cache/geolog/thumbnails on Linux
pub fn get_thumbnail_cache_dir() -> Option<PathBuf> {
    let mut path = dirs_next::cache_dir().or_else(|| dirs_next::home_dir())?;

    path.push("geolog");
    path.push("thumbnails");

    fs::create_dir_all(&path).ok()?;

    Some(path)
}

/// Generate a thumbnail for a captured photo
///
/// The image is cropped to the requested aspect ratio (when editing is
/// allowed), resized, and written to the cache directory as a JPEG at the
/// requested quality. Returns the path to the saved thumbnail, or None if
/// any step failed. A missing thumbnail never blocks the capture itself.
pub fn generate_thumbnail(photo_path: &Path, options: &CaptureOptions) -> Option<PathBuf> {
    let img = image::open(photo_path).ok()?;

    let img = if options.allow_editing {
        let (img_width, img_height) = img.dimensions();
        let (x, y, width, height) = aspect_crop_box(img_width, img_height, options.aspect);
        img.crop_imm(x, y, width, height)
    } else {
        img
    };

    let thumbnail = img.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3);

    let cache_dir = get_thumbnail_cache_dir()?;
    let stem = photo_path.file_stem()?.to_string_lossy().to_string();
    let thumbnail_path = cache_dir.join(format!(
        "{}-{}.jpg",
        Utc::now().timestamp_millis(),
        stem
    ));

    let mut out = File::create(&thumbnail_path).ok()?;
    let encoder = JpegEncoder::new_with_quality(&mut out, options.quality);
    thumbnail.to_rgb8().write_with_encoder(encoder).ok()?;

    println!("📸 Cached thumbnail: {}", thumbnail_path.display());
    Some(thumbnail_path)
}

/// Compute the centered crop box that trims `width` x `height` down to
/// `aspect`. Returns (x, y, crop_width, crop_height). A degenerate aspect
/// leaves the image untouched.
fn aspect_crop_box(width: u32, height: u32, aspect: (u32, u32)) -> (u32, u32, u32, u32) {
    let (aspect_w, aspect_h) = aspect;
    if aspect_w == 0 || aspect_h == 0 || width == 0 || height == 0 {
        return (0, 0, width, height);
    }

    let target_width = (height as u64 * aspect_w as u64 / aspect_h as u64) as u32;
    if target_width <= width {
        // Image is wider than the target aspect: trim the sides
        let x = (width - target_width) / 2;
        (x, 0, target_width, height)
    } else {
        // Image is taller than the target aspect: trim top and bottom
        let target_height = (width as u64 * aspect_h as u64 / aspect_w as u64) as u32;
        let y = (height - target_height) / 2;
        (0, y, width, target_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_box_trims_sides_of_wide_image() {
        // 1000x300 cropped to 4:3 keeps full height, 400 wide, centered
        assert_eq!(aspect_crop_box(1000, 300, (4, 3)), (300, 0, 400, 300));
    }

    #[test]
    fn test_crop_box_trims_top_and_bottom_of_tall_image() {
        // 400x1000 cropped to 4:3 keeps full width, 300 tall, centered
        assert_eq!(aspect_crop_box(400, 1000, (4, 3)), (0, 350, 400, 300));
    }

    #[test]
    fn test_crop_box_leaves_matching_aspect_untouched() {
        assert_eq!(aspect_crop_box(800, 600, (4, 3)), (0, 0, 800, 600));
    }

    #[test]
    fn test_crop_box_tolerates_degenerate_aspect() {
        assert_eq!(aspect_crop_box(800, 600, (0, 3)), (0, 0, 800, 600));
    }
}
