use iced::widget::image::Handle;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};

/// Bounding box for gallery card thumbnails (aspect ratio preserved)
const THUMBNAIL_WIDTH: u32 = 640;
const THUMBNAIL_HEIGHT: u32 = 420;

/// Resolve an image or download reference against the site document's
/// directory. Remote references are passed through to the browser for
/// links but cannot be decoded locally, so they resolve to `None` here.
pub fn resolve_asset(base_dir: &Path, reference: &str) -> Option<PathBuf> {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return None;
    }
    let path = Path::new(reference);
    if path.is_absolute() {
        Some(path.to_path_buf())
    } else {
        Some(base_dir.join(path))
    }
}

/// Decode and downscale one card's cover image.
///
/// Runs as a background task per card; the card keeps its accent
/// placeholder until the handle arrives. Decode failures are logged and
/// leave the placeholder in place.
pub async fn generate(index: usize, path: PathBuf) -> (usize, Option<Handle>) {
    let handle = tokio::task::spawn_blocking(move || decode_thumbnail(&path))
        .await
        .unwrap_or_default();
    (index, handle)
}

fn decode_thumbnail(path: &Path) -> Option<Handle> {
    let img = match image::open(path) {
        Ok(img) => img,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "thumbnail decode failed");
            return None;
        }
    };

    let thumb = img.resize(THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT, FilterType::Triangle);
    let rgba = thumb.to_rgba8();
    let (width, height) = rgba.dimensions();
    Some(Handle::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_reference_joins_base_dir() {
        let resolved = resolve_asset(Path::new("/site/data"), "assets/p1.png");
        assert_eq!(resolved, Some(PathBuf::from("/site/data/assets/p1.png")));
    }

    #[test]
    fn test_absolute_reference_is_kept() {
        let resolved = resolve_asset(Path::new("/site/data"), "/tmp/p1.png");
        assert_eq!(resolved, Some(PathBuf::from("/tmp/p1.png")));
    }

    #[test]
    fn test_remote_reference_is_not_resolved() {
        assert_eq!(
            resolve_asset(Path::new("/site/data"), "https://example.com/p.png"),
            None
        );
    }
}
