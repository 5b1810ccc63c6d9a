//! Photo classification by file extension.
//!
//! The pipeline only resizes files it recognizes as raster photos. The
//! check is a pure predicate on the filename — no file is opened, so a
//! file that merely *claims* to be a photo still reaches the resizer,
//! which surfaces its own error for undecodable content.

use std::path::Path;

/// Extensions treated as resizable raster photos.
///
/// Matching is case-insensitive and applies to the final extension only:
/// `Photo.JPG` qualifies, `image.jpeg.bak` does not.
pub const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// Returns true iff the path's extension is a recognized photo extension.
pub fn is_photo(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            PHOTO_EXTENSIONS
                .iter()
                .any(|photo| ext.eq_ignore_ascii_case(photo))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_all_photo_extensions() {
        for ext in PHOTO_EXTENSIONS {
            assert!(is_photo(Path::new(&format!("shot.{ext}"))), "{ext}");
        }
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(is_photo(Path::new("Photo.JPG")));
        assert!(is_photo(Path::new("Photo.Jpeg")));
        assert!(is_photo(Path::new("banner.PNG")));
    }

    #[test]
    fn rejects_non_photo_extensions() {
        assert!(!is_photo(Path::new("notes.txt")));
        assert!(!is_photo(Path::new("clip.mp4")));
        assert!(!is_photo(Path::new("archive.tar.gz")));
    }

    #[test]
    fn only_the_final_extension_counts() {
        assert!(!is_photo(Path::new("image.jpeg.bak")));
        assert!(is_photo(Path::new("backup.txt.jpg")));
    }

    #[test]
    fn rejects_paths_without_extension() {
        assert!(!is_photo(Path::new("README")));
        assert!(!is_photo(Path::new(".hidden")));
    }

    #[test]
    fn full_paths_are_handled() {
        assert!(is_photo(Path::new("/srv/incoming/vacation.png")));
        assert!(!is_photo(Path::new("/srv/incoming/vacation")));
    }
}
