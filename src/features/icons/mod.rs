pub mod render;

use ab_glyph::FontVec;
use image::ImageFormat;
use std::fs;
use std::path::{Path, PathBuf};

pub use render::render_icon;

use crate::config::IconConfig;
use crate::data::models::IconError;
use crate::data::models::icon_models::ICON_SIZES;

/// Parses a TrueType/OpenType file, or the first face of a collection.
pub fn load_font_file(path: &Path) -> Result<FontVec, IconError> {
    let data = fs::read(path).map_err(|source| IconError::FontRead {
        path: path.to_path_buf(),
        source,
    })?;
    FontVec::try_from_vec_and_index(data, 0).map_err(|_| IconError::FontParse(path.to_path_buf()))
}

/// First candidate that exists and parses.
pub fn find_font(candidates: &[PathBuf]) -> Option<FontVec> {
    for path in candidates.iter().filter(|p| p.exists()) {
        match load_font_file(path) {
            Ok(font) => {
                log::info!("Using font {}", path.display());
                return Some(font);
            }
            Err(e) => log::warn!("{}", e),
        }
    }
    None
}

/// Writes `icon-<size>.png` for every PWA icon size into `out_dir`.
pub fn generate_icons(config: &IconConfig) -> Result<Vec<PathBuf>, IconError> {
    let font = find_font(&config.font_candidates);
    let mut written = Vec::with_capacity(ICON_SIZES.len());

    for size in ICON_SIZES {
        let path = config.out_dir.join(format!("icon-{}.png", size));
        render_icon(size, font.as_ref())
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|source| IconError::Encode {
                path: path.clone(),
                source,
            })?;
        log::info!("Generated {} ({}x{})", path.display(), size, size);
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_both_sizes_without_a_font() {
        let dir = tempfile::tempdir().unwrap();
        let config = IconConfig {
            out_dir: dir.path().to_path_buf(),
            font_candidates: vec![dir.path().join("missing.ttf")],
        };

        let written = generate_icons(&config).unwrap();
        assert_eq!(written.len(), 2);

        let small = image::open(dir.path().join("icon-192.png")).unwrap();
        assert_eq!((small.width(), small.height()), (192, 192));
        let large = image::open(dir.path().join("icon-512.png")).unwrap();
        assert_eq!((large.width(), large.height()), (512, 512));
    }

    #[test]
    fn garbage_font_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.ttf");
        fs::write(&bogus, b"not a font").unwrap();

        assert!(matches!(load_font_file(&bogus), Err(IconError::FontParse(_))));
        assert!(find_font(&[bogus]).is_none());
    }

    #[test]
    fn unwritable_output_is_an_encode_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = IconConfig {
            out_dir: dir.path().join("does/not/exist"),
            font_candidates: Vec::new(),
        };
        assert!(matches!(generate_icons(&config), Err(IconError::Encode { .. })));
    }
}
