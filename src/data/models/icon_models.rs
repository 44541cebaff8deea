use std::path::PathBuf;
use thiserror::Error;

pub const ICON_SIZES: [u32; 2] = [192, 512];
pub const ICON_GLYPH: char = '闪';
pub const ICON_BLUE: [u8; 4] = [0x4A, 0x90, 0xD9, 0xFF];
pub const ICON_WHITE: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];

/// Pixel geometry of one icon, all lengths truncated like the canvas maths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconLayout {
    pub size: u32,
    pub background_radius: u32,
    pub card_left: u32,
    pub card_top: u32,
    pub card_width: u32,
    pub card_height: u32,
    pub card_radius: u32,
    pub font_px: u32,
}

impl IconLayout {
    pub fn for_size(size: u32) -> Self {
        let s = size as f32;
        let margin = (s * 0.2) as u32;
        let card_width = size - margin * 2;
        let card_height = (card_width as f32 * 0.7) as u32;

        Self {
            size,
            background_radius: (s * 0.18) as u32,
            card_left: margin,
            card_top: (size - card_height) / 2,
            card_width,
            card_height,
            card_radius: (s * 0.05) as u32,
            font_px: (s * 0.3) as u32,
        }
    }
}

#[derive(Error, Debug)]
pub enum IconError {
    #[error("Failed to read font {path}: {source}")]
    FontRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Unsupported font file {0}")]
    FontParse(PathBuf),
    #[error("Failed to write {path}: {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
}
