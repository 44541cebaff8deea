use ab_glyph::{Font, FontVec, PxScale, point};
use image::{Rgba, RgbaImage};

use crate::data::models::IconLayout;
use crate::data::models::icon_models::{ICON_BLUE, ICON_GLYPH, ICON_WHITE};

/// Draws one square icon: blue rounded tile, white card, blue glyph.
///
/// Without a font the glyph is left out. A zero size yields an empty image.
pub fn render_icon(size: u32, font: Option<&FontVec>) -> RgbaImage {
    if size == 0 {
        return RgbaImage::new(0, 0);
    }

    let layout = IconLayout::for_size(size);
    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));

    fill_rounded_rect(
        &mut img,
        (0, 0),
        (size - 1, size - 1),
        layout.background_radius,
        Rgba(ICON_BLUE),
    );
    fill_rounded_rect(
        &mut img,
        (layout.card_left, layout.card_top),
        (
            layout.card_left + layout.card_width,
            layout.card_top + layout.card_height,
        ),
        layout.card_radius,
        Rgba(ICON_WHITE),
    );

    match font {
        Some(font) => {
            if !draw_glyph_centered(&mut img, font, ICON_GLYPH, layout.font_px, ICON_BLUE) {
                log::warn!("Font has no outline for '{}', glyph skipped", ICON_GLYPH);
            }
        }
        None => log::warn!("No CJK font available, {}x{} icon drawn without glyph", size, size),
    }

    img
}

/// Fills the inclusive rectangle `top_left..=bottom_right` with rounded corners.
pub fn fill_rounded_rect(
    img: &mut RgbaImage,
    top_left: (u32, u32),
    bottom_right: (u32, u32),
    radius: u32,
    color: Rgba<u8>,
) {
    let (x0, y0) = (top_left.0 as i64, top_left.1 as i64);
    let (x1, y1) = (
        (bottom_right.0 as i64).min(img.width() as i64 - 1),
        (bottom_right.1 as i64).min(img.height() as i64 - 1),
    );
    if x1 < x0 || y1 < y0 {
        return;
    }

    let r = (radius as i64).min((x1 - x0) / 2).min((y1 - y0) / 2);
    let (inner_x0, inner_x1) = (x0 + r, x1 - r);
    let (inner_y0, inner_y1) = (y0 + r, y1 - r);

    for y in y0..=y1 {
        let dy = (inner_y0 - y).max(y - inner_y1).max(0);
        for x in x0..=x1 {
            let dx = (inner_x0 - x).max(x - inner_x1).max(0);
            if dx * dx + dy * dy <= r * r {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Centres the glyph's ink box on the canvas. Returns false when the font
/// has nothing to draw for `ch`.
fn draw_glyph_centered(img: &mut RgbaImage, font: &FontVec, ch: char, em_px: u32, color: [u8; 4]) -> bool {
    let id = font.glyph_id(ch);
    if id.0 == 0 {
        return false;
    }

    // PxScale is line height; convert from em size
    let em_px = em_px as f32;
    let scale = match font.units_per_em() {
        Some(upem) => PxScale::from(em_px * font.height_unscaled() / upem),
        None => PxScale::from(em_px),
    };

    let Some(outlined) = font.outline_glyph(id.with_scale_and_position(scale, point(0.0, 0.0))) else {
        return false;
    };

    let bounds = outlined.px_bounds();
    let left = ((img.width() as f32 - bounds.width()) / 2.0).floor() as i64;
    let top = ((img.height() as f32 - bounds.height()) / 2.0).floor() as i64;
    let (w, h) = (img.width() as i64, img.height() as i64);

    outlined.draw(|gx, gy, coverage| {
        let (x, y) = (left + gx as i64, top + gy as i64);
        if x < 0 || y < 0 || x >= w || y >= h {
            return;
        }
        let dst = img.get_pixel_mut(x as u32, y as u32);
        *dst = blend(*dst, color, coverage);
    });

    true
}

/// Source-over compositing of `color` at `coverage` onto `dst`.
fn blend(dst: Rgba<u8>, color: [u8; 4], coverage: f32) -> Rgba<u8> {
    let src_a = coverage.clamp(0.0, 1.0) * color[3] as f32 / 255.0;
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let mut out = [0u8; 4];
    for i in 0..3 {
        let c = (color[i] as f32 * src_a + dst[i] as f32 * dst_a * (1.0 - src_a)) / out_a;
        out[i] = c.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round() as u8;
    Rgba(out)
}
