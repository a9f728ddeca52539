//! Glyph rasterization onto transparent RGBA layers.

use image::{Pixel, Rgba, RgbaImage};
use rusttype::{point, Font, Scale};

/// Draws `text` onto `layer` with `(x, y)` as the top-left corner of the line
/// box. Coverage from the rasterizer becomes the alpha of `color`, blended
/// source-over, so drawing onto a transparent layer leaves everything outside
/// the glyphs transparent.
pub fn draw_text(
    layer: &mut RgbaImage,
    font: &Font<'_>,
    size: f32,
    x: i64,
    y: i64,
    color: Rgba<u8>,
    text: &str,
) {
    let scale = Scale::uniform(size);
    let v_metrics = font.v_metrics(scale);
    let origin = point(x as f32, y as f32 + v_metrics.ascent);

    for glyph in font.layout(text, scale, origin) {
        let Some(bounds) = glyph.pixel_bounding_box() else {
            continue;
        };

        glyph.draw(|gx, gy, coverage| {
            let px = gx as i64 + bounds.min.x as i64;
            let py = gy as i64 + bounds.min.y as i64;

            if px < 0 || py < 0 || px >= layer.width() as i64 || py >= layer.height() as i64 {
                return;
            }

            let alpha = (coverage * color[3] as f32).round() as u8;
            if alpha == 0 {
                return;
            }

            layer
                .get_pixel_mut(px as u32, py as u32)
                .blend(&Rgba([color[0], color[1], color[2], alpha]));
        });
    }
}
