//! Drop shadows built from recolored silhouettes.
//!
//! A shadow is not a blurred copy of the element's pixels: it is the element's
//! alpha channel re-filled with a flat color, shifted, and Gaussian-blurred.
//! The same routine serves the champion name, the gold icon, and the cost
//! number; callers composite the result *under* the crisp element.

use image::{imageops, Rgba, RgbaImage};

/// Flattens `source` to a single color, keeping its alpha channel intact.
pub fn silhouette(source: &RgbaImage, fill: Rgba<u8>) -> RgbaImage {
    let mut out = RgbaImage::new(source.width(), source.height());

    for (x, y, pixel) in source.enumerate_pixels() {
        let alpha = pixel[3];
        if alpha > 0 {
            out.put_pixel(x, y, Rgba([fill[0], fill[1], fill[2], alpha]));
        }
    }

    out
}

/// Builds a shadow layer the same size as `source`: the silhouette of
/// `source`, shifted by `offset`, then blurred. Composite this into the canvas
/// before drawing the sharp element at its nominal position.
pub fn shadow_layer(
    source: &RgbaImage,
    fill: Rgba<u8>,
    offset: (i64, i64),
    blur_radius: f32,
) -> RgbaImage {
    let mut layer = RgbaImage::new(source.width(), source.height());
    let flat = silhouette(source, fill);

    imageops::overlay(&mut layer, &flat, offset.0, offset.1);

    imageops::blur(&layer, blur_radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    #[test]
    fn silhouette_flattens_color_and_keeps_alpha() {
        let mut source = RgbaImage::new(2, 2);
        source.put_pixel(0, 0, Rgba([200, 50, 25, 255]));
        source.put_pixel(1, 0, Rgba([10, 240, 90, 128]));
        // (0, 1) and (1, 1) stay fully transparent.

        let flat = silhouette(&source, BLACK);

        assert_eq!(*flat.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(*flat.get_pixel(1, 0), Rgba([0, 0, 0, 128]));
        assert_eq!(flat.get_pixel(0, 1)[3], 0);
        assert_eq!(flat.get_pixel(1, 1)[3], 0);
    }

    #[test]
    fn shadow_is_offset_from_the_source() {
        let mut source = RgbaImage::new(7, 7);
        source.put_pixel(2, 2, Rgba([255, 255, 255, 255]));

        let shadow = shadow_layer(&source, BLACK, (1, 1), 0.5);

        let (mut best, mut best_alpha) = ((0, 0), 0u8);
        for (x, y, pixel) in shadow.enumerate_pixels() {
            if pixel[3] > best_alpha {
                best = (x, y);
                best_alpha = pixel[3];
            }
        }

        assert_eq!(best, (3, 3));
        assert!(best_alpha > 0);
    }

    #[test]
    fn empty_source_casts_no_shadow() {
        let source = RgbaImage::new(8, 8);
        let shadow = shadow_layer(&source, BLACK, (1, 1), 2.0);

        assert!(shadow.pixels().all(|pixel| pixel[3] == 0));
    }

    #[test]
    fn shadow_layer_matches_source_dimensions() {
        let source = RgbaImage::new(12, 5);
        let shadow = shadow_layer(&source, BLACK, (1, 1), 2.0);

        assert_eq!(shadow.dimensions(), (12, 5));
    }
}
