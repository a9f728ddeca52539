//! The icon compositor: portrait under frame, then three shadowed elements
//! (champion name, gold icon, cost number) on top.

mod shadow;
mod text;

use std::path::Path;

use anyhow::{anyhow, Result};
use fs_err as fs;
use image::{
    imageops::{self, FilterType},
    Rgba, RgbaImage,
};
use rusttype::Font;

pub use self::shadow::{shadow_layer, silhouette};

/// Layout constants for the shop icon. One theme, named fields, so an
/// alternate resolution or skin is a data change rather than a code change.
#[derive(Debug, Clone)]
pub struct Theme {
    pub title_font_size: f32,
    pub cost_font_size: f32,
    /// Top-left corner of the champion name.
    pub name_x: i64,
    pub name_y: i64,
    /// Top-left corner of the gold icon.
    pub gold_x: i64,
    pub gold_y: i64,
    /// The cost number sits slightly lower than the gold icon.
    pub cost_text_nudge_y: i64,
    /// Square edge the gold icon is resized to, in pixels.
    pub gold_size: u32,
    /// Gap between the gold icon and the cost number.
    pub gold_text_gap: i64,
    pub shadow_offset: (i64, i64),
    pub shadow_color: Rgba<u8>,
    pub text_color: Rgba<u8>,
    pub blur_radius: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title_font_size: 18.0,
            cost_font_size: 18.0,
            name_x: 10,
            name_y: 136,
            gold_x: 177,
            gold_y: 134,
            cost_text_nudge_y: 2,
            gold_size: 15,
            gold_text_gap: 5,
            shadow_offset: (1, 1),
            shadow_color: Rgba([0, 0, 0, 255]),
            text_color: Rgba([255, 255, 255, 255]),
            blur_radius: 2.0,
        }
    }
}

/// Loads an image file and converts it to RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let bytes = fs::read(path)?;
    Ok(image::load_from_memory(&bytes)?.to_rgba8())
}

/// Holds the assets shared by every icon: the font and the pre-resized gold
/// icon. Missing either one is fatal before any champion is processed.
pub struct Compositor {
    theme: Theme,
    font: Font<'static>,
    gold_icon: RgbaImage,
}

impl Compositor {
    pub fn new(assets_dir: &Path, theme: Theme) -> Result<Self> {
        let font_path = assets_dir.join("font.ttf");
        let font_bytes = fs::read(&font_path)?;
        let font = Font::try_from_vec(font_bytes)
            .ok_or_else(|| anyhow!("{} is not a usable TrueType font", font_path.display()))?;

        let gold = load_rgba(&assets_dir.join("gold.png"))?;

        Ok(Self::with_assets(theme, font, gold))
    }

    /// Builds a compositor from already-loaded assets. The gold icon is
    /// resized here, once, to the theme's square size.
    pub fn with_assets(theme: Theme, font: Font<'static>, gold: RgbaImage) -> Self {
        let gold_icon =
            imageops::resize(&gold, theme.gold_size, theme.gold_size, FilterType::Lanczos3);

        Self {
            theme,
            font,
            gold_icon,
        }
    }

    /// Renders one finished shop icon. The output always has exactly the
    /// frame's dimensions; the portrait is stretched to fit without preserving
    /// its aspect ratio.
    pub fn compose(
        &self,
        name: &str,
        tier: u32,
        portrait: &RgbaImage,
        frame: &RgbaImage,
    ) -> RgbaImage {
        let theme = &self.theme;
        let (width, height) = frame.dimensions();

        let portrait = imageops::resize(portrait, width, height, FilterType::Lanczos3);

        let mut canvas = RgbaImage::new(width, height);
        imageops::overlay(&mut canvas, &portrait, 0, 0);
        imageops::overlay(&mut canvas, frame, 0, 0);

        // Champion name.
        let mut name_layer = RgbaImage::new(width, height);
        text::draw_text(
            &mut name_layer,
            &self.font,
            theme.title_font_size,
            theme.name_x,
            theme.name_y,
            theme.text_color,
            name,
        );
        self.composite_with_shadow(&mut canvas, &name_layer);

        // Gold icon.
        let mut icon_layer = RgbaImage::new(width, height);
        imageops::overlay(&mut icon_layer, &self.gold_icon, theme.gold_x, theme.gold_y);
        self.composite_with_shadow(&mut canvas, &icon_layer);

        // Cost number, to the right of the gold icon.
        let cost_x = theme.gold_x + theme.gold_size as i64 + theme.gold_text_gap;
        let cost_y = theme.gold_y + theme.cost_text_nudge_y;

        let mut cost_layer = RgbaImage::new(width, height);
        text::draw_text(
            &mut cost_layer,
            &self.font,
            theme.cost_font_size,
            cost_x,
            cost_y,
            theme.text_color,
            &tier.to_string(),
        );
        self.composite_with_shadow(&mut canvas, &cost_layer);

        canvas
    }

    /// Shadow first, sharp element second. The order is what makes the shadow
    /// read as sitting underneath the element.
    fn composite_with_shadow(&self, canvas: &mut RgbaImage, element: &RgbaImage) {
        let theme = &self.theme;
        let shadow = shadow_layer(
            element,
            theme.shadow_color,
            theme.shadow_offset,
            theme.blur_radius,
        );

        imageops::overlay(canvas, &shadow, 0, 0);
        imageops::overlay(canvas, element, 0, 0);
    }
}
