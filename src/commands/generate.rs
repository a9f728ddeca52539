use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use fs_err as fs;
use image::{codecs::png::PngEncoder, ColorType, ImageEncoder};
use log::{info, warn};

use crate::cache::{AssetCache, DirCache};
use crate::ddragon::{DdragonClient, HttpClient};
use crate::options::Global;
use crate::render::{self, Compositor, Theme};
use crate::sets;

#[derive(Debug, Args)]
pub struct GenerateOptions {
    /// A directory of static assets: font.ttf, gold.png, and one
    /// "<tier>cost.png" frame per cost tier.
    #[clap(long = "assets-dir", default_value = "assets")]
    pub assets_dir: PathBuf,

    /// A directory used to cache downloaded champion portraits between runs.
    #[clap(long = "cache-dir", default_value = "temp_images")]
    pub cache_dir: PathBuf,

    /// A directory to put the finished shop icons.
    #[clap(long = "output-dir", default_value = "generated_shop_icons")]
    pub output_dir: PathBuf,
}

pub async fn generate(_: Global, options: GenerateOptions) -> Result<()> {
    let client = HttpClient::new();
    run_generate(&client, options).await
}

async fn run_generate(client: &dyn DdragonClient, options: GenerateOptions) -> Result<()> {
    let version = client.latest_version().await?;
    info!("using Data Dragon version {}", version);

    let catalog = client.champion_catalog(&version).await?;

    let Some((newest_set, members)) = sets::newest_set_members(&catalog) else {
        warn!("No recognizable TFTSet<number> patterns found in champion ids; nothing to do.");
        return Ok(());
    };

    info!(
        "newest set is {}, with {} champions in scope",
        newest_set,
        members.len()
    );

    // Font and gold icon are required up front; a missing per-tier frame is
    // only a per-champion skip further down.
    let compositor = Compositor::new(&options.assets_dir, Theme::default())?;
    let cache = DirCache::open(&options.cache_dir)?;
    fs::create_dir_all(&options.output_dir)?;

    for (id, champion) in members {
        let portrait_path = match cache.lookup(&champion.image.full) {
            Some(path) => path,
            None => {
                let bytes = client
                    .download_portrait(&version, &champion.image.full)
                    .await?;
                cache.store(&champion.image.full, &bytes)?
            }
        };

        let frame_path = options.assets_dir.join(format!("{}cost.png", champion.tier));
        if !frame_path.is_file() {
            warn!(
                "Frame for cost {} does not exist. Skipping {}.",
                champion.tier, id
            );
            continue;
        }

        let portrait = render::load_rgba(&portrait_path)?;
        let frame = render::load_rgba(&frame_path)?;

        let icon = compositor.compose(&champion.name, champion.tier, &portrait, &frame);

        let mut encoded: Vec<u8> = Vec::new();
        PngEncoder::new(&mut encoded).write_image(
            icon.as_raw(),
            icon.width(),
            icon.height(),
            ColorType::Rgba8,
        )?;

        let output_path = options
            .output_dir
            .join(output_filename(&champion.name, champion.tier));
        fs::write(&output_path, encoded)?;

        info!("Saved {}", output_path.display());
    }

    Ok(())
}

/// Output files are named `<tier>_<Name>.png`, with spaces in the champion
/// name replaced by underscores.
fn output_filename(name: &str, tier: u32) -> String {
    format!("{}_{}.png", tier, name.replace(' ', "_"))
}
