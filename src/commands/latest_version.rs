use anyhow::Result;
use clap::Args;

use crate::ddragon::{DdragonClient, HttpClient};
use crate::options::Global;

#[derive(Debug, Args)]
pub struct LatestVersionOptions {}

/// Prints the newest Data Dragon version to stdout. Useful for checking what
/// a generate run would pin itself to.
pub async fn latest_version(_: Global, _options: LatestVersionOptions) -> Result<()> {
    let client = HttpClient::new();
    let version = client.latest_version().await?;

    println!("{}", version);

    Ok(())
}
