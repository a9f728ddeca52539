mod generate;
mod latest_version;

use clap::Subcommand;
pub use generate::*;
pub use latest_version::*;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the newest TFT set's champions from Data Dragon and render one
    /// framed shop icon per champion into the output directory.
    Generate(GenerateOptions),

    /// Resolve and print the newest Data Dragon version, without rendering
    /// anything.
    LatestVersion(LatestVersionOptions),
}
