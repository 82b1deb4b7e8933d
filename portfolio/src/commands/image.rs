use std::{io::Write, path::PathBuf};

use anyhow::Context;
use clap::Subcommand;
use portfolio_config::Config;
use portfolio_shared_contracts::image::ImageService;

use crate::environment::image_service;

#[derive(Debug, Subcommand)]
pub enum ImageCommand {
    /// Scale down an image and print it as a JPEG data URL
    #[command(aliases(["n"]))]
    Normalize {
        /// The image file
        file: PathBuf,
    },
}

impl ImageCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            ImageCommand::Normalize { file } => {
                let data = tokio::fs::read(&file)
                    .await
                    .with_context(|| format!("Failed to read {}", file.display()))?;
                let image = image_service(&config.image).normalize(data).await?;
                writeln!(std::io::stdout().lock(), "{}", image.as_str())?;
                Ok(())
            }
        }
    }
}
