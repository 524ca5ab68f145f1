//! CLI definitions and command dispatch.

use std::path::{Path, PathBuf, absolute};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;

use fontface_core::{FaceConfig, FacePipeline};

#[derive(Parser)]
#[command(name = "fontface", version)]
#[command(about = "Embed font files in @font-face stylesheets and concatenate them back")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct FaceOptions {
    /// Worker threads for reading and writing files
    #[arg(short, long)]
    pub jobs: Option<usize>,
    /// Font file extension to embed, repeatable [default: ttf otf eot woff woff2 svg]
    #[arg(short = 'e', long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,
}

impl FaceOptions {
    pub fn config(&self) -> FaceConfig {
        let mut config = FaceConfig::default();
        if !self.extensions.is_empty() {
            config = config.with_extensions(&self.extensions);
        }
        if let Some(jobs) = self.jobs {
            config = config.with_jobs(jobs);
        }
        config
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write one CSS file per font family found in a directory
    MakeFace {
        /// The directory from which to read the font files
        #[arg(short, long, value_name = "DIRECTORY")]
        from_directory: PathBuf,
        /// The directory in which to write the CSS files
        #[arg(short, long, value_name = "DIRECTORY")]
        to_directory: PathBuf,
        #[command(flatten)]
        options: FaceOptions,
    },
    /// Concatenate the CSS files in a directory into one file
    ReadFace {
        /// The directory from which to read the CSS files
        #[arg(short, long, value_name = "DIRECTORY")]
        from_directory: PathBuf,
        /// The CSS file in which to write the concatenated CSS files
        #[arg(short, long, value_name = "FILE")]
        to_file: PathBuf,
        #[command(flatten)]
        options: FaceOptions,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::MakeFace { from_directory, to_directory, options } => {
                let origin = resolve(&from_directory)?;
                let destination = resolve(&to_directory)?;
                let written = FacePipeline::new(options.config())
                    .make_face(&origin, &destination)
                    .with_context(|| format!("Failed to make faces from {}", origin.display()))?;
                println!("Wrote {} stylesheets to {}", written.len(), destination.display());
            }
            Commands::ReadFace { from_directory, to_file, options } => {
                let origin = resolve(&from_directory)?;
                let to_file = resolve(&to_file)?;
                let output = FacePipeline::new(options.config())
                    .read_face(&origin, &to_file)
                    .with_context(|| format!("Failed to read faces from {}", origin.display()))?;
                println!("Wrote {} ({} bytes)", output.path().display(), output.data().len());
            }
        }
        Ok(())
    }
}

/// Make `path` absolute so generated headers name full source paths.
fn resolve(path: &Path) -> Result<PathBuf> {
    let resolved =
        absolute(path).with_context(|| format!("Invalid path: {}", path.display()))?;
    debug!("Resolved {} to {}", path.display(), resolved.display());
    Ok(resolved)
}
