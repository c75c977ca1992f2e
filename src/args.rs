//! Command line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "colorpage")]
#[command(about = "Turn your ideas into black-and-white coloring pages")]
#[command(version)]
pub struct Cli {
    /// Path to the config file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the generation model from the config
    #[arg(long, value_name = "NAME")]
    pub model: Option<String>,

    /// Directory used by the "save" share target
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Pre-fill the prompt editor
    #[arg(long, value_name = "TEXT")]
    pub prompt: Option<String>,
}

impl Cli {
    /// Path of the config file to load.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply command line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(model) = &self.model {
            config.generation.model = model.clone();
        }
        if let Some(dir) = &self.export_dir {
            config.share.export_dir = Some(dir.clone());
        }
    }
}
