use clap::Parser;
use std::path::PathBuf;

use crate::config::{CatalogKind, Config};

#[derive(Debug, Parser)]
#[command(name = "favmoji", version, about = "Search emoji by name and keep a list of favorites")]
pub struct Cli {
    /// Config file (default: ~/.config/favmoji/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Load the catalog from a JSON file of {"name": "imageRef"}
    #[arg(long, value_name = "PATH", conflicts_with = "catalog_url")]
    pub catalog_file: Option<PathBuf>,

    /// Fetch the catalog from a URL returning {"name": "imageRef"}
    #[arg(long, value_name = "URL")]
    pub catalog_url: Option<String>,

    /// Favorites storage file
    #[arg(long, value_name = "PATH")]
    pub favorites_file: Option<PathBuf>,

    /// Log file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the list markup for QUERY and exit (empty QUERY shows favorites)
    #[arg(long, value_name = "QUERY")]
    pub render: Option<String>,
}

impl Cli {
    /// Overlay command-line flags on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.catalog_file {
            config.catalog.source = CatalogKind::File;
            config.catalog.path = Some(path.clone());
        }
        if let Some(url) = &self.catalog_url {
            config.catalog.source = CatalogKind::Remote;
            config.catalog.url = url.clone();
        }
        if let Some(path) = &self.favorites_file {
            config.storage.path = Some(path.clone());
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
    }
}
