use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError, RepositorySource};

#[derive(Debug, Parser)]
#[command(name = "moviedeck", version, about = "Browse movies in the terminal")]
pub struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Open the detail screen for this movie id on start.
    #[arg(long, value_name = "ID")]
    pub movie: Option<i64>,

    /// List shown on the home screen (e.g. popular, top_rated).
    #[arg(long, value_name = "NAME")]
    pub category: Option<String>,

    /// Serve movies from this JSON catalog.
    #[arg(long, value_name = "PATH")]
    pub fixtures: Option<PathBuf>,
}

impl Cli {
    /// Path of the config file to load.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Load the config file, apply the overrides and validate the result.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = Config::parse_from(&self.config_path())?;
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(category) = &self.category {
            config.home.category = category.clone();
        }
        if let Some(path) = &self.fixtures {
            config.repository.source = RepositorySource::Fixtures;
            config.repository.fixtures_path = Some(path.clone());
        }
    }
}
