use std::path::{Path, PathBuf};

use argh::FromArgs;
use log::LevelFilter;

/// Build step runner
#[derive(FromArgs, Debug)]
pub struct Arguments {
    /// module root (defaults to the current directory)
    #[argh(option)]
    module_root: Option<PathBuf>,

    /// config file name, relative to the module root
    #[argh(option, default = "String::from(\"config.toml\")")]
    config: String,

    /// log level filter
    #[argh(option, default = "LevelFilter::Debug")]
    log_level: LevelFilter,
}

impl Arguments {
    pub fn module_root(&self) -> Option<&Path> {
        self.module_root.as_deref()
    }

    pub fn config(&self) -> &str {
        &self.config
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}
