use std::path::{Path, PathBuf};

use crate::config::BuildConfig;

///
/// Per-module state handed to each build step. Steps get shared access only;
/// the pipeline is the single writer of the configuration.
///
#[derive(Debug)]
pub struct BuildContext {
    module_root: PathBuf,
    config: BuildConfig,
}

impl BuildContext {
    pub fn new<P>(module_root: P, config: BuildConfig) -> Self
    where
        P: Into<PathBuf>,
    {
        BuildContext {
            module_root: module_root.into(),
            config,
        }
    }

    pub fn module_root(&self) -> &Path {
        &self.module_root
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub(crate) fn config_mut(&mut self) -> &mut BuildConfig {
        &mut self.config
    }
}
