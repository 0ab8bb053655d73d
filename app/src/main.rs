use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::info;

use bf_common::config::read_config;
use bf_common::{BuildConfig, BuildContext, Pipeline};

use crate::arguments::Arguments;
use crate::steps::shader_compile::ShaderCompileStep;
use crate::steps::toolchain::NativeToolchainDetector;

mod app_logger;
mod arguments;
mod steps;

const PHASES: [&str; 3] = ["gen", "compile", "link"];

fn main() -> anyhow::Result<()> {
    let args: Arguments = argh::from_env();
    app_logger::init(args.log_level())?;
    info!("Begin initialization...");

    let module_root = match args.module_root() {
        Some(path) => path.to_path_buf(),
        None => env::current_dir().context("unable to get current directory")?,
    };
    let config = load_config(&module_root, args.config())?;
    info!("Loaded config: {config:?}");

    let mut pipeline = Pipeline::new(&PHASES);
    pipeline.add_step(Box::new(ShaderCompileStep))?;
    pipeline.add_step(Box::new(NativeToolchainDetector))?;

    let mut ctx = BuildContext::new(module_root, config);
    pipeline.run(&mut ctx)?;
    info!("Resulting cxx section: {:?}", ctx.config().cxx);
    Ok(())
}

fn load_config(root: &Path, name: &str) -> anyhow::Result<BuildConfig> {
    let path: PathBuf = root.join(name);
    if !path.exists() {
        info!("No {path:?}, using defaults.");
        return Ok(BuildConfig::default());
    }
    let mut file = File::open(&path).with_context(|| format!("unable to open {path:?}"))?;
    Ok(read_config(&mut file)?)
}
