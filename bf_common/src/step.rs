use std::process::ExitStatus;

use thiserror::Error;

use crate::context::BuildContext;

#[derive(Debug, Error)]
pub enum StepError {
    #[error("unable to spawn {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("{command} exited with {status}")]
    CommandFailed { command: String, status: ExitStatus },
    #[error("unknown phase: {0}")]
    UnknownPhase(String),
    #[error("step {0} declares no ordering constraint")]
    Unordered(String),
}

///
/// A single build step. Steps are stateless leaves: they read the context
/// and report what the pipeline should append to the cxx section.
///
pub trait BuildStep {
    fn name(&self) -> &str;

    /// Phase names this step must run before.
    fn before(&self) -> &[&str];

    fn run(&self, ctx: &BuildContext) -> Result<StepOutput, StepError>;
}

/// Flags a step wants appended to [crate::CxxConfig]. Never deduplicated.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CxxAdditions {
    pub flags: Vec<String>,
    pub header_dirs: Vec<String>,
    pub link_flags: Vec<String>,
}

impl CxxAdditions {
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty() && self.header_dirs.is_empty() && self.link_flags.is_empty()
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct StepOutput {
    pub cxx: CxxAdditions,
}

impl StepOutput {
    /// For steps whose effect is outside the configuration (files on disk).
    pub fn none() -> Self {
        StepOutput::default()
    }
}
