pub use config::BuildConfig;
pub use config::ConfigError;
pub use config::CxxConfig;
pub use config::Sdl2Config;
pub use config::VulkanConfig;
pub use context::BuildContext;
pub use pipeline::Pipeline;
pub use step::BuildStep;
pub use step::CxxAdditions;
pub use step::StepError;
pub use step::StepOutput;

pub mod config;
pub mod context;
pub mod pipeline;
pub mod step;
