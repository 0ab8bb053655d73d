use bf_common::{BuildContext, BuildStep, CxxAdditions, StepError, StepOutput};

///
/// Derives cxx header-search and linker flags from the optional SDL2 and
/// Vulkan SDK sections of the module configuration.
///
pub(crate) struct NativeToolchainDetector;

impl BuildStep for NativeToolchainDetector {
    fn name(&self) -> &str {
        "native-toolchain"
    }

    fn before(&self) -> &[&str] {
        &["gen"]
    }

    fn run(&self, ctx: &BuildContext) -> Result<StepOutput, StepError> {
        let config = ctx.config();
        // Vulkan flags are only derived for modules that also configure SDL2.
        let Some(sdl2) = &config.sdl2 else {
            return Ok(StepOutput::none());
        };
        let mut cxx = CxxAdditions::default();
        if let Some(lib) = &sdl2.lib {
            cxx.link_flags.push(format!("-L{lib}"));
            cxx.link_flags.push("-lsdl2".to_string());
        }
        if let Some(include) = &sdl2.include {
            cxx.header_dirs.push(include.clone());
        }
        if let Some(sdk) = config.vulkan.as_ref().and_then(|v| v.sdk_path.as_deref()) {
            cxx.header_dirs.push(format!("{sdk}/macOS/include"));
            cxx.link_flags.push(format!("-L{sdk}/macOS/lib"));
            cxx.link_flags.push("-lvulkan".to_string());
        }
        Ok(StepOutput { cxx })
    }
}
