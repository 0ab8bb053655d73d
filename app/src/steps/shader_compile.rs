use std::path::{Path, PathBuf};
use std::process::Command;

use log::info;

use bf_common::{BuildContext, BuildStep, StepError, StepOutput};

const COMPILER: &str = "glslangValidator";
const SHADERS: [&str; 2] = ["shader.vert", "shader.frag"];

///
/// Compiles the module's shaders with the Vulkan SDK's glslangValidator,
/// one file at a time. The compiler's own output goes straight to our
/// stdout/stderr.
///
pub(crate) struct ShaderCompileStep;

#[derive(Debug, PartialEq)]
struct Invocation {
    program: PathBuf,
    file: &'static str,
    cwd: PathBuf,
}

impl Invocation {
    fn call(&self) -> Result<(), StepError> {
        info!("{} -V {}", self.program.display(), self.file);
        let status = Command::new(&self.program)
            .arg("-V")
            .arg(self.file)
            .current_dir(&self.cwd)
            .status()
            .map_err(|e| StepError::Spawn {
                command: self.program.display().to_string(),
                source: e,
            })?;
        if !status.success() {
            return Err(StepError::CommandFailed {
                command: format!("{} -V {}", self.program.display(), self.file),
                status,
            });
        }
        Ok(())
    }
}

// Missing vulkan config resolves to a relative path that fails to spawn,
// there is no up-front validation.
fn plan(ctx: &BuildContext) -> [Invocation; 2] {
    let sdk = ctx
        .config()
        .vulkan
        .as_ref()
        .and_then(|v| v.sdk_path.as_deref())
        .unwrap_or("");
    let program = Path::new(sdk).join("macOS/bin").join(COMPILER);
    let cwd = ctx.module_root().join("shaders");
    SHADERS.map(|file| Invocation {
        program: program.clone(),
        file,
        cwd: cwd.clone(),
    })
}

impl BuildStep for ShaderCompileStep {
    fn name(&self) -> &str {
        "shader-compile"
    }

    fn before(&self) -> &[&str] {
        &["gen"]
    }

    fn run(&self, ctx: &BuildContext) -> Result<StepOutput, StepError> {
        for invocation in plan(ctx) {
            invocation.call()?;
        }
        Ok(StepOutput::none())
    }
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use bf_common::{BuildConfig, BuildContext, BuildStep, StepError, VulkanConfig};

    use crate::steps::shader_compile::{plan, ShaderCompileStep};

    fn context(sdk_path: Option<&str>) -> BuildContext {
        let config = BuildConfig {
            vulkan: sdk_path.map(|p| VulkanConfig {
                sdk_path: Some(p.to_string()),
            }),
            ..BuildConfig::default()
        };
        BuildContext::new("/proj", config)
    }

    #[test]
    fn vert_then_frag_from_the_sdk() {
        let invocations = plan(&context(Some("/sdk")));
        assert_eq!(
            invocations[0].program,
            Path::new("/sdk/macOS/bin/glslangValidator")
        );
        assert_eq!(invocations[0].file, "shader.vert");
        assert_eq!(invocations[0].cwd, Path::new("/proj/shaders"));
        assert_eq!(invocations[1].file, "shader.frag");
        assert_eq!(invocations[1].program, invocations[0].program);
        assert_eq!(invocations[1].cwd, invocations[0].cwd);
    }

    #[test]
    fn missing_sdk_path_is_not_validated() {
        let invocations = plan(&context(None));
        assert_eq!(
            invocations[0].program,
            Path::new("macOS/bin/glslangValidator")
        );
    }

    #[test]
    fn spawn_failure_is_fatal() {
        let result = ShaderCompileStep.run(&context(Some("/definitely/not/a/sdk")));
        assert!(matches!(result, Err(StepError::Spawn { .. })));
    }
}
