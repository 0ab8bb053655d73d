use std::io::Read;

use serde::Deserialize;
use thiserror::Error;

use crate::step::CxxAdditions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Malformed(String),
}

///
/// Per-module build configuration. Optional SDK sections are simply absent
/// when the module does not use them.
///
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct BuildConfig {
    #[serde(default)]
    pub cxx: CxxConfig,
    pub sdl2: Option<Sdl2Config>,
    pub vulkan: Option<VulkanConfig>,
}

/// Native compiler and linker invocation flags. Duplicates are permitted,
/// order is preserved.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct CxxConfig {
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub header_dirs: Vec<String>,
    #[serde(default)]
    pub link_flags: Vec<String>,
}

impl CxxConfig {
    /// Appends [additions] to this section, keeping their order.
    pub fn apply(&mut self, additions: CxxAdditions) {
        self.flags.extend(additions.flags);
        self.header_dirs.extend(additions.header_dirs);
        self.link_flags.extend(additions.link_flags);
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sdl2Config {
    pub lib: Option<String>,
    pub include: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VulkanConfig {
    #[serde(rename = "sdkPath")]
    pub sdk_path: Option<String>,
}

pub fn read_config<R>(reader: &mut R) -> Result<BuildConfig, ConfigError>
where
    R: Read,
{
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    toml::from_str::<BuildConfig>(&buf).map_err(|e| ConfigError::Malformed(e.to_string()))
}

#[cfg(test)]
mod test {
    use crate::config::read_config;
    use crate::step::CxxAdditions;

    #[test]
    fn full_config() {
        let mut src = r#"
            [cxx]
            flags = ["-O2"]
            header_dirs = ["/usr/include"]
            link_flags = ["-lm"]

            [sdl2]
            lib = "/opt/sdl2/lib"
            include = "/opt/sdl2/include"

            [vulkan]
            sdkPath = "/opt/vulkan"
        "#
        .as_bytes();
        let cfg = read_config(&mut src).unwrap();
        assert_eq!(cfg.cxx.flags, vec!["-O2"]);
        assert_eq!(cfg.cxx.header_dirs, vec!["/usr/include"]);
        assert_eq!(cfg.cxx.link_flags, vec!["-lm"]);
        let sdl2 = cfg.sdl2.unwrap();
        assert_eq!(sdl2.lib.as_deref(), Some("/opt/sdl2/lib"));
        assert_eq!(sdl2.include.as_deref(), Some("/opt/sdl2/include"));
        assert_eq!(cfg.vulkan.unwrap().sdk_path.as_deref(), Some("/opt/vulkan"));
    }

    #[test]
    fn empty_config() {
        let mut src = "".as_bytes();
        let cfg = read_config(&mut src).unwrap();
        assert!(cfg.cxx.flags.is_empty());
        assert!(cfg.cxx.header_dirs.is_empty());
        assert!(cfg.cxx.link_flags.is_empty());
        assert!(cfg.sdl2.is_none());
        assert!(cfg.vulkan.is_none());
    }

    #[test]
    fn partial_sections() {
        let mut src = r#"
            [sdl2]
            lib = "/l"

            [vulkan]
        "#
        .as_bytes();
        let cfg = read_config(&mut src).unwrap();
        let sdl2 = cfg.sdl2.unwrap();
        assert_eq!(sdl2.lib.as_deref(), Some("/l"));
        assert!(sdl2.include.is_none());
        assert!(cfg.vulkan.unwrap().sdk_path.is_none());
    }

    #[test]
    fn malformed_config() {
        let mut src = "[cxx".as_bytes();
        assert!(read_config(&mut src).is_err());
    }

    #[test]
    fn apply_keeps_order_and_duplicates() {
        let mut src = r#"
            [cxx]
            link_flags = ["-lm"]
        "#
        .as_bytes();
        let mut cfg = read_config(&mut src).unwrap();
        let additions = CxxAdditions {
            flags: vec![],
            header_dirs: vec!["/i".to_string()],
            link_flags: vec!["-lm".to_string(), "-lsdl2".to_string()],
        };
        cfg.cxx.apply(additions.clone());
        cfg.cxx.apply(additions);
        assert_eq!(cfg.cxx.header_dirs, vec!["/i", "/i"]);
        assert_eq!(cfg.cxx.link_flags, vec!["-lm", "-lm", "-lsdl2", "-lm", "-lsdl2"]);
    }
}
