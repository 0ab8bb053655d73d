pub(crate) mod shader_compile;
pub(crate) mod toolchain;
