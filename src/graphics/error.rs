use crate::ShaderStage;

#[non_exhaustive]
#[derive(Debug)]
pub enum GpuError {
    /// The window or its GL context could not be created.
    /// Holds the windowing library's message.
    ContextCreation(String),
    /// The context was created but could not be made current.
    ContextCurrent(String),
    /// The loader could not resolve GL entry points for the current context.
    LoaderNone,
    /// The driver refused to create an object (vertex array, buffer, program...).
    ResourceCreation {
        kind: &'static str,
        message: String,
    },
}
impl std::fmt::Display for GpuError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        match self {
            GpuError::ContextCreation(e) => write!(f, "could not create window/GL context: {}", e),
            GpuError::ContextCurrent(e) => write!(f, "could not make GL context current: {}", e),
            GpuError::LoaderNone => write!(f, "could not load GL function pointers"),
            GpuError::ResourceCreation { kind, message } => {
                write!(f, "could not create {}: {}", kind, message)
            }
        }
    }
}
impl std::error::Error for GpuError {}

/// A shader stage that failed to compile, with the driver's diagnostic log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderError {
    pub stage: ShaderStage,
    pub log: String,
}
impl std::fmt::Display for ShaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        write!(f, "{} shader compilation failed: {}", self.stage, self.log)
    }
}
impl std::error::Error for ShaderError {}

/// Generic error type for any error.
/// Recommended to use with terminal errors only, which are expected to be displayed and not handled.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
