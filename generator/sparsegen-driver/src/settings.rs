//! Settings that are present on the generator when initially launching,
//! built by the command-line surface and consumed by the driver.
use std::path::PathBuf;

/// Configuration of one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    /// The directory generated files are written into.
    pub output_directory: PathBuf,

    /// Whether to regenerate targets that are already newer than the
    /// generator itself.
    pub force: bool,

    /// Whether debugging log statements are enabled.
    pub debug: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self { output_directory: PathBuf::from("."), force: true, debug: false }
    }
}
