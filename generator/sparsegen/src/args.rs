//! sparsegen argument management.
use std::path::PathBuf;

use clap::Parser as ClapParser;
use sparsegen_driver::settings::GeneratorSettings;

/// GeneratorOptions is a structural representation of what arguments the
/// generator can take when running.
#[derive(ClapParser)]
#[clap(
    name = "sparsegen",
    version,
    about = "Generate type-dispatch wrappers for the sparsetools C++ kernels"
)]
pub(crate) struct GeneratorOptions {
    /// Relative path to the output directory
    #[clap(short, long, default_value = ".")]
    pub(crate) outdir: PathBuf,

    /// Skip targets that are already newer than the generator itself
    #[clap(long = "no-force", action = clap::ArgAction::SetFalse)]
    pub(crate) force: bool,

    /// Run the generator in debug mode
    #[clap(short, long)]
    pub(crate) debug: bool,
}

impl From<GeneratorOptions> for GeneratorSettings {
    fn from(options: GeneratorOptions) -> Self {
        Self {
            output_directory: options.outdir,
            force: options.force,
            debug: options.debug,
        }
    }
}
