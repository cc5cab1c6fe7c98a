//! sparsegen entry point: expands the built-in routine tables into the
//! type-dispatch wrappers for the sparsetools C++ kernels.
mod args;
mod logger;

use clap::Parser;
use log::LevelFilter;
use sparsegen_driver::{settings::GeneratorSettings, Driver};

use crate::{args::GeneratorOptions, logger::GeneratorLogger};

/// The logger that the generator emits all of its messages through.
pub static CONSOLE_LOGGER: GeneratorLogger = GeneratorLogger;

fn main() {
    let settings = GeneratorSettings::from(GeneratorOptions::parse());

    if log::set_logger(&CONSOLE_LOGGER).is_ok() {
        let filter = if settings.debug { LevelFilter::Debug } else { LevelFilter::Info };
        log::set_max_level(filter);
    }

    if let Err(err) = Driver::new(settings).run() {
        err.report_and_exit();
    }
}
