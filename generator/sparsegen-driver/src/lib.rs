//! The generation driver: expands the routine tables of every compilation
//! unit against the shared type matrix, renders all artifacts in memory, and
//! writes them subject to the mtime staleness check. Rendering is completed
//! before any file is touched, so a failure anywhere leaves the output
//! directory untouched.
pub mod fs;
pub mod settings;
pub mod tables;

use std::{env, iter, path::Path};

use log::info;
use sparsegen_codegen::{
    emit_forward_decls, emit_method, emit_method_table, emit_thunk, TypeMatrix,
};
use sparsegen_reporting::errors::{GeneratorError, GeneratorResult};
use sparsegen_spec::{
    parse_table,
    types::{DataType, IndexType},
};

use crate::settings::GeneratorSettings;

/// Comment stamped at the top of every generated file.
const AUTOGEN_BLURB: &str = "/* This file is autogenerated by sparsegen.\n\
                             \x20* Do not edit manually or check into VCS.\n\
                             \x20*/\n";

/// Name of the global module target.
const MODULE_TARGET: &str = "sparsetools_impl.h";

/// The rendered artifacts of one run, keyed by target file name.
#[derive(Debug)]
pub struct GeneratedOutput {
    /// One `{unit}_impl.h` per compilation unit, in unit order.
    pub units: Vec<(String, String)>,
    /// The global module file: forward declarations plus the method table.
    pub module: (String, String),
    /// Every routine name of the run, in emission order.
    pub names: Vec<String>,
}

impl GeneratedOutput {
    /// All targets of the run, unit files first.
    pub fn targets(&self) -> impl Iterator<Item = &(String, String)> {
        self.units.iter().chain(iter::once(&self.module))
    }
}

/// Render every artifact for the given compilation units over the given type
/// tables. Routine names must be unique across the whole run, not merely
/// within their unit.
pub fn generate(
    units: &[(&str, &str)],
    index_types: &[IndexType],
    data_types: &[DataType],
) -> GeneratorResult<GeneratedOutput> {
    let matrix = TypeMatrix::build(index_types, data_types)?;
    let case_getter = matrix.emit_case_getter();

    let mut names: Vec<String> = Vec::new();
    let mut unit_files = Vec::with_capacity(units.len());

    for (unit, table) in units {
        let mut thunks = String::new();
        let mut methods = String::new();

        for sig in parse_table(table)? {
            if names.contains(&sig.name) {
                return Err(GeneratorError::DuplicateRoutine { name: sig.name });
            }

            thunks.push_str(&emit_thunk(&sig, &matrix)?);
            methods.push_str(&emit_method(&sig));
            names.push(sig.name);
        }

        let content = format!("{AUTOGEN_BLURB}{case_getter}{thunks}{methods}");
        unit_files.push((format!("{unit}_impl.h"), content));
    }

    let module = format!(
        "{AUTOGEN_BLURB}{}{}",
        emit_forward_decls(&names),
        emit_method_table(&names)
    );

    Ok(GeneratedOutput { units: unit_files, module: (MODULE_TARGET.to_owned(), module), names })
}

/// The generator driver. Owns the run settings and performs the whole batch
/// transform, single threaded and single pass; each target is written at
/// most once per run.
#[derive(Debug, Default)]
pub struct Driver {
    settings: GeneratorSettings,
}

impl Driver {
    /// Create a new [Driver] with the given settings.
    pub fn new(settings: GeneratorSettings) -> Self {
        Self { settings }
    }

    /// Run generation over the built-in routine tables, writing into the
    /// configured output directory.
    pub fn run(&self) -> GeneratorResult<()> {
        let output =
            generate(&tables::COMPILATION_UNITS, &tables::I_TYPES, &tables::T_TYPES)?;

        // Targets older than the generator binary itself are stale.
        let reference = env::current_exe()?;
        self.write(&output, &reference)
    }

    /// Write the rendered artifacts, skipping any target that is newer than
    /// `reference` unless the run is forced.
    pub fn write(&self, output: &GeneratedOutput, reference: &Path) -> GeneratorResult<()> {
        for (file, content) in output.targets() {
            let target = self.settings.output_directory.join(file);

            if fs::newer(reference, &target)? || self.settings.force {
                info!("generating `{}`", target.display());
                std::fs::write(&target, content)?;
            } else {
                info!("`{}` already up-to-date", target.display());
            }
        }

        Ok(())
    }
}
