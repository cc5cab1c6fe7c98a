//! Error definitions for the generator. A generation run is a deterministic
//! batch transform, so every error here is fatal: the run stops at the first
//! one and writes nothing further.
use std::{io, path::PathBuf, process::exit};

use thiserror::Error;

use crate::highlight::{highlight, Colour, Modifier};

/// Utility wrapper type for [GeneratorError] in [Result].
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Errors that might occur when expanding the routine tables into dispatch
/// code.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A routine line that couldn't be split into a name and a code field.
    #[error("malformed routine line `{line}`")]
    MalformedLine { line: String },

    /// The same routine name appeared more than once anywhere in the run,
    /// including across different compilation units.
    #[error("duplicate routine `{name}`")]
    DuplicateRoutine { name: String },

    /// A character outside the type-code alphabet.
    #[error("unrecognized type code `{code}`")]
    UnknownTypeCode { code: char },

    /// A code that is only meaningful as a return code was used to describe
    /// an argument.
    #[error("type code `{code}` cannot be used as an argument")]
    NonArgumentCode { code: char },

    /// An output-only vector code without the preceding `*` marker.
    #[error("output-only argument `{code}` used without marker")]
    UnmarkedOutput { code: char },

    /// An output marker with no argument code following it.
    #[error("trailing output marker in `{spec}`")]
    TrailingMarker { spec: String },

    /// Two output markers in a row; the marker must be consumed by exactly
    /// one argument code.
    #[error("output marker followed by another marker in `{spec}`")]
    DoubledMarker { spec: String },

    /// A runtime type identifier that appears twice within one axis of the
    /// type tables. The generated lookup branches on identifier values, so
    /// they must be pairwise distinct.
    #[error("type identifiers must be pairwise distinct, `{typenum}` appears twice")]
    AmbiguousTypenum { typenum: String },

    /// A data type identifier equal to the reserved "no data type" sentinel
    /// of the generated lookup.
    #[error("data type identifier `{typenum}` collides with the no-data sentinel")]
    ReservedTypenum { typenum: String },

    /// The staleness reference file is missing.
    #[error("file `{}` does not exist", .path.display())]
    MissingSource { path: PathBuf },

    /// Generic IO error while writing output artifacts.
    #[error("{0}")]
    Io(#[from] io::Error),
}

impl GeneratorError {
    /// Print the error to standard error and exit with a failure code.
    pub fn report_and_exit(&self) -> ! {
        self.report();
        exit(1);
    }

    /// Print the error to standard error.
    pub fn report(&self) {
        eprintln!(
            "{}: {}",
            highlight(Colour::Red | Modifier::Bold, "error"),
            highlight(Modifier::Bold, self)
        );
    }
}
