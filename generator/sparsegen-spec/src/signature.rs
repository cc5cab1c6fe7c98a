//! Parsing of routine tables. Each line of a table is one routine: a name
//! followed by the compact type-code string, whitespace separated. The first
//! code is the return value, the rest are the arguments.
use derive_more::Constructor;
use sparsegen_reporting::errors::{GeneratorError, GeneratorResult};

use crate::codes::TypeCode;

/// A parsed routine signature. Immutable once parsed; the verbatim spec
/// characters can be recovered through [RoutineSignature::ret_spec] and
/// [RoutineSignature::arg_spec].
#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct RoutineSignature {
    /// Name of the native routine, unique across the whole run.
    pub name: String,
    /// The return code of the routine.
    pub ret: TypeCode,
    /// The argument codes, in call order. Output markers appear in front of
    /// the code they mark.
    pub args: Vec<TypeCode>,
}

impl RoutineSignature {
    /// Parse a single routine line. The line must split into a name token
    /// and at least one code field; whitespace inside the code fields is
    /// insignificant and stripped.
    pub fn parse(line: &str) -> GeneratorResult<Self> {
        let mut fields = line.split_whitespace();

        let name = match fields.next() {
            Some(name) => name.to_owned(),
            None => return Err(GeneratorError::MalformedLine { line: line.to_owned() }),
        };

        let mut codes = fields.flat_map(str::chars).map(TypeCode::try_from);
        let ret = match codes.next() {
            Some(ret) => ret?,
            None => return Err(GeneratorError::MalformedLine { line: line.to_owned() }),
        };
        let args = codes.collect::<GeneratorResult<Vec<_>>>()?;

        Ok(Self { name, ret, args })
    }

    /// Whether any code of the signature, return value included, makes the
    /// routine parametric over the data type.
    pub fn is_data_parameterized(&self) -> bool {
        self.ret.is_data_typed() || self.args.iter().any(|code| code.is_data_typed())
    }

    /// The verbatim return-spec character.
    pub fn ret_spec(&self) -> char {
        self.ret.as_char()
    }

    /// The verbatim argument-spec string, with whitespace already stripped.
    pub fn arg_spec(&self) -> String {
        self.args.iter().map(|code| code.as_char()).collect()
    }
}

/// Parse one routine table. Blank lines and lines starting with `#` are
/// skipped; every other line must be a well-formed routine signature.
pub fn parse_table(table: &str) -> GeneratorResult<Vec<RoutineSignature>> {
    table
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(RoutineSignature::parse)
        .collect()
}
