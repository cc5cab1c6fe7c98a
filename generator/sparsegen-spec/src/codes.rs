//! The closed type-code alphabet of the routine-signature DSL. Each code is
//! a single character describing the role and representation of one return
//! or argument slot of a native kernel.
use std::fmt;

use sparsegen_reporting::errors::GeneratorError;

/// A single-character tag from a routine signature. The first code of a
/// signature describes the return value, the remaining ones the arguments.
///
/// [TypeCode::Output] is not an argument itself: it marks the immediately
/// following code as producing a mutable (output) argument.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TypeCode {
    /// `i`: an index scalar, read through a pointer in the argument bundle.
    Scalar,
    /// `I`: an index array pointer.
    IndexArray,
    /// `T`: a data array pointer.
    DataArray,
    /// `B`: a boolean array pointer.
    BoolArray,
    /// `V`: an output-only `std::vector` of index values.
    IndexVector,
    /// `W`: an output-only `std::vector` of data values.
    DataVector,
    /// `*`: the next argument is an output argument.
    Output,
    /// `v`: a void return value.
    Void,
    /// `l`: a 64-bit integer scalar, independent of the index type width.
    WideScalar,
}

impl TypeCode {
    /// The wire character of this code, as written in the routine tables.
    pub fn as_char(self) -> char {
        match self {
            TypeCode::Scalar => 'i',
            TypeCode::IndexArray => 'I',
            TypeCode::DataArray => 'T',
            TypeCode::BoolArray => 'B',
            TypeCode::IndexVector => 'V',
            TypeCode::DataVector => 'W',
            TypeCode::Output => '*',
            TypeCode::Void => 'v',
            TypeCode::WideScalar => 'l',
        }
    }

    /// Whether this code parameterizes the routine over the data type. Only
    /// data arrays and data vectors do; boolean arrays always use the fixed
    /// boolean wrapper type.
    pub fn is_data_typed(self) -> bool {
        matches!(self, TypeCode::DataArray | TypeCode::DataVector)
    }
}

impl TryFrom<char> for TypeCode {
    type Error = GeneratorError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code {
            'i' => Ok(TypeCode::Scalar),
            'I' => Ok(TypeCode::IndexArray),
            'T' => Ok(TypeCode::DataArray),
            'B' => Ok(TypeCode::BoolArray),
            'V' => Ok(TypeCode::IndexVector),
            'W' => Ok(TypeCode::DataVector),
            '*' => Ok(TypeCode::Output),
            'v' => Ok(TypeCode::Void),
            'l' => Ok(TypeCode::WideScalar),
            _ => Err(GeneratorError::UnknownTypeCode { code }),
        }
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_the_whole_alphabet() {
        for code in ['i', 'I', 'T', 'B', 'V', 'W', '*', 'v', 'l'] {
            let decoded = TypeCode::try_from(code).unwrap();
            assert_eq!(decoded.as_char(), code);
        }
    }

    #[test]
    fn reject_unknown_characters() {
        for code in ['x', 't', '?', ' '] {
            let err = TypeCode::try_from(code).unwrap_err();
            assert!(matches!(err, GeneratorError::UnknownTypeCode { code: c } if c == code));
        }
    }

    #[test]
    fn data_typed_codes() {
        assert!(TypeCode::DataArray.is_data_typed());
        assert!(TypeCode::DataVector.is_data_typed());
        assert!(!TypeCode::BoolArray.is_data_typed());
        assert!(!TypeCode::IndexVector.is_data_typed());
    }
}
