//! Argument marshalling: turns the argument codes of a routine, fixed to one
//! [TypeVariant], into the ordered C++ expressions that read the untyped
//! argument bundle `a` when calling the native kernel.
use sparsegen_reporting::errors::{GeneratorError, GeneratorResult};
use sparsegen_spec::{codes::TypeCode, signature::RoutineSignature};

use crate::matrix::TypeVariant;

/// State of the marshalling pass between two argument codes. The output
/// marker must be consumed by exactly one following code; both a trailing
/// marker and two markers in a row are malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarshalState {
    /// The next code produces a read-only (const-qualified) argument.
    Normal,
    /// The previous code was the output marker: the next code produces a
    /// mutable argument.
    PendingOutput,
}

/// Produce the call-argument expressions for invoking `sig`'s native routine
/// as instantiated by `variant`. The positional slot advances once per
/// emitted expression; the output marker consumes no slot.
pub fn marshal_arguments(
    sig: &RoutineSignature,
    variant: &TypeVariant,
) -> GeneratorResult<Vec<String>> {
    let index = variant.index.ctype;

    let mut state = MarshalState::Normal;
    let mut exprs = Vec::with_capacity(sig.args.len());

    for &code in &sig.args {
        let constness = match state {
            MarshalState::Normal => "const ",
            MarshalState::PendingOutput => "",
        };

        let slot = exprs.len();
        let expr = match code {
            TypeCode::Output => {
                if state == MarshalState::PendingOutput {
                    return Err(GeneratorError::DoubledMarker { spec: sig.arg_spec() });
                }
                state = MarshalState::PendingOutput;
                continue;
            }
            TypeCode::Scalar => format!("*({constness}{index}*)a[{slot}]"),
            TypeCode::IndexArray => format!("({constness}{index}*)a[{slot}]"),
            TypeCode::DataArray => {
                format!("({constness}{}*)a[{slot}]", data_ctype(variant))
            }
            // Boolean arrays use the fixed wrapper type and are passed
            // mutable either way.
            TypeCode::BoolArray => format!("(npy_bool_wrapper*)a[{slot}]"),
            TypeCode::IndexVector => {
                if state == MarshalState::Normal {
                    return Err(GeneratorError::UnmarkedOutput { code: code.as_char() });
                }
                format!("(std::vector<{index}>*)a[{slot}]")
            }
            TypeCode::DataVector => {
                if state == MarshalState::Normal {
                    return Err(GeneratorError::UnmarkedOutput { code: code.as_char() });
                }
                format!("(std::vector<{}>*)a[{slot}]", data_ctype(variant))
            }
            TypeCode::WideScalar => format!("*({constness}npy_int64*)a[{slot}]"),
            TypeCode::Void => {
                return Err(GeneratorError::NonArgumentCode { code: code.as_char() })
            }
        };

        exprs.push(expr);
        state = MarshalState::Normal;
    }

    if state == MarshalState::PendingOutput {
        return Err(GeneratorError::TrailingMarker { spec: sig.arg_spec() });
    }

    Ok(exprs)
}

/// The data C++ type of `variant`. Data-typed codes only ever reach the
/// marshaller through the combined variant list, which always carries one.
fn data_ctype(variant: &TypeVariant) -> &'static str {
    match variant.data {
        Some(data) => data.ctype,
        None => unreachable!("data-typed code marshalled against an index-only variant"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sparsegen_spec::types::{DataType, IndexType};

    use super::*;
    use crate::matrix::{CaseId, TypeVariant};

    fn combined_variant() -> TypeVariant {
        TypeVariant {
            case: CaseId::new(1),
            index: IndexType::new("NPY_INT32", "npy_int32"),
            data: Some(DataType::new("NPY_DOUBLE", "npy_double")),
        }
    }

    fn index_only_variant() -> TypeVariant {
        TypeVariant {
            case: CaseId::new(0),
            index: IndexType::new("NPY_INT32", "npy_int32"),
            data: None,
        }
    }

    fn sig(line: &str) -> RoutineSignature {
        RoutineSignature::parse(line).unwrap()
    }

    #[test]
    fn bsr_diagonal_marshals_slot_for_slot() {
        let exprs =
            marshal_arguments(&sig("bsr_diagonal v iiiiiIIT*T"), &combined_variant())
                .unwrap();

        assert_eq!(
            exprs,
            vec![
                "*(const npy_int32*)a[0]",
                "*(const npy_int32*)a[1]",
                "*(const npy_int32*)a[2]",
                "*(const npy_int32*)a[3]",
                "*(const npy_int32*)a[4]",
                "(const npy_int32*)a[5]",
                "(const npy_int32*)a[6]",
                "(const npy_double*)a[7]",
                // the output-marked trailing data array loses its const
                // qualifier, and the marker itself consumed no slot
                "(npy_double*)a[8]",
            ]
        );
    }

    #[test]
    fn output_marked_scalars_lose_their_const() {
        let exprs = marshal_arguments(&sig("foo v i*i"), &index_only_variant()).unwrap();

        assert_eq!(exprs, vec!["*(const npy_int32*)a[0]", "*(npy_int32*)a[1]"]);
    }

    #[test]
    fn wide_scalars_ignore_the_index_width() {
        let exprs = marshal_arguments(&sig("coo_matvec v lI"), &index_only_variant()).unwrap();

        assert_eq!(exprs, vec!["*(const npy_int64*)a[0]", "(const npy_int32*)a[1]"]);
    }

    #[test]
    fn bool_arrays_use_the_wrapper_type_unqualified() {
        let exprs = marshal_arguments(&sig("foo v B*B"), &index_only_variant()).unwrap();

        assert_eq!(exprs, vec!["(npy_bool_wrapper*)a[0]", "(npy_bool_wrapper*)a[1]"]);
    }

    #[test]
    fn vectors_must_be_output_marked() {
        let err = marshal_arguments(&sig("foo v iV"), &combined_variant()).unwrap_err();
        assert!(matches!(err, GeneratorError::UnmarkedOutput { code: 'V' }));

        let err = marshal_arguments(&sig("foo v W"), &combined_variant()).unwrap_err();
        assert!(matches!(err, GeneratorError::UnmarkedOutput { code: 'W' }));

        let ok = marshal_arguments(&sig("foo v *V*W"), &combined_variant()).unwrap();
        assert_eq!(
            ok,
            vec!["(std::vector<npy_int32>*)a[0]", "(std::vector<npy_double>*)a[1]"]
        );
    }

    #[test]
    fn a_trailing_marker_is_malformed() {
        let err = marshal_arguments(&sig("foo v i*"), &index_only_variant()).unwrap_err();
        assert!(matches!(err, GeneratorError::TrailingMarker { spec } if spec == "i*"));
    }

    #[test]
    fn back_to_back_markers_are_malformed() {
        let err = marshal_arguments(&sig("foo v **"), &index_only_variant()).unwrap_err();
        assert!(matches!(err, GeneratorError::DoubledMarker { spec } if spec == "**"));
    }

    #[test]
    fn void_cannot_describe_an_argument() {
        let err = marshal_arguments(&sig("foo v iv"), &index_only_variant()).unwrap_err();
        assert!(matches!(err, GeneratorError::NonArgumentCode { code: 'v' }));
    }

    #[test]
    fn an_empty_argument_list_marshals_to_nothing() {
        let exprs =
            marshal_arguments(&sig("test_throw_error i"), &index_only_variant()).unwrap();
        assert!(exprs.is_empty());
    }
}
