//! Per-routine dispatch thunk emission. A thunk resolves the case id for the
//! runtime typenum pair once, then switches over every variant the routine
//! is instantiated for.
use std::fmt::Write;

use itertools::Itertools;
use sparsegen_reporting::errors::GeneratorResult;
use sparsegen_spec::{codes::TypeCode, signature::RoutineSignature};

use crate::{marshal::marshal_arguments, matrix::TypeMatrix};

/// Emit the dispatch thunk for `sig`. Routines without a data-typed code
/// switch over the index-only variants, everything else over the full
/// (index, data) expansion.
///
/// Reaching the `default` arm at the generated code's runtime means the
/// typenum pair resolved to a case outside the routine's set (or to the
/// no-match sentinel): a registry/typenum mismatch that is unrecoverable by
/// construction, so it throws rather than returning an error value.
pub fn emit_thunk(sig: &RoutineSignature, matrix: &TypeMatrix) -> GeneratorResult<String> {
    let variants: Vec<_> = if sig.is_data_parameterized() {
        matrix.combined_variants().collect()
    } else {
        matrix.index_only_variants().collect()
    };

    let mut content = String::from("int j = get_thunk_case(I_typenum, T_typenum);\n    switch (j) {");

    for variant in variants {
        let arglist = marshal_arguments(sig, variant)?.iter().join(", ");

        write!(content, "\n        case {}:", variant.case.index()).unwrap();
        if sig.ret == TypeCode::Void {
            write!(
                content,
                "\n            (void){}({arglist});\n            return 0;",
                sig.name
            )
            .unwrap();
        } else {
            write!(content, "\n            return {}({arglist});", sig.name).unwrap();
        }
    }

    content.push_str(
        "\n    default:\
         \n        throw std::runtime_error(\"internal error: invalid argument typenums\");\
         \n    }",
    );

    Ok(format!(
        "\nstatic PY_LONG_LONG {}_thunk(int I_typenum, int T_typenum, void **a)\n{{\n    \
         {content}\n}}\n",
        sig.name
    ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sparsegen_spec::types::{DataType, IndexType};

    use super::*;

    fn matrix() -> TypeMatrix {
        let index_types =
            [IndexType::new("IDX_32", "int32"), IndexType::new("IDX_64", "int64")];
        let data_types =
            [DataType::new("DATA_F", "float"), DataType::new("DATA_D", "double")];

        TypeMatrix::build(&index_types, &data_types).unwrap()
    }

    fn sig(line: &str) -> RoutineSignature {
        RoutineSignature::parse(line).unwrap()
    }

    #[test]
    fn index_only_routines_switch_over_the_index_only_cases() {
        let thunk = emit_thunk(&sig("csr_count_blocks i iiiiII"), &matrix()).unwrap();

        // exactly the two index-only case ids, nothing from the combined set
        assert_eq!(thunk.matches("case ").count(), 2);
        assert!(thunk.contains("case 0:"));
        assert!(thunk.contains("case 3:"));
        assert!(thunk.contains("return csr_count_blocks("));
    }

    #[test]
    fn data_routines_switch_over_the_full_expansion() {
        let thunk = emit_thunk(&sig("csr_todense v iiIIT*T"), &matrix()).unwrap();

        assert_eq!(thunk.matches("case ").count(), 4);
        for case in [1, 2, 4, 5] {
            assert!(thunk.contains(&format!("case {case}:")), "missing case {case}");
        }
    }

    #[test]
    fn void_routines_discard_the_result_and_return_zero() {
        let thunk = emit_thunk(&sig("expandptr v iI*I"), &matrix()).unwrap();

        assert_eq!(
            thunk,
            "\nstatic PY_LONG_LONG expandptr_thunk(int I_typenum, int T_typenum, void **a)\n\
             {\n\
             \x20   int j = get_thunk_case(I_typenum, T_typenum);\n\
             \x20   switch (j) {\n\
             \x20       case 0:\n\
             \x20           (void)expandptr(*(const int32*)a[0], (const int32*)a[1], (int32*)a[2]);\n\
             \x20           return 0;\n\
             \x20       case 3:\n\
             \x20           (void)expandptr(*(const int64*)a[0], (const int64*)a[1], (int64*)a[2]);\n\
             \x20           return 0;\n\
             \x20   default:\n\
             \x20       throw std::runtime_error(\"internal error: invalid argument typenums\");\n\
             \x20   }\n\
             }\n"
        );
    }

    #[test]
    fn value_returning_routines_return_the_call_directly() {
        let thunk = emit_thunk(&sig("csr_matmat_maxnnz l iiII"), &matrix()).unwrap();

        assert!(thunk.contains("return csr_matmat_maxnnz(*(const int32*)a[0]"));
        assert!(!thunk.contains("(void)csr_matmat_maxnnz"));
        assert!(!thunk.contains("return 0;"));
    }

    #[test]
    fn marshalling_failures_abort_thunk_emission() {
        assert!(emit_thunk(&sig("foo v V"), &matrix()).is_err());
    }
}
