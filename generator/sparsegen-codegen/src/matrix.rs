//! Construction of the shared dispatch space: the cartesian expansion of the
//! configured index and data types, and the generated lookup that maps a
//! runtime typenum pair back to a case id.
use std::fmt::Write;

use index_vec::IndexVec;
use itertools::Itertools;
use sparsegen_reporting::errors::{GeneratorError, GeneratorResult};
use sparsegen_spec::types::{DataType, IndexType};

index_vec::define_index_type! {
    /// Identifier of one [TypeVariant] within the run's dispatch space. Ids
    /// are handed out by [TypeMatrix::build] from a single monotone counter,
    /// so they are unique and contiguous across the whole run.
    pub struct CaseId = u32;

    MAX_INDEX = i32::MAX as usize;
    DISABLE_MAX_INDEX_CHECK = cfg!(not(debug_assertions));

    DEBUG_FORMAT = "case{}";
}

/// The typenum value the generated lookup uses for "routine has no data
/// type", and also its "no match" return value. Case ids are non-negative,
/// so the sentinel can never collide with one.
const NO_MATCH_SENTINEL: &str = "-1";

/// One concrete instantiation of a routine: an index type plus, for
/// data-parameterized routines, a data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeVariant {
    /// The dispatch discriminant of this variant.
    pub case: CaseId,
    /// The index type the variant is instantiated with.
    pub index: IndexType,
    /// The data type, absent for the index-only variants used by routines
    /// with no data-typed codes.
    pub data: Option<DataType>,
}

/// The expanded type space of a generation run, built once and shared
/// read-only by every routine.
///
/// Id assignment order is the explicit tie-break: index types in declaration
/// order, and within each index type first the index-only variant, then one
/// variant per data type in declaration order.
#[derive(Debug)]
pub struct TypeMatrix {
    /// Every variant of the run, stored at its own case id.
    variants: IndexVec<CaseId, TypeVariant>,
}

impl TypeMatrix {
    /// Expand the given type tables into the dispatch space.
    ///
    /// The generated lookup branches on raw identifier values, so the tables
    /// must satisfy a precondition: typenums are pairwise distinct within
    /// each axis, and no data typenum equals the reserved `-1` sentinel.
    pub fn build(
        index_types: &[IndexType],
        data_types: &[DataType],
    ) -> GeneratorResult<Self> {
        check_distinct(index_types.iter().map(|ty| ty.typenum))?;
        check_distinct(data_types.iter().map(|ty| ty.typenum))?;

        if let Some(ty) = data_types.iter().find(|ty| ty.typenum == NO_MATCH_SENTINEL) {
            return Err(GeneratorError::ReservedTypenum { typenum: ty.typenum.to_owned() });
        }

        let mut variants: IndexVec<CaseId, TypeVariant> = IndexVec::new();
        for &index in index_types {
            let case = CaseId::new(variants.len());
            variants.push(TypeVariant { case, index, data: None });

            for &data in data_types {
                let case = CaseId::new(variants.len());
                variants.push(TypeVariant { case, index, data: Some(data) });
            }
        }

        Ok(Self { variants })
    }

    /// The variants used by routines that are parameterized only by the
    /// index type.
    pub fn index_only_variants(&self) -> impl Iterator<Item = &TypeVariant> {
        self.variants.iter().filter(|variant| variant.data.is_none())
    }

    /// The (index, data) variants used by data-parameterized routines.
    pub fn combined_variants(&self) -> impl Iterator<Item = &TypeVariant> {
        self.variants.iter().filter(|variant| variant.data.is_some())
    }

    /// Total number of variants; case ids are exactly `0..total_variants()`.
    pub fn total_variants(&self) -> usize {
        self.variants.len()
    }

    /// Emit the C++ lookup mapping a runtime `(I_typenum, T_typenum)` pair
    /// to its case id. It branches on the index typenum first, then on the
    /// data typenum (with `-1` meaning "no data type"), and returns `-1`
    /// when nothing matches.
    pub fn emit_case_getter(&self) -> String {
        let mut content = String::from("    if (0) {}");

        for variant in &self.variants {
            match variant.data {
                None => {
                    // A new index-type block begins; close the previous one.
                    if variant.case.index() > 0 {
                        content.push_str("\n        }");
                    }
                    write!(
                        content,
                        "\n        else if (I_typenum == {}) {{\
                         \n            if (T_typenum == -1) {{ return {}; }}",
                        variant.index.typenum,
                        variant.case.index()
                    )
                    .unwrap();
                }
                Some(data) => {
                    write!(
                        content,
                        "\n            else if (T_typenum == {}) {{ return {}; }}",
                        data.typenum,
                        variant.case.index()
                    )
                    .unwrap();
                }
            }
        }

        if !self.variants.is_empty() {
            content.push_str("\n        }");
        }

        format!(
            "\nstatic int get_thunk_case(int I_typenum, int T_typenum)\n{{\n    \
             {content};\n    return {NO_MATCH_SENTINEL};\n}}\n"
        )
    }
}

/// Fail with [GeneratorError::AmbiguousTypenum] if any identifier occurs
/// twice within one axis.
fn check_distinct<'t>(typenums: impl Iterator<Item = &'t str>) -> GeneratorResult<()> {
    match typenums.duplicates().next() {
        Some(duplicate) => {
            Err(GeneratorError::AmbiguousTypenum { typenum: duplicate.to_owned() })
        }
        None => Ok(()),
    }
}
