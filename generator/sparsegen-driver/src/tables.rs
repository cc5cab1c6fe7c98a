//! The built-in generation input: the routine tables for each compilation
//! unit and the supported index/data type enumerations. This is pure data;
//! the algorithms never assume a particular number of routines or types.

use sparsegen_spec::types::{DataType, IndexType};

/// Routines declared in `bsr.h`.
pub const BSR_ROUTINES: &str = "
bsr_diagonal        v iiiiiIIT*T
bsr_tocsr           v iiiiIIT*I*I*T
bsr_scale_rows      v iiiiII*TT
bsr_scale_columns   v iiiiII*TT
bsr_sort_indices    v iiii*I*I*T
bsr_transpose       v iiiiIIT*I*I*T
bsr_matmat          v iiiiiiIITIIT*I*I*T
bsr_matvec          v iiiiIITT*T
bsr_matvecs         v iiiiiIITT*T
bsr_elmul_bsr       v iiiiIITIIT*I*I*T
bsr_eldiv_bsr       v iiiiIITIIT*I*I*T
bsr_plus_bsr        v iiiiIITIIT*I*I*T
bsr_minus_bsr       v iiiiIITIIT*I*I*T
bsr_maximum_bsr     v iiiiIITIIT*I*I*T
bsr_minimum_bsr     v iiiiIITIIT*I*I*T
bsr_ne_bsr          v iiiiIITIIT*I*I*B
bsr_lt_bsr          v iiiiIITIIT*I*I*B
bsr_gt_bsr          v iiiiIITIIT*I*I*B
bsr_le_bsr          v iiiiIITIIT*I*I*B
bsr_ge_bsr          v iiiiIITIIT*I*I*B
";

/// Routines declared in `csc.h`.
pub const CSC_ROUTINES: &str = "
csc_matvec          v iiIITT*T
csc_matvecs         v iiiIITT*T
";

/// Routines declared in `csr.h`.
pub const CSR_ROUTINES: &str = "
csr_matmat_maxnnz   l iiIIII
csr_matmat          v iiIITIIT*I*I*T
csr_diagonal        v iiiIIT*T
csr_tocsc           v iiIIT*I*I*T
csr_tobsr           v iiiiIIT*I*I*T
csr_todense         v iiIIT*T
csr_matvec          v iiIITT*T
csr_matvecs         v iiiIITT*T
csr_elmul_csr       v iiIITIIT*I*I*T
csr_eldiv_csr       v iiIITIIT*I*I*T
csr_plus_csr        v iiIITIIT*I*I*T
csr_minus_csr       v iiIITIIT*I*I*T
csr_maximum_csr     v iiIITIIT*I*I*T
csr_minimum_csr     v iiIITIIT*I*I*T
csr_ne_csr          v iiIITIIT*I*I*B
csr_lt_csr          v iiIITIIT*I*I*B
csr_gt_csr          v iiIITIIT*I*I*B
csr_le_csr          v iiIITIIT*I*I*B
csr_ge_csr          v iiIITIIT*I*I*B
csr_scale_rows      v iiII*TT
csr_scale_columns   v iiII*TT
csr_sort_indices    v iI*I*T
csr_eliminate_zeros v ii*I*I*T
csr_sum_duplicates  v ii*I*I*T
get_csr_submatrix   v iiIITiiii*V*V*W
csr_row_index       v iIIIT*I*T
csr_row_slice       v iiiIIT*I*T
csr_column_index1   v iIiiII*I*I
csr_column_index2   v IIiIT*I*T
csr_sample_values   v iiIITiII*T
csr_count_blocks    i iiiiII
csr_sample_offsets  i iiIIiII*I
csr_hstack          v iiIIIT*I*I*T
expandptr           v iI*I
test_throw_error    i
csr_has_sorted_indices    i iII
csr_has_canonical_format  i iII
";

/// Routines declared in `coo.h`, `dia.h` and `csgraph.h`.
pub const OTHER_ROUTINES: &str = "
coo_tocsr           v iiiIIT*I*I*T
coo_todense         v iilIIT*Ti
coo_todense_nd      v IllIT*Ti
coo_matvec          v lIITT*T
coo_matvec_nd       v llIITT*T
coo_matmat_dense    v llIITT*T
coo_matmat_dense_nd v lllIIITT*T
dia_tocsr           i iiiiITI*T*I*I
dia_matmat          v iiiiITiiiIT*V*W
dia_matvec          v iiiiITT*T
dia_matvecs         v iiiiITiT*T
cs_graph_components i iII*I
";

/// The compilation units of a run: a unit name (which becomes the
/// `{name}_impl.h` target) paired with its routine table.
pub const COMPILATION_UNITS: [(&str, &str); 4] = [
    ("bsr", BSR_ROUTINES),
    ("csr", CSR_ROUTINES),
    ("csc", CSC_ROUTINES),
    ("other", OTHER_ROUTINES),
];

/// The supported index typenums and the corresponding C++ types.
pub const I_TYPES: [IndexType; 2] = [
    IndexType::new("NPY_INT32", "npy_int32"),
    IndexType::new("NPY_INT64", "npy_int64"),
];

/// The supported data typenums and the corresponding C++ types.
pub const T_TYPES: [DataType; 17] = [
    DataType::new("NPY_BOOL", "npy_bool_wrapper"),
    DataType::new("NPY_BYTE", "npy_byte"),
    DataType::new("NPY_UBYTE", "npy_ubyte"),
    DataType::new("NPY_SHORT", "npy_short"),
    DataType::new("NPY_USHORT", "npy_ushort"),
    DataType::new("NPY_INT", "npy_int"),
    DataType::new("NPY_UINT", "npy_uint"),
    DataType::new("NPY_LONG", "npy_long"),
    DataType::new("NPY_ULONG", "npy_ulong"),
    DataType::new("NPY_LONGLONG", "npy_longlong"),
    DataType::new("NPY_ULONGLONG", "npy_ulonglong"),
    DataType::new("NPY_FLOAT", "npy_float"),
    DataType::new("NPY_DOUBLE", "npy_double"),
    DataType::new("NPY_LONGDOUBLE", "npy_longdouble"),
    DataType::new("NPY_CFLOAT", "npy_cfloat_wrapper"),
    DataType::new("NPY_CDOUBLE", "npy_cdouble_wrapper"),
    DataType::new("NPY_CLONGDOUBLE", "npy_clongdouble_wrapper"),
];
