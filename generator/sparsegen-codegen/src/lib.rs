//! Code generation core: expands the configured (index × data) type space
//! into a shared dispatch table and emits, per routine, the C++ thunk that
//! selects and invokes the correctly-typed kernel together with its Python
//! method adapter.
pub mod marshal;
pub mod matrix;
pub mod method;
pub mod thunk;

pub use marshal::marshal_arguments;
pub use matrix::{CaseId, TypeMatrix, TypeVariant};
pub use method::{emit_forward_decls, emit_method, emit_method_table};
pub use thunk::emit_thunk;
