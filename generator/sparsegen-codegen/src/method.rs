//! Python method adapters. Every routine gets one fixed-signature wrapper
//! delegating to its thunk through `call_thunk`, which uses the verbatim
//! spec strings to validate and convert the argument tuple. The per-run
//! forward declarations and the method registration table are emitted here
//! as well.
use std::fmt::Write;

use sparsegen_spec::signature::RoutineSignature;

/// Emit the method adapter for one routine. The return and argument spec
/// strings are passed through to `call_thunk` exactly as written in the
/// routine table.
pub fn emit_method(sig: &RoutineSignature) -> String {
    format!(
        "\nPyObject *\n{name}_method(PyObject *self, PyObject *args)\n{{\n    \
         return call_thunk('{ret}', \"{args}\", {name}_thunk, args);\n}}\n",
        name = sig.name,
        ret = sig.ret_spec(),
        args = sig.arg_spec(),
    )
}

/// Emit the forward declaration block for every generated method.
pub fn emit_forward_decls(names: &[String]) -> String {
    let mut decls = String::new();
    for name in names {
        writeln!(decls, "PyObject *{name}_method(PyObject *, PyObject *);").unwrap();
    }

    decls
}

/// Emit the module method table registering every routine name against its
/// adapter entry point.
pub fn emit_method_table(names: &[String]) -> String {
    let mut table = String::from("\nstatic struct PyMethodDef sparsetools_methods[] = {");

    for name in names {
        write!(
            table,
            "\n            {{\"{name}\", (PyCFunction){name}_method, METH_VARARGS, NULL}},"
        )
        .unwrap();
    }

    table.push_str("\n        {NULL, NULL, 0, NULL}\n    };");
    table
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn methods_delegate_to_the_thunk_with_verbatim_specs() {
        let sig = RoutineSignature::parse("csr_matvec v iiIITT*T").unwrap();

        assert_eq!(
            emit_method(&sig),
            "\nPyObject *\ncsr_matvec_method(PyObject *self, PyObject *args)\n\
             {\n\
             \x20   return call_thunk('v', \"iiIITT*T\", csr_matvec_thunk, args);\n\
             }\n"
        );
    }

    #[test]
    fn forward_decls_cover_every_name_in_order() {
        let names = vec!["csr_matvec".to_owned(), "expandptr".to_owned()];

        assert_eq!(
            emit_forward_decls(&names),
            "PyObject *csr_matvec_method(PyObject *, PyObject *);\n\
             PyObject *expandptr_method(PyObject *, PyObject *);\n"
        );
    }

    #[test]
    fn the_method_table_is_null_terminated() {
        let names = vec!["csr_matvec".to_owned()];

        assert_eq!(
            emit_method_table(&names),
            "\nstatic struct PyMethodDef sparsetools_methods[] = {\n\
             \x20           {\"csr_matvec\", (PyCFunction)csr_matvec_method, METH_VARARGS, NULL},\n\
             \x20       {NULL, NULL, 0, NULL}\n\
             \x20   };"
        );
    }
}
