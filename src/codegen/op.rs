//! Scaffolds a new traversal operation: an empty struct plus a `Visitor`
//! impl whose method set mirrors the generated trait exactly.

use crate::codegen::{Codegen, INDENT, method_signature};
use crate::grammar::Grammar;

/// Module path the generated stub imports the AST types from.
const AST_MODULE: &str = "crate::ast";

/// One stub invocation: operation type name, visitor result type, and the
/// output file name relative to the fixed output directory.
#[derive(Debug, Clone)]
pub struct OperationSpec {
    pub name: String,
    pub result_ty: String,
    pub file_name: String,
}

impl Codegen {
    /// Method bodies stay empty on purpose: for any non-unit result type the
    /// stub refuses to compile until the author fills in every case.
    pub fn emit_operation(&mut self, grammar: &Grammar, spec: &OperationSpec) {
        self.line(&format!(
            "use {}::{{{}, Visitor}};",
            AST_MODULE, grammar.base_name
        ));
        self.emit_leaf_imports(grammar);
        self.line(&format!("pub struct {} {{}}", spec.name));
        self.blank();
        self.line(&format!(
            "impl Visitor<{}> for {} {{",
            spec.result_ty, spec.name
        ));
        for node in grammar.node_types() {
            self.line(&format!(
                "{INDENT}{} -> {} {{}}",
                method_signature(grammar, node),
                spec.result_ty
            ));
            self.blank();
        }
        self.line("}");
    }
}

// ------------------------------- Tests ------------------------------------ //
