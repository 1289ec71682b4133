//! Renders the generated AST module: sum type, visitor trait and the
//! exhaustive `accept` dispatch, all driven by one pass over the grammar.
//!
//! Everything here is a pure function of the `Grammar`; two runs over the
//! same grammar produce byte-identical text.

pub mod op;

use crate::grammar::{Field, FieldKind, Grammar, NodeType};

/// Module path the generated code imports its leaf types from.
const LEAF_TYPE_MODULE: &str = "crate::token";

pub(crate) const INDENT: &str = "    ";

// ------------------------------ Emitter ----------------------------------- //

pub struct Codegen {
    out: String,
}

impl Codegen {
    pub fn new() -> Self {
        Codegen { out: String::new() }
    }

    pub fn into_string(self) -> String {
        self.out
    }

    pub(crate) fn line(&mut self, line: &str) {
        self.out.push_str(line);
        self.out.push('\n');
    }

    pub(crate) fn blank(&mut self) {
        self.out.push('\n');
    }

    /// The whole `ast.rs` artifact: imports, sum type, trait, dispatch.
    pub fn emit_ast(&mut self, grammar: &Grammar) {
        self.emit_leaf_imports(grammar);
        self.emit_node_enum(grammar);
        self.blank();
        self.emit_visitor_trait(grammar);
        self.blank();
        self.emit_accept(grammar);
    }

    pub(crate) fn emit_leaf_imports(&mut self, grammar: &Grammar) {
        let leaves = grammar.leaf_types();
        if leaves.is_empty() {
            return;
        }
        self.line(&format!(
            "use {}::{{{}}};",
            LEAF_TYPE_MODULE,
            leaves.join(", ")
        ));
        self.blank();
    }

    /// One variant per node type, one member per field, declared order.
    fn emit_node_enum(&mut self, grammar: &Grammar) {
        self.line(&format!("pub enum {} {{", grammar.base_name));
        for node in grammar.node_types() {
            self.line(&format!("{INDENT}{} {{", node.name));
            for field in &node.fields {
                self.line(&format!(
                    "{INDENT}{INDENT}{}: {},",
                    field.name,
                    owned_ty(grammar, &field.kind)
                ));
            }
            self.line(&format!("{INDENT}}},"));
        }
        self.line("}");
    }

    /// One required method per node type; no default bodies.
    fn emit_visitor_trait(&mut self, grammar: &Grammar) {
        self.line("pub trait Visitor<T> {");
        for node in grammar.node_types() {
            self.line(&format!("{INDENT}{} -> T;", method_signature(grammar, node)));
        }
        self.line("}");
    }

    /// `accept` forwards each variant to its visitor method, field order
    /// preserved. Exhaustive because it walks the same grammar as the trait.
    fn emit_accept(&mut self, grammar: &Grammar) {
        let base = &grammar.base_name;
        self.line(&format!("impl {base} {{"));
        self.line(&format!(
            "{INDENT}pub fn accept<T>(&self, visitor: &mut dyn Visitor<T>) -> T {{"
        ));
        self.line(&format!("{INDENT}{INDENT}match self {{"));
        for node in grammar.node_types() {
            let names: Vec<&str> = node.fields.iter().map(|f| f.name.as_str()).collect();
            self.line(&format!(
                "{INDENT}{INDENT}{INDENT}{base}::{} {{ {} }} => visitor.{}({}),",
                node.name,
                names.join(", "),
                visit_method_name(grammar, node),
                names.join(", ")
            ));
        }
        self.line(&format!("{INDENT}{INDENT}}}"));
        self.line(&format!("{INDENT}}}"));
        self.line("}");
    }
}

// ------------------------- Shared render helpers -------------------------- //

/// `visit_binary_expr` for node `Binary` under base name `Expr`.
pub fn visit_method_name(grammar: &Grammar, node: &NodeType) -> String {
    format!(
        "visit_{}_{}",
        node.name.to_lowercase(),
        grammar.base_name.to_lowercase()
    )
}

/// Signature shared between the trait and operation stubs, without the
/// return type: `fn visit_binary_expr(&mut self, left: &Expr, ...)`.
pub fn method_signature(grammar: &Grammar, node: &NodeType) -> String {
    let mut sig = format!("fn {}(&mut self", visit_method_name(grammar, node));
    for field in &node.fields {
        sig.push_str(&format!(", {}: {}", field.name, param_ty(grammar, field)));
    }
    sig.push(')');
    sig
}

/// Member type inside the sum type. Recursive edges own their child through
/// one `Box` so the enum has a fixed size at any tree depth.
fn owned_ty(grammar: &Grammar, kind: &FieldKind) -> String {
    match kind {
        FieldKind::Recursive => format!("Box<{}>", grammar.base_name),
        FieldKind::Named(ty) => ty.clone(),
    }
}

/// Parameter type in visitor methods. Recursive edges are seen as the sum
/// type itself, never the `Box` wrapper.
fn param_ty(grammar: &Grammar, field: &Field) -> String {
    match &field.kind {
        FieldKind::Recursive => format!("&{}", grammar.base_name),
        FieldKind::Named(ty) => format!("&{ty}"),
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::expr_grammar;

    fn two_node_grammar() -> Grammar {
        Grammar::parse(
            "Expr",
            &[
                ("Binary", "left base, operator Token, right base"),
                ("Literal", "value LiteralType"),
            ],
        )
        .unwrap()
    }

    fn render_ast(grammar: &Grammar) -> String {
        let mut cg = Codegen::new();
        cg.emit_ast(grammar);
        cg.into_string()
    }

    #[test]
    fn two_node_grammar_renders_complete_module() {
        let src = render_ast(&two_node_grammar());
        assert_eq!(
            src,
            "\
use crate::token::{Token, LiteralType};

pub enum Expr {
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    Literal {
        value: LiteralType,
    },
}

pub trait Visitor<T> {
    fn visit_binary_expr(&mut self, left: &Expr, operator: &Token, right: &Expr) -> T;
    fn visit_literal_expr(&mut self, value: &LiteralType) -> T;
}

impl Expr {
    pub fn accept<T>(&self, visitor: &mut dyn Visitor<T>) -> T {
        match self {
            Expr::Binary { left, operator, right } => visitor.visit_binary_expr(left, operator, right),
            Expr::Literal { value } => visitor.visit_literal_expr(value),
        }
    }
}
"
        );
    }

    #[test]
    fn recursive_fields_box_in_the_enum_but_not_in_parameters() {
        let src = render_ast(&two_node_grammar());
        assert!(src.contains("left: Box<Expr>"));
        assert!(src.contains("left: &Expr, operator: &Token, right: &Expr"));
        assert!(!src.contains("&Box<Expr>"));
    }

    #[test]
    fn trait_has_one_method_per_node_type_in_grammar_order() {
        let grammar = expr_grammar().unwrap();
        let src = render_ast(&grammar);
        let methods: Vec<usize> = grammar
            .node_types()
            .map(|n| {
                src.find(&format!("{} -> T;", method_signature(&grammar, n)))
                    .expect("trait method missing")
            })
            .collect();
        assert_eq!(methods.len(), grammar.len());
        assert!(methods.windows(2).all(|w| w[0] < w[1]), "grammar order");
    }

    #[test]
    fn dispatch_covers_every_node_type_and_calls_emitted_methods() {
        let grammar = expr_grammar().unwrap();
        let src = render_ast(&grammar);
        for node in grammar.node_types() {
            assert!(src.contains(&format!("Expr::{} {{", node.name)));
            assert!(src.contains(&format!("visitor.{}(", visit_method_name(&grammar, node))));
        }
        assert_eq!(src.matches("=> visitor.visit_").count(), grammar.len());
    }

    #[test]
    fn rendering_is_deterministic() {
        let grammar = expr_grammar().unwrap();
        assert_eq!(render_ast(&grammar), render_ast(&grammar));
    }
}
