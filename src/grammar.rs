//! Grammar model: the in-memory description of AST node types.
//!
//! A grammar is authored as raw field tables (`"<name> <kind-token>"`) and
//! parsed once into a tagged representation. The `base` sentinel only exists
//! here; everything downstream branches on `FieldKind`, never on strings.

use indexmap::IndexMap;
use thiserror::Error;

/// Kind-token marking a field that holds the sum type itself.
const RECURSIVE_TOKEN: &str = "base";

// ------------------------------- Types ------------------------------------ //

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// A self-referential tree edge; rendered behind one owning indirection.
    Recursive,
    /// An externally defined leaf type, taken verbatim from the kind-token.
    Named(String),
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
}

#[derive(Debug, Clone)]
pub struct NodeType {
    pub name: String,
    /// Declared order; drives member/parameter order everywhere.
    pub fields: Vec<Field>,
}

/// Ordered node-type table. Insertion order is emission order.
#[derive(Debug, Clone)]
pub struct Grammar {
    pub base_name: String,
    nodes: IndexMap<String, NodeType>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("grammar has no node types")]
    Empty,
    #[error("duplicate node type `{0}`")]
    DuplicateNodeType(String),
    #[error("duplicate field `{field}` in node type `{node}`")]
    DuplicateField { node: String, field: String },
    #[error("malformed field `{raw}` in node type `{node}`: expected `<name> <type>`")]
    MalformedField { node: String, raw: String },
}

// ------------------------------ Parsing ----------------------------------- //

impl Grammar {
    /// Parse a grammar from `(node name, comma-separated raw fields)` rows.
    /// Hard error on any malformed row; nothing partial is produced.
    pub fn parse(base_name: &str, defs: &[(&str, &str)]) -> Result<Grammar, GrammarError> {
        if defs.is_empty() {
            return Err(GrammarError::Empty);
        }
        let mut nodes = IndexMap::with_capacity(defs.len());
        for (node_name, raw_fields) in defs {
            let node = parse_node_type(node_name, raw_fields)?;
            if nodes.insert(node.name.clone(), node).is_some() {
                return Err(GrammarError::DuplicateNodeType(node_name.to_string()));
            }
        }
        Ok(Grammar {
            base_name: base_name.to_string(),
            nodes,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node types in insertion order.
    pub fn node_types(&self) -> impl Iterator<Item = &NodeType> {
        self.nodes.values()
    }

    /// Distinct `Named` leaf types, first-use order. Feeds the import lines.
    pub fn leaf_types(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for node in self.node_types() {
            for field in &node.fields {
                if let FieldKind::Named(ty) = &field.kind {
                    if !seen.contains(&ty.as_str()) {
                        seen.push(ty.as_str());
                    }
                }
            }
        }
        seen
    }
}

fn parse_node_type(node_name: &str, raw_fields: &str) -> Result<NodeType, GrammarError> {
    let mut fields = Vec::<Field>::new();
    for raw in raw_fields.split(',') {
        let raw = raw.trim();
        let mut tokens = raw.split_whitespace();
        let (name, kind_token) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(name), Some(kind), None) => (name, kind),
            _ => {
                return Err(GrammarError::MalformedField {
                    node: node_name.to_string(),
                    raw: raw.to_string(),
                });
            }
        };
        if fields.iter().any(|f| f.name == name) {
            return Err(GrammarError::DuplicateField {
                node: node_name.to_string(),
                field: name.to_string(),
            });
        }
        let kind = if kind_token == RECURSIVE_TOKEN {
            FieldKind::Recursive
        } else {
            FieldKind::Named(kind_token.to_string())
        };
        fields.push(Field {
            name: name.to_string(),
            kind,
        });
    }
    Ok(NodeType {
        name: node_name.to_string(),
        fields,
    })
}

// ------------------------------ Fixture ----------------------------------- //

/// The expression grammar this interpreter front end is built around.
pub fn expr_grammar() -> Result<Grammar, GrammarError> {
    Grammar::parse(
        "Expr",
        &[
            ("Binary", "left base, operator Token, right base"),
            ("Grouping", "expression base"),
            ("Literal", "value LiteralType"),
            ("Unary", "operator Token, right base"),
        ],
    )
}

// ------------------------------- Tests ------------------------------------ //
