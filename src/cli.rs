//! Minimal CLI: ast | operation
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::codegen::Codegen;
use crate::codegen::op::OperationSpec;
use crate::grammar;
use crate::writer;

/// All generated artifacts land under this directory.
const OUT_DIR: &str = "src";

/// Fixed target of the AST-generation path.
const AST_FILE: &str = "ast.rs";

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate AST node boilerplate: the sum type, visitor trait and dispatch,
/// or an empty visitor scaffold for a new traversal operation
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// regenerate src/ast.rs from the built-in expression grammar
    Ast,
    /// scaffold an empty-bodied visitor impl for a new traversal operation
    Operation(OperationArgs),
}

#[derive(Args, Debug, Clone)]
struct OperationArgs {
    /// name of the operation type, e.g. AstPrinter
    name: String,

    /// visitor result type the impl is instantiated with, e.g. String
    result_ty: String,

    /// output file name, relative to src/
    file_name: String,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        // A malformed grammar aborts here, before any write is attempted.
        let grammar = grammar::expr_grammar()?;
        match &self.cmd {
            Command::Ast => {
                let mut cg = Codegen::new();
                cg.emit_ast(&grammar);
                writer::write_source(&out_path(AST_FILE), &cg.into_string());
            }
            Command::Operation(args) => {
                let spec = OperationSpec {
                    name: args.name.clone(),
                    result_ty: args.result_ty.clone(),
                    file_name: args.file_name.clone(),
                };
                let mut cg = Codegen::new();
                cg.emit_operation(&grammar, &spec);
                writer::write_source(&out_path(&spec.file_name), &cg.into_string());
            }
        }
        Ok(())
    }
}

fn out_path(file_name: &str) -> PathBuf {
    Path::new(OUT_DIR).join(file_name)
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
