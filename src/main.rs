pub mod cli;
pub mod codegen;
pub mod grammar;
pub mod writer;

use colored::Colorize;

/// Render the built-in grammar to stdout instead of src/ast.rs.
/// Handy when tweaking the emitters.
#[allow(unused)]
fn print_generated_ast() -> anyhow::Result<()> {
    let grammar = grammar::expr_grammar()?;
    let mut cg = codegen::Codegen::new();
    cg.emit_ast(&grammar);
    println!("{}", cg.into_string());
    Ok(())
}

fn main() {
    let command_line_interface = cli::CommandLineInterface::load();
    if let Err(error) = command_line_interface.run() {
        eprintln!("{} {error}", "error:".red().bold());
        std::process::exit(1);
    }
}
