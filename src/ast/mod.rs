/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The node model produced by the parser
/// - pretty: Indented tree rendering for diagnostics
pub mod ast;
pub mod pretty;

#[cfg(test)]
mod tests;
