/// AST (Abstract Syntax Tree) module
/// Contains the node type produced by the parser and its source rendering
pub mod ast;
