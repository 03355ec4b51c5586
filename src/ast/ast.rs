use std::fmt::Display;

/// One syntactic construct.
///
/// Ownership is strictly tree-shaped: every nested node or node sequence is
/// uniquely owned by its parent, so the whole AST is dropped in one pass.
/// Nested sequences may be empty but are never absent; `else_body` is `None`
/// only when no `else` keyword followed the if-body.
///
/// A bare identifier (one not followed by `(`) is a real production here and
/// parses to `Identifier`. It doubles as variable reference, if condition
/// and function parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Boolean(bool),
    Number(i64),
    String(String),
    Identifier(String),
    If {
        condition: Box<Node>,
        then_body: Vec<Node>,
        else_body: Option<Vec<Node>>,
    },
    Let {
        name: String,
        value: Box<Node>,
    },
    FunctionCall {
        name: String,
        arguments: Vec<Node>,
    },
    FunctionDecl {
        name: String,
        parameters: Vec<Node>,
        body: Vec<Node>,
    },
}

fn write_sequence(f: &mut std::fmt::Formatter<'_>, nodes: &[Node]) -> std::fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", node)?;
    }
    Ok(())
}

/// Renders the node back into source form the lexer and parser accept, so
/// printing an AST and re-parsing it reproduces an equal AST.
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Boolean(value) => write!(f, "{}", value),
            Node::Number(value) => write!(f, "{}", value),
            Node::String(value) => write!(f, "\"{}\"", value),
            Node::Identifier(name) => write!(f, "{}", name),
            Node::If {
                condition,
                then_body,
                else_body,
            } => {
                write!(f, "if {} {{ ", condition)?;
                write_sequence(f, then_body)?;
                write!(f, " }}")?;
                if let Some(else_body) = else_body {
                    write!(f, " else {{ ")?;
                    write_sequence(f, else_body)?;
                    write!(f, " }}")?;
                }
                Ok(())
            }
            Node::Let { name, value } => write!(f, "let {} = {};", name, value),
            Node::FunctionCall { name, arguments } => {
                write!(f, "{}(", name)?;
                write_sequence(f, arguments)?;
                write!(f, ");")
            }
            Node::FunctionDecl {
                name,
                parameters,
                body,
            } => {
                write!(f, "function {}(", name)?;
                write_sequence(f, parameters)?;
                write!(f, ") {{ ")?;
                write_sequence(f, body)?;
                write!(f, " }}")
            }
        }
    }
}
