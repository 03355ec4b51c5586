//! The recursive-descent parsing engine.
//!
//! `parse` drives a `Parser` cursor over a borrowed token slice and collects
//! the produced nodes in order. Nested constructs re-enter `parse` on a
//! sub-slice of the same buffer, so every recursive call owns an independent
//! cursor and the recursion is bounded by the input length.

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::scan::{find_matching_delimiter, find_token_kind};

/// A cursor over a borrowed token slice.
///
/// The parser has no state beyond the cursor position; each call to
/// [`Parser::next_node`] is a function of the slice and the cursor alone.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn current_token_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    /// Advances the cursor and returns the token it moved past.
    fn advance(&mut self) -> &Token {
        self.pos += 1;
        &self.tokens[self.pos - 1]
    }

    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// The source position of the token at `index`, or the end of the last
    /// token when `index` is past the slice.
    fn position_at(&self, index: usize) -> Position {
        if let Some(token) = self.tokens.get(index) {
            token.span.start.clone()
        } else if let Some(last) = self.tokens.last() {
            last.span.end.clone()
        } else {
            Position::null()
        }
    }

    /// Consumes a token of the expected kind or fails with `UnexpectedToken`.
    fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if !self.has_tokens() {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: String::from("<end of input>"),
                },
                self.position_at(self.pos),
            ));
        }

        let token = self.current_token();
        if token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            ));
        }

        Ok(self.advance().clone())
    }

    /// Produces the next node, or `None` for an empty production (a stray
    /// `;` is consumed without yielding a node).
    pub fn next_node(&mut self) -> Result<Option<Node>, Error> {
        match self.current_token_kind() {
            TokenKind::Boolean => {
                let token = self.advance();
                Ok(Some(Node::Boolean(token.value == "true")))
            }
            TokenKind::Number => self.parse_number().map(Some),
            TokenKind::String => {
                let token = self.advance();
                Ok(Some(Node::String(token.value.clone())))
            }
            TokenKind::Identifier => self.parse_identifier().map(Some),
            TokenKind::If => self.parse_if().map(Some),
            TokenKind::Let => self.parse_let().map(Some),
            TokenKind::Function => self.parse_function_decl().map(Some),
            TokenKind::Semicolon => {
                self.advance();
                Ok(None)
            }
            _ => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: self.current_token().value.clone(),
                },
                self.current_token().span.start.clone(),
            )),
        }
    }

    fn parse_number(&mut self) -> Result<Node, Error> {
        let token = self.current_token();

        match token.value.parse::<i64>() {
            Ok(value) => {
                self.advance();
                Ok(Node::Number(value))
            }
            Err(_) => Err(Error::new(
                ErrorImpl::NumberFormat {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            )),
        }
    }

    /// An identifier followed by `(` starts a function call; anything else
    /// is a bare variable reference.
    fn parse_identifier(&mut self) -> Result<Node, Error> {
        let next_is_paren = self
            .tokens
            .get(self.pos + 1)
            .is_some_and(|token| token.kind == TokenKind::OpenParen);

        if next_is_paren {
            self.parse_function_call()
        } else {
            let token = self.advance();
            Ok(Node::Identifier(token.value.clone()))
        }
    }

    /// `<identifier> ( <arguments> ) ;`
    fn parse_function_call(&mut self) -> Result<Node, Error> {
        let name = self.advance().value.clone();
        let paren = self.advance().span.start.clone();

        let close_paren =
            find_matching_delimiter(self.tokens, TokenKind::OpenParen, TokenKind::CloseParen, self.pos)
                .ok_or_else(|| Error::new(ErrorImpl::FunctionMissingRightParen, paren))?;

        let arguments = parse(&self.tokens[self.pos..close_paren])?;

        let terminated = self
            .tokens
            .get(close_paren + 1)
            .is_some_and(|token| token.kind == TokenKind::Semicolon);
        if !terminated {
            return Err(Error::new(
                ErrorImpl::FunctionMissingSemicolon,
                self.position_at(close_paren + 1),
            ));
        }

        self.pos = close_paren + 2;

        Ok(Node::FunctionCall { name, arguments })
    }

    /// `if <condition> { <then> }` with an optional `else { <else> }`.
    ///
    /// The condition is every token between `if` and the first `{`, and its
    /// sub-parse must yield exactly one node.
    fn parse_if(&mut self) -> Result<Node, Error> {
        let keyword = self.advance().span.start.clone();

        let open_brace = find_token_kind(self.tokens, TokenKind::OpenCurly, self.pos)
            .ok_or_else(|| Error::new(ErrorImpl::IfMissingLeftBrace, keyword.clone()))?;

        let mut condition = parse(&self.tokens[self.pos..open_brace])?;
        if condition.len() != 1 {
            return Err(Error::new(
                ErrorImpl::MalformedCondition {
                    nodes: condition.len(),
                },
                keyword,
            ));
        }

        let close_brace = find_matching_delimiter(
            self.tokens,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            open_brace + 1,
        )
        .ok_or_else(|| Error::new(ErrorImpl::IfMissingRightBrace, self.position_at(open_brace)))?;

        let then_body = parse(&self.tokens[open_brace + 1..close_brace])?;
        self.pos = close_brace + 1;

        let else_body = if self.has_tokens() && self.current_token_kind() == TokenKind::Else {
            let else_keyword = self.advance().span.start.clone();

            let else_open = find_token_kind(self.tokens, TokenKind::OpenCurly, self.pos)
                .ok_or_else(|| Error::new(ErrorImpl::ElseMissingRightBrace, else_keyword.clone()))?;
            let else_close = find_matching_delimiter(
                self.tokens,
                TokenKind::OpenCurly,
                TokenKind::CloseCurly,
                else_open + 1,
            )
            .ok_or_else(|| Error::new(ErrorImpl::ElseMissingRightBrace, else_keyword))?;

            let nodes = parse(&self.tokens[else_open + 1..else_close])?;
            self.pos = else_close + 1;
            Some(nodes)
        } else {
            None
        };

        Ok(Node::If {
            condition: Box::new(condition.remove(0)),
            then_body,
            else_body,
        })
    }

    /// `let <identifier> = <value> ;`
    ///
    /// The token positions are fixed and the value is exactly one token;
    /// any deviation is `MalformedLet`. The value token still runs through
    /// the general classifier, so every literal kind is accepted there.
    fn parse_let(&mut self) -> Result<Node, Error> {
        if self.pos + 4 >= self.tokens.len() {
            return Err(Error::new(
                ErrorImpl::MalformedLet {
                    token: String::from("<end of input>"),
                },
                self.position_at(self.tokens.len()),
            ));
        }

        let expected = [
            (self.pos + 1, TokenKind::Identifier),
            (self.pos + 2, TokenKind::Assignment),
            (self.pos + 4, TokenKind::Semicolon),
        ];
        for (index, kind) in expected {
            if self.tokens[index].kind != kind {
                return Err(Error::new(
                    ErrorImpl::MalformedLet {
                        token: self.tokens[index].value.clone(),
                    },
                    self.position_at(index),
                ));
            }
        }

        let name = self.tokens[self.pos + 1].value.clone();

        let mut value = parse(&self.tokens[self.pos + 3..self.pos + 4])?;
        if value.len() != 1 {
            return Err(Error::new(
                ErrorImpl::MalformedLet {
                    token: self.tokens[self.pos + 3].value.clone(),
                },
                self.position_at(self.pos + 3),
            ));
        }

        self.pos += 5;

        Ok(Node::Let {
            name,
            value: Box::new(value.remove(0)),
        })
    }

    /// `function <identifier> ( <parameters> ) { <body> }`
    fn parse_function_decl(&mut self) -> Result<Node, Error> {
        self.advance();

        let name = self.expect(TokenKind::Identifier)?.value;
        let paren = self.expect(TokenKind::OpenParen)?.span.start.clone();

        let close_paren =
            find_matching_delimiter(self.tokens, TokenKind::OpenParen, TokenKind::CloseParen, self.pos)
                .ok_or_else(|| Error::new(ErrorImpl::FunctionMissingRightParen, paren))?;

        let parameters = parse(&self.tokens[self.pos..close_paren])?;
        self.pos = close_paren + 1;

        let brace = self.expect(TokenKind::OpenCurly)?.span.start.clone();

        let close_brace = find_matching_delimiter(
            self.tokens,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            self.pos,
        )
        .ok_or_else(|| Error::new(ErrorImpl::FunctionMissingRightBrace, brace))?;

        let body = parse(&self.tokens[self.pos..close_brace])?;
        self.pos = close_brace + 1;

        Ok(Node::FunctionDecl {
            name,
            parameters,
            body,
        })
    }
}

/// Parses a token slice into an ordered sequence of top-level nodes.
///
/// Stops at the first malformed construct; no partial AST is returned.
pub fn parse(tokens: &[Token]) -> Result<Vec<Node>, Error> {
    let mut parser = Parser::new(tokens);
    let mut nodes = Vec::new();

    while parser.has_tokens() {
        if let Some(node) = parser.next_node()? {
            nodes.push(node);
        }
    }

    Ok(nodes)
}
