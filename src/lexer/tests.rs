//! Unit tests for the lexer module.

use super::{lexer::tokenize, tokens::TokenKind};

#[test]
fn test_tokenize_keywords() {
    let source = "let if else function".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::If);
    assert_eq!(tokens[2].kind, TokenKind::Else);
    assert_eq!(tokens[3].kind, TokenKind::Function);
}

#[test]
fn test_tokenize_booleans() {
    let source = "true false".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Boolean);
    assert_eq!(tokens[0].value, "true");
    assert_eq!(tokens[1].kind, TokenKind::Boolean);
    assert_eq!(tokens[1].value, "false");
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar_123 _underscore truthy".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    for token in &tokens {
        assert_eq!(token.kind, TokenKind::Identifier);
    }
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar_123");
    assert_eq!(tokens[2].value, "_underscore");
    // A keyword prefix does not make an identifier reserved.
    assert_eq!(tokens[3].value, "truthy");
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 0 100".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "100");
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "multiple words" """#.to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "multiple words");
    assert_eq!(tokens[2].value, "");
}

#[test]
fn test_tokenize_punctuation() {
    let source = "( ) { } = ;".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[3].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[4].kind, TokenKind::Assignment);
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
}

#[test]
fn test_tokenize_commas_are_skipped() {
    let source = "add(a, b, c);".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "let x = 5; // trailing note\nlet y = 10;".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    assert_eq!(tokens.len(), 10);
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[5].kind, TokenKind::Let);
    assert_eq!(tokens[6].value, "y");
}

#[test]
fn test_tokenize_no_eof_sentinel() {
    let source = "let x = 42;".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    assert_eq!(tokens.len(), 5); // let, x, =, 42, ;
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Semicolon);
}

#[test]
fn test_tokenize_spans_are_byte_offsets() {
    let source = "let x".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 4);
}

#[test]
fn test_tokenize_unrecognised_token() {
    let source = "let x = @".to_string();
    let result = tokenize(source, Some("test.lang".to_string()));

    assert!(result.is_err());
    assert_eq!(result.unwrap_err().get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize(String::new(), None).unwrap();
    assert!(tokens.is_empty());
}

#[test]
fn test_tokenize_whitespace_only() {
    let tokens = tokenize("  \n\t  ".to_string(), None).unwrap();
    assert!(tokens.is_empty());
}
