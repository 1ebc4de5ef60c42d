use glintsh::token::{Keyword, TokenKind};
use glintsh::tokenize;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize("<test>", source)
        .expect("should lex")
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn lexes_integer_and_float_literals() {
    let k = kinds("42 3.14");
    assert_eq!(k[0], TokenKind::Int(42));
    assert_eq!(k[1], TokenKind::Float(3.14));
}

#[test]
fn rejects_a_number_with_two_dots() {
    let err = tokenize("<test>", "1.2.3").unwrap_err();
    assert!(err.detail.contains("malformed"));
}

#[test]
fn lexes_string_escapes() {
    let k = kinds("\"a\\nb\\t\\\"c\"");
    assert_eq!(k[0], TokenKind::Str("a\nb\t\"c".to_string()));
}

#[test]
fn unterminated_string_is_a_lex_error() {
    let err = tokenize("<test>", "\"abc").unwrap_err();
    assert!(err.detail.contains("unterminated"));
}

#[test]
fn unknown_escape_is_a_lex_error() {
    let err = tokenize("<test>", "\"\\q\"").unwrap_err();
    assert!(err.detail.contains("escape"));
}

#[test]
fn keywords_are_not_identifiers() {
    let k = kinds("if var and");
    assert_eq!(k[0], TokenKind::Keyword(Keyword::If));
    assert_eq!(k[1], TokenKind::Keyword(Keyword::Var));
    assert_eq!(k[2], TokenKind::Keyword(Keyword::And));
}

#[test]
fn semicolon_and_newline_both_produce_newline_tokens() {
    let k = kinds("1; 2\n3");
    assert_eq!(k[1], TokenKind::Newline);
    assert_eq!(k[3], TokenKind::Newline);
}

#[test]
fn comments_are_skipped() {
    let k = kinds("1 # trailing comment\n2");
    assert_eq!(k[0], TokenKind::Int(1));
    assert_eq!(k[1], TokenKind::Newline);
    assert_eq!(k[2], TokenKind::Int(2));
}

#[test]
fn multi_char_operators() {
    let k = kinds("== != <= >= ->");
    assert_eq!(
        k,
        vec![
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::LtEq,
            TokenKind::GtEq,
            TokenKind::Arrow,
        ]
    );
}

#[test]
fn bare_bang_is_a_lex_error() {
    let err = tokenize("<test>", "1 ! 2").unwrap_err();
    assert!(err.detail.contains("unexpected character"));
}

#[test]
fn every_token_stream_ends_with_eof() {
    let k = kinds("1");
    assert_eq!(*k.last().unwrap(), TokenKind::Eof);
}
