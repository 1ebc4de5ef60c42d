use glintsh::ast::NodeKind;
use glintsh::{parse, tokenize};

fn parse_src(src: &str) -> glintsh::Ast {
    let tokens = tokenize("<test>", src).expect("should lex");
    parse(tokens).expect("should parse")
}

#[test]
fn single_statement_program_is_not_wrapped_in_a_list() {
    let ast = parse_src("1 + 1");
    match ast.kind {
        NodeKind::Program(stmts) => assert_eq!(stmts.len(), 1),
        other => panic!("expected Program, got {:?}", other),
    }
}

#[test]
fn node_spans_enclose_their_children() {
    let ast = parse_src("1 + 2 * 3");
    let stmt = match &ast.kind {
        NodeKind::Program(stmts) => &stmts[0],
        _ => unreachable!(),
    };
    if let NodeKind::BinOp(left, _, right) = &stmt.kind {
        assert!(stmt.span.start.offset <= left.span.start.offset);
        assert!(stmt.span.end.offset >= right.span.end.offset);
    } else {
        panic!("expected a BinOp at the top");
    }
}

#[test]
fn missing_closing_paren_is_a_syntax_error() {
    let tokens = tokenize("<test>", "(1 + 2").unwrap();
    let err = parse(tokens).unwrap_err();
    assert!(err.detail.contains("')'"));
}

#[test]
fn if_with_all_expression_form_arms_needs_no_end() {
    // every arm is expression-form, so `parse_src` succeeding (no trailing `end` in source) is
    // itself the assertion.
    let _ = parse_src(r#"if 1 < 2 then "a" elif 1 > 2 then "b" else "c""#);
}

#[test]
fn call_is_not_chained() {
    // `f(1)(2)` is not valid syntax: only a single call suffix is parsed per call production.
    let tokens = tokenize("<test>", "f(1)(2)").unwrap();
    assert!(parse(tokens).is_err());
}
