// tests/parser_tests.rs

use sift_lang::ast::{Expr, FieldKey, Token, TokenKind};
use sift_lang::parser::{parse, Expected, Found, ParseError, Parser};
use sift_lang::value::Literal;
use sift_lang::LexError;

fn v(s: &str) -> Expr {
    Expr::value(s)
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_literals() {
    assert_eq!(parse("hello").unwrap(), v("hello"));
    assert_eq!(parse("'hello world'").unwrap(), v("hello world"));
    assert_eq!(parse("42").unwrap(), Expr::Value(Literal::Number(42.0)));
    assert_eq!(parse("true").unwrap(), Expr::Value(Literal::Boolean(true)));
    assert_eq!(parse("null").unwrap(), Expr::Value(Literal::Null));
}

// ============================================================================
// Right-associative chains, no precedence
// ============================================================================

#[test]
fn test_and_then_or_nests_right() {
    // Should be: And(a, Or(b, c))
    assert_eq!(
        parse("a & b | c").unwrap(),
        Expr::and(v("a"), Expr::or(v("b"), v("c")))
    );
}

#[test]
fn test_or_then_and_nests_right() {
    assert_eq!(
        parse("a | b & c").unwrap(),
        Expr::or(v("a"), Expr::and(v("b"), v("c")))
    );
}

#[test]
fn test_long_chain_folds_right() {
    assert_eq!(
        parse("a & b & c | d").unwrap(),
        Expr::and(v("a"), Expr::and(v("b"), Expr::or(v("c"), v("d"))))
    );
}

#[test]
fn test_parentheses_limit_scope() {
    // Should be: Or(And(a, b), c)
    assert_eq!(
        parse("(a & b) | c").unwrap(),
        Expr::or(Expr::and(v("a"), v("b")), v("c"))
    );
    assert_eq!(parse("((a))").unwrap(), v("a"));
}

// ============================================================================
// Prefix operators swallow the rest of the group
// ============================================================================

#[test]
fn test_not_negates_whole_chain() {
    assert_eq!(
        parse("!a & b").unwrap(),
        Expr::not(Expr::and(v("a"), v("b")))
    );
}

#[test]
fn test_not_stops_at_group_end() {
    assert_eq!(
        parse("(!a) & b").unwrap(),
        Expr::and(Expr::not(v("a")), v("b"))
    );
    assert_eq!(
        parse("(!a & b) | c").unwrap(),
        Expr::or(Expr::not(Expr::and(v("a"), v("b"))), v("c"))
    );
}

#[test]
fn test_double_negation() {
    assert_eq!(parse("!!a").unwrap(), Expr::not(Expr::not(v("a"))));
}

#[test]
fn test_field_scopes_whole_chain() {
    assert_eq!(
        parse("$key: a & b").unwrap(),
        Expr::field(FieldKey::Key, Expr::and(v("a"), v("b")))
    );
}

#[test]
fn test_field_inside_parentheses() {
    assert_eq!(
        parse("($key: id) | ($type: number)").unwrap(),
        Expr::or(
            Expr::field(FieldKey::Key, v("id")),
            Expr::field(FieldKey::Type, v("number")),
        )
    );
}

#[test]
fn test_nested_field_parses() {
    // Nesting is a runtime error, not a syntax error
    assert_eq!(
        parse("$key: $value: \"x\"").unwrap(),
        Expr::field(FieldKey::Key, Expr::field(FieldKey::Value, v("x")))
    );
}

#[test]
fn test_type_field_yields_value_not_type_literal() {
    assert_eq!(
        parse("$type: object").unwrap(),
        Expr::field(FieldKey::Type, v("object"))
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_colon() {
    assert_eq!(
        parse("$key"),
        Err(ParseError::Unexpected {
            expected: Expected::Token(TokenKind::Colon),
            found: Found::EndOfInput,
        })
    );
    assert_eq!(
        parse("$key name"),
        Err(ParseError::Unexpected {
            expected: Expected::Token(TokenKind::Colon),
            found: Found::Token(TokenKind::StringLiteral),
        })
    );
}

#[test]
fn test_missing_close_paren() {
    assert_eq!(
        parse("(a & b"),
        Err(ParseError::Unexpected {
            expected: Expected::Token(TokenKind::RightParen),
            found: Found::EndOfInput,
        })
    );
}

#[test]
fn test_trailing_tokens() {
    assert_eq!(
        parse("a b"),
        Err(ParseError::Unexpected {
            expected: Expected::EndOfInput,
            found: Found::Token(TokenKind::StringLiteral),
        })
    );
    assert_eq!(
        parse("a)"),
        Err(ParseError::Unexpected {
            expected: Expected::EndOfInput,
            found: Found::Token(TokenKind::RightParen),
        })
    );
}

#[test]
fn test_missing_operand() {
    for input in ["", "a &", "!", "$value:", "()"] {
        assert!(
            matches!(
                parse(input),
                Err(ParseError::Unexpected {
                    expected: Expected::Expression,
                    ..
                })
            ),
            "Failed for input: {:?}",
            input
        );
    }
}

#[test]
fn test_operator_in_operand_position() {
    assert_eq!(
        parse("& a"),
        Err(ParseError::Unexpected {
            expected: Expected::Expression,
            found: Found::Token(TokenKind::AndOperator),
        })
    );
    assert_eq!(
        parse(": a"),
        Err(ParseError::Unexpected {
            expected: Expected::Expression,
            found: Found::Token(TokenKind::Colon),
        })
    );
}

#[test]
fn test_lex_errors_surface_through_parse() {
    assert_eq!(
        parse("\"open"),
        Err(ParseError::Lex(LexError::UnterminatedString {
            quote: '"',
            position: 0
        }))
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        parse("$key").unwrap_err().to_string(),
        "expected Colon, but found end of input"
    );
    assert_eq!(
        parse("a b").unwrap_err().to_string(),
        "expected end of input, but found StringLiteral"
    );
}

// ============================================================================
// Parser over explicit tokens
// ============================================================================

#[test]
fn test_parser_from_tokens() {
    let tokens = vec![
        Token::FieldKey(FieldKey::Value),
        Token::Colon,
        Token::Number(7.0),
    ];
    let expr = Parser::new(tokens).parse().unwrap();
    assert_eq!(expr, Expr::field(FieldKey::Value, Expr::value(7.0)));
}

#[test]
fn test_max_depth() {
    let nested = "!!!!a";
    assert!(Parser::new(sift_lang::lex(nested).unwrap())
        .with_max_depth(4)
        .parse()
        .is_ok());
    assert_eq!(
        Parser::new(sift_lang::lex(nested).unwrap())
            .with_max_depth(3)
            .parse(),
        Err(ParseError::TooDeep { limit: 3 })
    );
}

#[test]
fn test_parse_is_deterministic() {
    let source = "!($key: id | uuid) & ($type: string | number)";
    assert_eq!(parse(source).unwrap(), parse(source).unwrap());
}
