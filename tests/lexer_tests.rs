// tests/lexer_tests.rs

use sift_lang::ast::{FieldKey, Token};
use sift_lang::lexer::{lex, LexError, Lexer};

// ============================================================================
// Single Character Tokens
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("&", Token::And),
        ("|", Token::Or),
        ("!", Token::Not),
        (":", Token::Colon),
        ("(", Token::LParen),
        (")", Token::RParen),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token().unwrap();
        assert_eq!(token, Some(expected), "Failed for input: {}", input);
        assert_eq!(lexer.next_token().unwrap(), None);
    }
}

#[test]
fn test_operators_without_spaces() {
    let tokens = lex("!(a&b)|c").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Not,
            Token::LParen,
            Token::String("a".into()),
            Token::And,
            Token::String("b".into()),
            Token::RParen,
            Token::Or,
            Token::String("c".into()),
        ]
    );
}

// ============================================================================
// Field Keys
// ============================================================================

#[test]
fn test_field_key_with_quoted_string() {
    let tokens = lex("$key: \"name\"").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::FieldKey(FieldKey::Key),
            Token::Colon,
            Token::String("name".into()),
        ]
    );
}

#[test]
fn test_all_field_keys() {
    let tokens = lex("$key $value $type").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::FieldKey(FieldKey::Key),
            Token::FieldKey(FieldKey::Value),
            Token::FieldKey(FieldKey::Type),
        ]
    );
}

#[test]
fn test_unknown_field_key() {
    let err = lex("$name: x").unwrap_err();
    assert_eq!(
        err,
        LexError::ExpectedFieldKey {
            found: Some('n'),
            position: 1
        }
    );
}

#[test]
fn test_dollar_at_end() {
    let err = lex("$").unwrap_err();
    assert_eq!(
        err,
        LexError::ExpectedFieldKey {
            found: None,
            position: 1
        }
    );
    assert!(err.to_string().contains("end of input"));
}

#[test]
fn test_truncated_field_key_at_end() {
    assert_eq!(
        lex("$ty").unwrap_err(),
        LexError::ExpectedFieldKey {
            found: Some('t'),
            position: 1
        }
    );
}

#[test]
fn test_field_key_is_matched_as_prefix() {
    // The word after `$` is matched by prefix; the rest lexes on its own.
    let tokens = lex("$keys").unwrap();
    assert_eq!(
        tokens,
        vec![Token::FieldKey(FieldKey::Key), Token::String("s".into())]
    );
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_quoted_strings() {
    let test_cases = vec![
        ("\"hello world\"", "hello world"),
        ("'hello world'", "hello world"),
        ("\"\"", ""),
        ("''", ""),
        ("'say \"hi\"'", "say \"hi\""),
        ("\"it's\"", "it's"),
        ("\"a & b | !c\"", "a & b | !c"),
        ("\"back\\slash\"", "back\\slash"),
    ];

    for (input, expected) in test_cases {
        let tokens = lex(input).unwrap();
        assert_eq!(
            tokens,
            vec![Token::String(expected.to_string())],
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_unterminated_string() {
    assert_eq!(
        lex("\"unterminated"),
        Err(LexError::UnterminatedString {
            quote: '"',
            position: 0
        })
    );
    assert_eq!(
        lex("a & 'open"),
        Err(LexError::UnterminatedString {
            quote: '\'',
            position: 4
        })
    );
    assert!(lex("\"").is_err());
}

#[test]
fn test_bare_words() {
    let tokens = lex("hello item_2 _x").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::String("hello".into()),
            Token::String("item_2".into()),
            Token::String("_x".into()),
        ]
    );
}

#[test]
fn test_unexpected_character() {
    assert_eq!(
        lex("a # b"),
        Err(LexError::UnexpectedChar {
            found: '#',
            position: 2
        })
    );
    assert!(lex("café").is_err());
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_numbers() {
    let test_cases = vec![
        ("42", 42.0),
        ("-1.5", -1.5),
        ("+3", 3.0),
        (".5", 0.5),
        ("5.", 5.0),
        ("0", 0.0),
    ];

    for (input, expected) in test_cases {
        assert_eq!(
            lex(input).unwrap(),
            vec![Token::Number(expected)],
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_number_followed_by_word() {
    assert_eq!(
        lex("42abc").unwrap(),
        vec![Token::Number(42.0), Token::String("abc".into())]
    );
}

#[test]
fn test_malformed_numbers() {
    for input in ["1.2.3", "-", "+", ".", "1-2", "--1"] {
        match lex(input) {
            Err(LexError::InvalidNumber { text, position }) => {
                assert_eq!(text, input);
                assert_eq!(position, 0);
            }
            other => panic!("Expected invalid number for {}, got {:?}", input, other),
        }
    }
}

// ============================================================================
// Keywords & Whitespace
// ============================================================================

#[test]
fn test_keyword_literals() {
    assert_eq!(
        lex("true false null").unwrap(),
        vec![Token::Boolean(true), Token::Boolean(false), Token::Null]
    );
    // Quoted keywords stay strings
    assert_eq!(lex("\"true\"").unwrap(), vec![Token::String("true".into())]);
}

#[test]
fn test_whitespace_is_skipped() {
    assert_eq!(
        lex("  \t$value\n:\r\n 1  ").unwrap(),
        vec![
            Token::FieldKey(FieldKey::Value),
            Token::Colon,
            Token::Number(1.0),
        ]
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(lex("").unwrap(), vec![]);
    assert_eq!(lex("   ").unwrap(), vec![]);
}

#[test]
fn test_first_error_wins() {
    // Both the field key and the string are broken; the field key comes first.
    assert!(matches!(
        lex("$nope 'open"),
        Err(LexError::ExpectedFieldKey { .. })
    ));
}
