use auric_json::{parse, JsonError, Value};

/// Helper: parse input that must fail and return the error.
fn parse_err(input: &str) -> JsonError {
    match parse(input) {
        Ok(v) => panic!("expected {input:?} to fail, got {v:?}"),
        Err(e) => e,
    }
}

// ============================================================================
// Truncated input
// ============================================================================

#[test]
fn empty_input_is_truncation() {
    assert_eq!(parse_err(""), JsonError::UnexpectedEndOfInput { offset: 0 });
}

#[test]
fn whitespace_only_is_truncation() {
    assert_eq!(parse_err(" \n\t"), JsonError::UnexpectedEndOfInput { offset: 3 });
}

#[test]
fn unterminated_array() {
    assert_eq!(parse_err("[1,2"), JsonError::UnexpectedEndOfInput { offset: 4 });
    assert_eq!(parse_err("["), JsonError::UnexpectedEndOfInput { offset: 1 });
    assert_eq!(parse_err("[1,"), JsonError::UnexpectedEndOfInput { offset: 3 });
}

#[test]
fn unterminated_object() {
    assert_eq!(parse_err("{"), JsonError::UnexpectedEndOfInput { offset: 1 });
    assert_eq!(parse_err(r#"{"a""#), JsonError::UnexpectedEndOfInput { offset: 4 });
    assert_eq!(parse_err(r#"{"a":"#), JsonError::UnexpectedEndOfInput { offset: 5 });
    assert_eq!(parse_err(r#"{"a":1"#), JsonError::UnexpectedEndOfInput { offset: 6 });
}

#[test]
fn unterminated_string() {
    assert_eq!(parse_err(r#""abc"#), JsonError::UnexpectedEndOfInput { offset: 4 });
}

#[test]
fn string_ending_in_backslash() {
    assert_eq!(parse_err("\"abc\\"), JsonError::UnexpectedEndOfInput { offset: 5 });
}

#[test]
fn truncated_unicode_escape() {
    assert_eq!(parse_err("\"\\u12"), JsonError::UnexpectedEndOfInput { offset: 5 });
}

#[test]
fn truncated_surrogate_pair() {
    assert_eq!(
        parse_err("\"\\uD83D"),
        JsonError::UnexpectedEndOfInput { offset: 7 }
    );
}

#[test]
fn truncated_literals() {
    assert_eq!(parse_err("nul"), JsonError::UnexpectedEndOfInput { offset: 3 });
    assert_eq!(parse_err("tr"), JsonError::UnexpectedEndOfInput { offset: 2 });
    assert_eq!(parse_err("[fals"), JsonError::UnexpectedEndOfInput { offset: 5 });
}

#[test]
fn truncation_is_distinguishable() {
    assert!(parse_err("[1,2").is_truncation());
    assert!(!parse_err("[1 2]").is_truncation());
}

// ============================================================================
// Invalid tokens
// ============================================================================

#[test]
fn invalid_lead_character() {
    assert_eq!(
        parse_err("@"),
        JsonError::InvalidToken {
            offset: 0,
            found: '@'
        }
    );
    assert_eq!(
        parse_err("+1"),
        JsonError::InvalidToken {
            offset: 0,
            found: '+'
        }
    );
    assert_eq!(
        parse_err(".5"),
        JsonError::InvalidToken {
            offset: 0,
            found: '.'
        }
    );
}

#[test]
fn invalid_non_ascii_lead_character() {
    assert_eq!(
        parse_err("  é"),
        JsonError::InvalidToken {
            offset: 2,
            found: 'é'
        }
    );
}

#[test]
fn literals_are_case_sensitive() {
    assert_eq!(
        parse_err("False"),
        JsonError::InvalidToken {
            offset: 0,
            found: 'F'
        }
    );
    assert_eq!(
        parse_err("nULL"),
        JsonError::InvalidLiteral {
            offset: 0,
            expected: "null"
        }
    );
}

#[test]
fn invalid_literal_inside_array() {
    assert_eq!(
        parse_err("[1, trve]"),
        JsonError::InvalidLiteral {
            offset: 4,
            expected: "true"
        }
    );
}

#[test]
fn double_comma_is_rejected() {
    assert_eq!(
        parse_err("[1,,2]"),
        JsonError::InvalidToken {
            offset: 3,
            found: ','
        }
    );
}

#[test]
fn lone_comma_is_rejected() {
    assert_eq!(
        parse_err("[,]"),
        JsonError::InvalidToken {
            offset: 1,
            found: ','
        }
    );
    assert_eq!(
        parse_err("{,}"),
        JsonError::InvalidToken {
            offset: 1,
            found: ','
        }
    );
}

#[test]
fn unquoted_object_key_is_rejected() {
    assert_eq!(
        parse_err("{a:1}"),
        JsonError::InvalidToken {
            offset: 1,
            found: 'a'
        }
    );
}

// ============================================================================
// Delimiters
// ============================================================================

#[test]
fn missing_colon() {
    assert_eq!(
        parse_err(r#"{"a" 1}"#),
        JsonError::ExpectedDelimiter {
            offset: 5,
            expected: "':'",
            found: '1'
        }
    );
}

#[test]
fn missing_array_comma() {
    assert_eq!(
        parse_err("[1 2]"),
        JsonError::ExpectedDelimiter {
            offset: 3,
            expected: "',' or ']'",
            found: '2'
        }
    );
}

#[test]
fn missing_object_comma() {
    assert_eq!(
        parse_err(r#"{"a":1 "b":2}"#),
        JsonError::ExpectedDelimiter {
            offset: 7,
            expected: "',' or '}'",
            found: '"'
        }
    );
}

#[test]
fn mismatched_closing_bracket() {
    assert_eq!(
        parse_err("[1}"),
        JsonError::ExpectedDelimiter {
            offset: 2,
            expected: "',' or ']'",
            found: '}'
        }
    );
}

// ============================================================================
// Escapes
// ============================================================================

#[test]
fn unknown_escape() {
    let err = parse_err(r#""a\xb""#);
    assert!(
        matches!(err, JsonError::InvalidEscape { offset: 2, .. }),
        "got {err:?}"
    );
    assert!(err.to_string().contains("\\x"));
}

#[test]
fn non_hex_unicode_escape() {
    let err = parse_err("\"\\u12G4\"");
    assert!(matches!(err, JsonError::InvalidEscape { offset: 1, .. }), "got {err:?}");
}

#[test]
fn unpaired_high_surrogate() {
    let err = parse_err("\"\\uD83D\"");
    assert!(matches!(err, JsonError::InvalidEscape { offset: 1, .. }), "got {err:?}");
    assert!(err.to_string().contains("unpaired high surrogate"));
}

#[test]
fn unpaired_low_surrogate() {
    let err = parse_err("\"\\uDE00\"");
    assert!(matches!(err, JsonError::InvalidEscape { offset: 1, .. }), "got {err:?}");
    assert!(err.to_string().contains("unpaired low surrogate"));
}

#[test]
fn high_surrogate_followed_by_non_surrogate() {
    let err = parse_err("\"\\uD83D\\u0041\"");
    assert!(matches!(err, JsonError::InvalidEscape { offset: 7, .. }), "got {err:?}");
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn bare_minus() {
    assert_eq!(
        parse_err("-"),
        JsonError::InvalidNumber {
            offset: 0,
            text: "-".to_string()
        }
    );
}

#[test]
fn exponent_without_digits() {
    assert_eq!(
        parse_err("[1e]"),
        JsonError::InvalidNumber {
            offset: 1,
            text: "1e".to_string()
        }
    );
}

#[test]
fn integer_overflow_is_an_error() {
    assert_eq!(
        parse_err("9223372036854775808"),
        JsonError::InvalidNumber {
            offset: 0,
            text: "9223372036854775808".to_string()
        }
    );
    assert!(matches!(
        parse_err("-9223372036854775809"),
        JsonError::InvalidNumber { .. }
    ));
}

#[test]
fn double_overflow_is_an_error() {
    assert!(matches!(parse_err("1e400"), JsonError::InvalidNumber { .. }));
    assert!(matches!(
        parse_err("-1.8e308"),
        JsonError::InvalidNumber { .. }
    ));
}

// ============================================================================
// Accessor errors
// ============================================================================

#[test]
fn to_int_on_string_is_type_mismatch() {
    let v = parse(r#""42""#).unwrap();
    assert_eq!(
        v.to_int().unwrap_err(),
        JsonError::TypeMismatch {
            expected: "integer",
            found: "string"
        }
    );
}

#[test]
fn to_double_on_integer_is_type_mismatch() {
    let v = parse("1").unwrap();
    assert_eq!(
        v.to_double().unwrap_err(),
        JsonError::TypeMismatch {
            expected: "double",
            found: "integer"
        }
    );
}

#[test]
fn missing_key() {
    let v = parse(r#"{"a":1}"#).unwrap();
    let err = v.to_object().unwrap().get("zip").unwrap_err();
    assert_eq!(
        err,
        JsonError::KeyNotFound {
            key: "zip".to_string()
        }
    );
    assert_eq!(err.offset(), None);
}

#[test]
fn index_past_end() {
    let v = parse("[1,2,3]").unwrap();
    assert_eq!(
        v.to_array().unwrap().get(3).unwrap_err(),
        JsonError::IndexOutOfRange { index: 3, len: 3 }
    );
}

#[test]
fn accessor_errors_are_lazy() {
    // Parsing succeeds; the mismatch only surfaces on navigation
    let v = parse(r#"{"n": null}"#).unwrap();
    let n = v.pointer("n").unwrap();
    assert_eq!(n, &Value::Null);
    assert!(n.to_bool().is_err());
}

// ============================================================================
// Messages and offsets
// ============================================================================

#[test]
fn error_messages_are_readable() {
    assert_eq!(
        parse_err("").to_string(),
        "unexpected end of input at offset 0"
    );
    assert_eq!(
        parse_err(r#"{"a" 1}"#).to_string(),
        "expected ':' at offset 5, found '1'"
    );
    assert_eq!(
        parse_err("nuLL").to_string(),
        "invalid literal at offset 0: expected 'null'"
    );
    assert_eq!(
        parse_err("9223372036854775808").to_string(),
        "invalid number '9223372036854775808' at offset 0"
    );
    assert_eq!(
        parse("[]").unwrap().to_object().unwrap_err().to_string(),
        "type mismatch: expected object, found array"
    );
}

#[test]
fn parse_errors_carry_offsets() {
    assert_eq!(parse_err("[1, @]").offset(), Some(4));
    assert_eq!(parse_err("[1, 2").offset(), Some(5));
}
