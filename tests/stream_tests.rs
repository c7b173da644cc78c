//! Tests for the public token stream cursor.

use fxtok::{Token, TokenStream, TokenSubType, TokenType};

fn operand(value: &str) -> Token {
    Token::new(value, TokenType::Operand, TokenSubType::Number)
}

#[test]
fn test_cursor_starts_before_first_token() {
    let stream = TokenStream::from_tokens(vec![operand("1")]);
    assert!(stream.current().is_none());
    assert!(stream.bof());
}

#[test]
fn test_first_token_has_no_predecessor() {
    let mut stream = TokenStream::from_tokens(vec![operand("1"), operand("2")]);
    assert!(stream.move_next());
    // The cursor sits on the first token: still "beginning of stream".
    assert!(stream.bof());
    assert!(stream.previous().is_none());
}

#[test]
fn test_peek_does_not_move_cursor() {
    let mut stream = TokenStream::from_tokens(vec![operand("1"), operand("2"), operand("3")]);
    stream.move_next();
    stream.move_next();
    assert_eq!(stream.current().unwrap().value, "2");
    assert_eq!(stream.previous().unwrap().value, "1");
    assert_eq!(stream.peek_next().unwrap().value, "3");
    assert_eq!(stream.current().unwrap().value, "2");
}

#[test]
fn test_move_next_stops_at_last_token() {
    let mut stream = TokenStream::from_tokens(vec![operand("1"), operand("2")]);
    assert!(stream.move_next());
    assert!(stream.move_next());
    assert!(stream.eof());
    assert!(!stream.move_next());
    assert_eq!(stream.current().unwrap().value, "2");
    assert!(stream.peek_next().is_none());
}

#[test]
fn test_reset_allows_rewalking() {
    let mut stream = TokenStream::from_tokens(vec![operand("1"), operand("2")]);
    let mut first_pass = Vec::new();
    while stream.move_next() {
        first_pass.push(stream.current().unwrap().value.clone());
    }
    stream.reset();
    let mut second_pass = Vec::new();
    while stream.move_next() {
        second_pass.push(stream.current().unwrap().value.clone());
    }
    assert_eq!(first_pass, vec!["1", "2"]);
    assert_eq!(first_pass, second_pass);
}

#[test]
fn test_empty_stream_is_bof_and_eof() {
    let mut stream = TokenStream::new();
    assert!(stream.bof());
    assert!(stream.eof());
    assert!(!stream.move_next());
    assert!(stream.is_empty());
    assert_eq!(stream.len(), 0);
}

#[test]
fn test_push_appends_without_moving_cursor() {
    let mut stream = TokenStream::new();
    stream.push(operand("1"));
    stream.push(operand("2"));
    assert_eq!(stream.len(), 2);
    assert!(stream.current().is_none());
    assert_eq!(stream.last().unwrap().value, "2");
    assert_eq!(stream.items()[0].value, "1");
}

#[test]
fn test_into_tokens_round_trip() {
    let tokens = vec![operand("1"), operand("2")];
    let stream = TokenStream::from_tokens(tokens.clone());
    assert_eq!(stream.into_tokens(), tokens);
}
