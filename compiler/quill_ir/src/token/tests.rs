use super::*;
use pretty_assertions::assert_eq;

fn sp(start: u32, end: u32) -> Span {
    Span::new(start, end)
}

#[test]
fn table_tokens_display_through_tables() {
    let tables = LexTables::DEFAULT;
    assert_eq!(Token::operator(4, sp(0, 1)).display_value(&tables), "=");
    assert_eq!(Token::keyword(1, sp(0, 5)).display_value(&tables), "float");
    assert_eq!(Token::punctuator(0, sp(0, 1)).display_value(&tables), ";");
}

#[test]
fn out_of_range_index_renders_error() {
    let tables = LexTables::DEFAULT;
    assert_eq!(
        Token::operator(99, sp(0, 1)).display_value(&tables),
        ERROR_VALUE
    );
    assert_eq!(
        Token::keyword(3, sp(0, 1)).display_value(&tables),
        ERROR_VALUE
    );
}

#[test]
fn text_tokens_display_their_text() {
    let tables = LexTables::DEFAULT;
    assert_eq!(
        Token::string_literal("hi there".into(), sp(0, 10)).display_value(&tables),
        "hi there"
    );
    assert_eq!(
        Token::identifier("x".into(), sp(0, 1)).display_value(&tables),
        "x"
    );
    assert_eq!(
        Token::unclassified(";".into(), sp(0, 1)).display_value(&tables),
        ";"
    );
    assert_eq!(
        Token::integer_literal(-7, sp(0, 2)).display_value(&tables),
        "-7"
    );
}

#[test]
fn promote_only_unclassified() {
    let mut tok = Token::unclassified("x".into(), sp(4, 5));
    assert!(tok.promote_to_identifier());
    assert_eq!(tok, Token::identifier("x".into(), sp(4, 5)));
    assert!(!tok.promote_to_identifier());

    let mut kw = Token::keyword(0, sp(0, 3));
    assert!(!kw.promote_to_identifier());
    assert_eq!(kw.kind(), TokenKind::Keyword);
}

#[test]
fn resolve_integer_releases_text() {
    let mut tok = Token::unclassified("42".into(), sp(8, 10));
    assert!(tok.resolve_integer(42));
    assert_eq!(tok.kind(), TokenKind::Literal);
    assert_eq!(tok.literal(), Some(LiteralKind::Integer));
    assert_eq!(tok.integer(), Some(42));
    assert_eq!(tok.text(), None);
    assert_eq!(tok.span(), sp(8, 10));
    assert!(!tok.resolve_integer(1));
}

#[test]
fn payload_accessors() {
    let kw = Token::keyword(2, sp(0, 6));
    assert_eq!(kw.table_index(), Some(2));
    assert_eq!(kw.text(), None);
    assert_eq!(kw.literal(), None);

    let s = Token::string_literal(String::new(), sp(0, 2));
    assert_eq!(s.text(), Some(""));
    assert_eq!(s.literal(), Some(LiteralKind::String));
    assert_eq!(s.value(), &TokenValue::Text(String::new()));
}

#[test]
fn kind_and_literal_names() {
    assert_eq!(TokenKind::Unclassified.to_string(), "UNCLASSIFIED");
    assert_eq!(TokenKind::Punctuator.name(), "PUNCTUATOR");
    assert_eq!(LiteralKind::Float.name(), "FLOAT_LITERAL");
}

#[test]
fn token_list_editing() {
    let mut list = TokenList::new();
    list.push(Token::keyword(0, sp(0, 3)));
    list.push(Token::unclassified("y".into(), sp(6, 7)));
    list.insert(1, Token::unclassified("x".into(), sp(4, 5)));
    assert_eq!(list.len(), 3);
    assert_eq!(list[1].text(), Some("x"));

    let removed = list.remove(2);
    assert_eq!(removed.text(), Some("y"));
    assert_eq!(list.get(1).map(Token::span), Some(sp(4, 5)));
    assert!(list.get(2).is_none());

    if let Some(tok) = list.get_mut(1) {
        tok.promote_to_identifier();
    }
    assert_eq!(list.unresolved().count(), 0);
    assert_eq!(
        list.into_vec(),
        vec![
            Token::keyword(0, sp(0, 3)),
            Token::identifier("x".into(), sp(4, 5)),
        ]
    );
}

#[test]
fn unresolved_reports_positions() {
    let list = TokenList::from_vec(vec![
        Token::unclassified("a".into(), sp(0, 1)),
        Token::operator(0, sp(1, 2)),
        Token::unclassified("b".into(), sp(2, 3)),
    ]);
    let positions: Vec<usize> = list.unresolved().map(|(i, _)| i).collect();
    assert_eq!(positions, vec![0, 2]);
}
