use super::*;

#[test]
fn walks_bytes_then_reports_eof() {
    let mut cursor = Cursor::new(b"ab");
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.prev(), None);
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.prev(), Some(b'a'));
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
    cursor.advance();
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn advance_n_clamps() {
    let mut cursor = Cursor::new(b"int");
    cursor.advance_n(10);
    assert_eq!(cursor.pos(), cursor.source_len());
    assert!(cursor.rest().is_empty());
}

#[test]
fn interior_nul_is_not_eof() {
    let mut cursor = Cursor::new(b"\0x");
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    cursor.advance();
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn starts_with_and_peek() {
    let mut cursor = Cursor::new(b"x=int");
    cursor.advance_n(2);
    assert!(cursor.starts_with(b"int"));
    assert!(!cursor.starts_with(b"intx"));
    assert_eq!(cursor.peek_at(2), Some(b't'));
    assert_eq!(cursor.peek_at(3), None);
}

#[test]
fn word_boundary_at_edges() {
    let cursor = Cursor::new(b"int");
    assert!(cursor.at_word_boundary(3));
    assert!(!cursor.at_word_boundary(2));
}

#[test]
fn word_boundary_requires_whitespace_on_both_sides() {
    let src = b"a int\tb=int;";
    let mut cursor = Cursor::new(src);
    cursor.advance_n(2);
    assert!(cursor.at_word_boundary(3));

    cursor.advance_n(6);
    assert!(cursor.starts_with(b"int"));
    // Preceded by `=` and followed by `;`.
    assert!(!cursor.at_word_boundary(3));
}

#[test]
fn byte_classes() {
    for b in [b' ', b'\t', b'\n'] {
        assert!(is_whitespace(b));
    }
    assert!(!is_whitespace(b'\r'));

    for b in [b'a', b'Z', b'0', b'_', b'.', 0xC3] {
        assert!(is_word_byte(b));
    }
    for b in [b';', b'(', b'"', b'+'] {
        assert!(!is_word_byte(b));
    }
}
