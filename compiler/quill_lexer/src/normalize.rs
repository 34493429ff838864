//! Carriage-return removal ahead of scanning.
//!
//! Files saved with CRLF line endings carry a `\r` before every `\n`. The
//! scanner only understands `\n`, so every `\r` byte is deleted up front.
//! All other bytes keep their order. Running the pass twice is a no-op.

use quill_ir::Text;

/// Remove every carriage return from `text`, returning how many were removed.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn normalize(text: &mut Text) -> usize {
    let removed = text.replace_all(b"\r", b"");
    if removed > 0 {
        tracing::debug!(removed, "stripped carriage returns");
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_crlf() {
        let mut text = Text::from("int x;\r\nx = 1;\r\n");
        assert_eq!(normalize(&mut text), 2);
        assert_eq!(text.as_bytes(), b"int x;\nx = 1;\n");
    }

    #[test]
    fn strips_lone_carriage_returns() {
        let mut text = Text::from("\ra\r\rb\r");
        assert_eq!(normalize(&mut text), 4);
        assert_eq!(text.as_bytes(), b"ab");
    }

    #[test]
    fn untouched_without_carriage_returns() {
        let mut text = Text::from("int x;\n");
        assert_eq!(normalize(&mut text), 0);
        assert_eq!(text.as_bytes(), b"int x;\n");
    }

    #[test]
    fn second_pass_is_noop() {
        let mut text = Text::from("a\r\n\"s\r\"\r");
        normalize(&mut text);
        let once = text.clone();
        assert_eq!(normalize(&mut text), 0);
        assert_eq!(text, once);
    }
}
