use std::{fmt, io};

use yamlet::{pretty, Marker, ReaderInput, StrInput, Token, TokenKind};

#[test]
fn test_render() {
    assert_eq!(
        pretty::render("a: b\n- c"),
        concat!(
            "\x1b[46m\x1b[49m\x1b[39m ",
            "\x1b[42ma\x1b[49m\x1b[39m ",
            "\x1b[41m:\x1b[49m\x1b[39m ",
            "\x1b[42mb\x1b[49m\x1b[39m ",
            "\x1b[46m\\n\n\x1b[49m\x1b[39m",
            "\x1b[46m\x1b[49m\x1b[39m ",
            "\x1b[41m-\x1b[49m\x1b[39m ",
            "\x1b[42mc\x1b[49m\x1b[39m ",
        )
    );
}

#[test]
fn test_render_input_matches_render() {
    let source = "a: &x [b, c] # d\n--- !t\n";
    assert_eq!(
        pretty::render_input(StrInput::new(source)).unwrap(),
        pretty::render(source)
    );
}

#[test]
fn test_every_kind_is_styled() {
    for kind in TokenKind::ALL {
        let style = pretty::style(kind);
        if kind == TokenKind::Unknown {
            assert!(style.is_empty());
        } else {
            assert!(style.starts_with("\x1b["), "{kind}");
        }
    }
}

/// A writer that rejects everything.
struct Closed;

impl fmt::Write for Closed {
    fn write_str(&mut self, _: &str) -> fmt::Result {
        Err(fmt::Error)
    }
}

#[test]
fn test_render_token_reports_write_errors() {
    let token = Token::new(TokenKind::PlainScalar, "a", Marker::new(1, 1));
    assert_eq!(pretty::render_token(&token, &mut Closed), Err(fmt::Error));

    let mut out = String::new();
    assert_eq!(pretty::render_token(&token, &mut out), Ok(()));
    assert_eq!(out, "\x1b[42ma\x1b[49m\x1b[39m ");
}

#[test]
fn test_render_input_reports_read_errors() {
    let bytes: &[u8] = b"a: b\n\xff\xfe\n";
    let error = pretty::render_input(ReaderInput::new(bytes)).unwrap_err();
    assert_eq!(error.kind(), io::ErrorKind::InvalidData);
}
