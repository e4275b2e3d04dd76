#![no_main]

use libfuzzer_sys::fuzz_target;
use yamlet_parser::{parse_from_lines, parse_from_text, StrInput};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let from_text = parse_from_text(s);
        let from_lines = parse_from_lines(StrInput::new(s));

        match (from_text, from_lines) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
            (a, b) => panic!("text and lines disagree: {a:?} vs {b:?}"),
        }
    }
});
