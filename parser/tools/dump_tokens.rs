use std::env;
use std::fs::File;
use std::io::BufReader;

use yamlet_parser::{ReaderInput, Tokenizer};

fn main() {
    let args: Vec<_> = env::args().collect();
    let f = File::open(&args[1]).unwrap();

    for token in Tokenizer::new(ReaderInput::new(BufReader::new(f))) {
        match token {
            Ok(token) => eprintln!("      \x1B[;34m\u{21B3} {token}\x1B[;m"),
            Err(e) => {
                eprintln!("\x1B[;31m{e}\x1B[;m");
                std::process::exit(1);
            }
        }
    }
}
