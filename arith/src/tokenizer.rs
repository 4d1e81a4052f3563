#![deny(warnings)]

use std::str::Chars;

/// One character of input is one token.
///
/// Stands in for a real lexer: anything producing `AsRef<str>` tokens can be
/// handed to the parser instead.
pub struct Tokenizer<'a>(Chars<'a>);

impl<'a> Iterator for Tokenizer<'a> {
    type Item = String;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(String::from)
    }
}

pub fn tokenizer(input: &str) -> Tokenizer<'_> {
    Tokenizer(input.chars())
}

pub fn tokenize(input: &str) -> Vec<String> {
    tokenizer(input).collect()
}
