#![deny(warnings)]

mod error;
pub use crate::error::{GrammarError, ParseError};

mod grammar;
pub use crate::grammar::{Alternative, Grammar, GrammarBuilder, Symbol};

mod parser;
pub use crate::parser::{DescentParser, DEFAULT_MAX_DEPTH};

mod trees;
pub use crate::trees::Tree;
