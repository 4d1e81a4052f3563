#![deny(warnings)]

pub mod ast;
pub mod config;
pub mod grammar;
pub mod tokenizer;

mod error;
pub use crate::error::{ConfigError, Error, EvalError};

mod eval;
pub use crate::eval::{evaluate, Env};

pub use descent::{ParseError, Tree};

use crate::config::Config;
use descent::{DescentParser, GrammarError};
use std::sync::OnceLock;

// Built on first use, the grammar table never changes.
static PARSER: OnceLock<Result<DescentParser, GrammarError>> = OnceLock::new();

/// Parse `input` with the arithmetic grammar, one character per token.
/// Input left over after a complete expression is an error.
pub fn parse_expression(input: &str) -> Result<Tree, ParseError> {
    let parser = PARSER
        .get_or_init(|| grammar::bnf_grammar().map(DescentParser::new))
        .as_ref()
        .map_err(|e| e.clone())?;
    parser.parse(&tokenizer::tokenize(input))
}

/// A parser for the arithmetic grammar together with default bindings.
pub struct Calculator {
    parser: DescentParser,
    env: Env,
}

impl Calculator {
    pub fn new() -> Result<Calculator, GrammarError> {
        Ok(Calculator{
            parser: DescentParser::new(grammar::bnf_grammar()?),
            env: Env::new(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Calculator, GrammarError> {
        let mut parser = DescentParser::new(grammar::bnf_grammar()?);
        match config.max_depth {
            Some(0) => parser = parser.with_max_depth(None),
            Some(limit) => parser = parser.with_max_depth(Some(limit)),
            None => (),
        }
        let env = config.vars.clone().map(Env::from).unwrap_or_default();
        Ok(Calculator{parser, env})
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn setvar(&mut self, var: &str, val: f64) {
        self.env.setvar(var, val);
    }

    /// Merge `bindings` into the calculator's, overriding existing names.
    pub fn extend_env(&mut self, bindings: &Env) {
        self.env.extend(bindings);
    }

    pub fn parse(&self, input: &str) -> Result<Tree, ParseError> {
        self.parser.parse(&tokenizer::tokenize(input))
    }

    /// Evaluate with the calculator's bindings.
    pub fn eval(&self, tree: &Tree) -> Result<f64, EvalError> {
        evaluate(tree, &self.env)
    }

    pub fn eval_str(&self, input: &str) -> Result<f64, Error> {
        Ok(self.eval(&self.parse(input)?)?)
    }
}

#[cfg(test)]
mod calculator_test;
