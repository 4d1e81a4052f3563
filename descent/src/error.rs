use thiserror::Error;

/// Problems found while building or querying a `Grammar`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GrammarError {
    #[error("Duplicate Symbol: {0}")]
    DuplicateSymbol(String),
    #[error("Duplicate Rule: {0}")]
    DuplicateRule(String),
    #[error("Missing Symbol: {0}")]
    MissingSymbol(String),
    #[error("Not a NonTerm: {0}")]
    NotANonTerminal(String),
    // A declared non-terminal with no alternatives is a dangling reference
    #[error("Empty Rule: {0}")]
    EmptyRule(String),
    #[error("Unknown Rule: {0}")]
    UnknownRule(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error("Parse Error: no alternative of '{rule}' matches at {position}")]
    NoMatch { rule: String, position: usize },
    #[error("Incomplete Parse: consumed {consumed} of {total} tokens")]
    Incomplete { consumed: usize, total: usize },
    #[error("Recursion depth exceeded (limit {0})")]
    DepthExceeded(usize),
}

impl ParseError {
    /// Whether the parent rule may recover by trying its next alternative.
    pub fn is_backtrackable(&self) -> bool {
        matches!(self, ParseError::NoMatch { .. })
    }
}
