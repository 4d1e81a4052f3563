#![deny(warnings)]

use crate::error::ParseError;
use crate::grammar::{Alternative, Grammar, Symbol};
use crate::trees::Tree;
use log::{debug, trace};
use std::collections::HashMap;

// Outcome of each (rule, start position) tried during one parse. Without it
// every failed alternative re-parses its prefix and nesting costs grow
// exponentially.
type Memo<'g> = HashMap<(&'g str, usize), Result<(usize, Tree), ParseError>>;

/// Rule activations allowed to nest before a parse is aborted.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

pub struct DescentParser {
    pub grammar: Grammar,
    max_depth: Option<usize>,
}

///////////////////////////////////////////////////////////////////////////////

impl DescentParser {
    pub fn new(grammar: Grammar) -> DescentParser {
        DescentParser{grammar, max_depth: Some(DEFAULT_MAX_DEPTH)}
    }

    /// Change the recursion limit. `None` removes it, which lets a left
    /// recursive grammar overflow the stack.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse the whole token sequence starting from the grammar's start rule.
    /// Trailing tokens after the start rule matched are an error.
    pub fn parse<T: AsRef<str>>(&self, tokens: &[T]) -> Result<Tree, ParseError> {
        let (end, tree) = self.parse_rule(tokens, 0, self.grammar.start())?;
        if end != tokens.len() {
            debug!("start rule matched {} of {} tokens", end, tokens.len());
            return Err(ParseError::Incomplete{consumed: end, total: tokens.len()});
        }
        debug!("parsed {} tokens", end);
        Ok(tree)
    }

    /// Match `rule` at `start`. Returns the position after the match and the
    /// subtree labeled with `rule`. Nothing past the returned position is
    /// looked at once an alternative has matched.
    pub fn parse_rule<'g, T: AsRef<str>>(&'g self, tokens: &[T], start: usize, rule: &'g str)
            -> Result<(usize, Tree), ParseError> {
        let mut memo = Memo::new();
        let result = self.descend(tokens, start, rule, 0, &mut memo);
        debug!("{} memoized rule results", memo.len());
        result
    }

    fn descend<'g, T: AsRef<str>>(
        &'g self,
        tokens: &[T],
        start: usize,
        rule: &'g str,
        depth: usize,
        memo: &mut Memo<'g>,
    ) -> Result<(usize, Tree), ParseError>
    {
        // A rule's outcome at a position never changes within one parse
        if let Some(result) = memo.get(&(rule, start)) {
            trace!("{} at {} memoized", rule, start);
            return result.clone();
        }
        if let Some(limit) = self.max_depth {
            if depth >= limit {
                return Err(ParseError::DepthExceeded(limit));
            }
        }
        let result = self.alternatives(tokens, start, rule, depth, memo);
        // fatal errors abort the whole parse, only outcomes are worth keeping
        let fatal = matches!(&result, Err(e) if !e.is_backtrackable());
        if !fatal {
            memo.insert((rule, start), result.clone());
        }
        result
    }

    fn alternatives<'g, T: AsRef<str>>(
        &'g self,
        tokens: &[T],
        start: usize,
        rule: &'g str,
        depth: usize,
        memo: &mut Memo<'g>,
    ) -> Result<(usize, Tree), ParseError>
    {
        // First alternative to match wins, each one starts over from `start`
        for (idx, alt) in self.grammar.alternatives_for(rule)?.iter().enumerate() {
            trace!("{}[{}] at {}", rule, idx, start);
            match self.parse_alternative(tokens, start, alt, depth, memo) {
                Ok((end, children)) => {
                    trace!("{}[{}] matched {}..{}", rule, idx, start, end);
                    return Ok((end, Tree::Node(rule.to_string(), children)));
                },
                Err(e) if e.is_backtrackable() => {
                    trace!("{}[{}] backtrack to {}", rule, idx, start);
                },
                Err(e) => return Err(e),
            }
        }
        Err(ParseError::NoMatch{rule: rule.to_string(), position: start})
    }

    fn parse_alternative<'g, T: AsRef<str>>(
        &'g self,
        tokens: &[T],
        start: usize,
        alt: &'g Alternative,
        depth: usize,
        memo: &mut Memo<'g>,
    ) -> Result<(usize, Vec<Tree>), ParseError>
    {
        let mut pos = start;
        let mut children = Vec::with_capacity(alt.len());
        for symbol in alt {
            match symbol {
                Symbol::NonTerm(name) => {
                    let (end, subtree) = self.descend(tokens, pos, name, depth + 1, memo)?;
                    pos = end;
                    children.push(subtree);
                },
                Symbol::Term(literal) => match tokens.get(pos) {
                    Some(token) if symbol.matches(token.as_ref()) => {
                        children.push(Tree::Leaf(token.as_ref().to_string()));
                        pos += 1;
                    },
                    // mismatch or input exhausted
                    _ => return Err(ParseError::NoMatch{rule: literal.clone(), position: pos}),
                },
            }
        }
        Ok((pos, children))
    }
}
