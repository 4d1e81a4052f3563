#![deny(warnings)]

use crate::error::GrammarError;
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    NonTerm(String),
    // A terminal matches a single token that is exactly equal to its literal
    Term(String),
}

/// One of the ordered symbol sequences a rule can expand to.
pub type Alternative = Vec<Symbol>;

#[derive(Clone, Debug)]
pub struct Grammar {
    start: String,
    // rule heads in declaration order, for display and introspection
    order: Vec<String>,
    rules: HashMap<String, Vec<Alternative>>,
}

#[derive(Default)]
pub struct GrammarBuilder {
    symbols: HashMap<String, Symbol>,
    order: Vec<String>,
    rules: HashMap<String, Vec<Alternative>>,
    error: Option<GrammarError>,
}


impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Symbol::NonTerm(name) => name,
            Symbol::Term(literal) => literal,
        }
    }

    pub fn matches(&self, token: &str) -> bool {
        match self {
            Symbol::Term(literal) => literal == token,
            _ => false
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Term(_))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Symbol::NonTerm(name) => write!(f, "{}", name),
            Symbol::Term(literal) => write!(f, "{:?}", literal),
        }
    }
}

fn rule_to_string(head: &str, alt: &[Symbol]) -> String {
    format!("{} -> {}", head, alt.iter()
            .map(|s| s.to_string()).collect::<Vec<_>>().join(" "))
}

impl Grammar {
    /// Name of the rule parsing starts from.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Rule names in the order they were first declared.
    pub fn rules(&self) -> impl Iterator<Item=&str> {
        self.order.iter().map(|r| r.as_str())
    }

    /// Ordered alternatives of `rule`. Declaration order is parse order.
    pub fn alternatives_for(&self, rule: &str) -> Result<&[Alternative], GrammarError> {
        self.rules.get(rule)
            .map(|alts| alts.as_slice())
            .ok_or_else(|| GrammarError::UnknownRule(rule.to_string()))
    }

    /// Build a grammar from a `{rule: [[symbol, ...], ...]}` shaped table.
    /// Symbols naming a rule of the table are non-terminals, anything else
    /// is a terminal literal.
    pub fn from_table(
        start: &str,
        table: &[(&str, &[&[&str]])]) -> Result<Grammar, GrammarError>
    {
        let mut builder = GrammarBuilder::default();
        for (head, _) in table {
            builder.quiet_nonterm(*head);
        }
        for (_, alternatives) in table {
            for symbol in alternatives.iter().flat_map(|alt| alt.iter()) {
                if !table.iter().any(|(head, _)| head == symbol) {
                    builder.quiet_terminal(*symbol);
                }
            }
        }
        for (head, alternatives) in table {
            for alt in alternatives.iter() {
                builder.quiet_rule(*head, *alt);
            }
        }
        builder.into_grammar(start)
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for head in &self.order {
            let alts = self.rules[head].iter()
                .map(|alt| alt.iter().map(|s| s.to_string())
                     .collect::<Vec<_>>().join(" "))
                .collect::<Vec<_>>();
            writeln!(f, "{} -> {}", head, alts.join(" | "))?;
        }
        Ok(())
    }
}

/// Builds a Grammar while validating existence of Symbols and checking rules.
impl GrammarBuilder {
    fn fail(&mut self, error: GrammarError) {
        // keep the first problem found, later ones are usually fallout
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    fn add_symbol(&mut self, symbol: Symbol, quiet: bool) {
        // Check for duplicate symbols to avoid overwriting by mistake
        if !self.symbols.contains_key(symbol.name()) {
            self.symbols.insert(symbol.name().to_string(), symbol);
        } else if !quiet {
            self.fail(GrammarError::DuplicateSymbol(symbol.name().to_string()));
        }
    }

    pub fn nonterm(mut self, name: impl Into<String>) -> Self {
        self.add_symbol(Symbol::NonTerm(name.into()), false);
        self
    }

    pub fn terminal(mut self, literal: impl Into<String>) -> Self {
        self.add_symbol(Symbol::Term(literal.into()), false);
        self
    }

    // Quiet silently ignores adding pre-existent symbols to the grammar.
    // Also quiet versions don't use chaining to be invoked in loops.

    pub fn quiet_nonterm(&mut self, name: impl Into<String>) {
        self.add_symbol(Symbol::NonTerm(name.into()), true);
    }

    pub fn quiet_terminal(&mut self, literal: impl Into<String>) {
        self.add_symbol(Symbol::Term(literal.into()), true);
    }

    fn add_rule<S, S2>(&mut self, head: S, spec: &[S2], quiet: bool)
        where S: AsRef<str>, S2: AsRef<str>
    {
        // First check that all symbols have been registered
        if let Some(s) = spec.iter().find(|n| !self.symbols.contains_key(n.as_ref())) {
            self.fail(GrammarError::MissingSymbol(s.as_ref().to_string()));
            return;
        }
        match self.symbols.get(head.as_ref()) {
            None => {
                self.fail(GrammarError::MissingSymbol(head.as_ref().to_string()));
                return;
            },
            Some(Symbol::Term(_)) => {
                self.fail(GrammarError::NotANonTerminal(head.as_ref().to_string()));
                return;
            },
            Some(Symbol::NonTerm(_)) => (),
        }
        let alt: Alternative = spec.iter()
            .map(|s| self.symbols[s.as_ref()].clone())
            .collect();
        let head = head.as_ref().to_string();
        let alternatives = self.rules.entry(head.clone()).or_default();
        if !alternatives.contains(&alt) {
            alternatives.push(alt);
            if !self.order.contains(&head) {
                self.order.push(head);
            }
        } else if !quiet {
            let rule = rule_to_string(&head, &alt);
            self.fail(GrammarError::DuplicateRule(rule));
        }
    }

    /// Register a new alternative for `head`. Alternatives are tried in the
    /// order they're registered.
    pub fn rule<S, S2>(mut self, head: S, spec: &[S2]) -> Self
        where S: AsRef<str>, S2: AsRef<str>
    {
        self.add_rule(head, spec, false);
        self
    }

    pub fn quiet_rule<S, S2>(&mut self, head: S, spec: &[S2])
        where S: AsRef<str>, S2: AsRef<str>
    {
        self.add_rule(head, spec, true)
    }

    pub fn into_grammar(mut self, start: impl Into<String>) -> Result<Grammar, GrammarError> {
        let start = start.into();
        match self.symbols.get(&start) {
            None => self.fail(GrammarError::MissingSymbol(start.clone())),
            Some(Symbol::Term(_)) => self.fail(GrammarError::NotANonTerminal(start.clone())),
            Some(Symbol::NonTerm(_)) => (),
        }
        // Every non-terminal must expand to something
        let mut empty: Vec<_> = self.symbols.values()
            .filter(|s| !s.is_terminal() && !self.rules.contains_key(s.name()))
            .map(|s| s.name().to_string())
            .collect();
        empty.sort();
        if let Some(name) = empty.into_iter().next() {
            self.fail(GrammarError::EmptyRule(name));
        }
        match self.error {
            Some(error) => Err(error),
            None => Ok(Grammar{start, order: self.order, rules: self.rules}),
        }
    }
}


///////////////////////////////////////////////////////////////////////////////
