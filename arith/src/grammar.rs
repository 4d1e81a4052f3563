#![deny(warnings)]

use descent::{Grammar, GrammarError};

/// Rule every arithmetic expression is parsed from.
pub const ROOT_RULE: &str = "expression";

// <expression> ::= <term> | <term> "+" <expression>
// <term>       ::= <factor> | <factor> "*" <term>
// <factor>     ::= <constant> | <variable> | "(" <expression> ")"
// <variable>   ::= "x" | "y" | "z"
// <constant>   ::= <digit> | <digit> <constant>
// <digit>      ::= "0" | "1" | ... | "9"
//
// Rules are right recursive and list the longer alternative first, the
// parser takes the first alternative that matches.
pub const BNF_TABLE: &[(&str, &[&[&str]])] = &[
    ("expression", &[&["term", "sumop", "expression"], &["term"]]),
    ("sumop", &[&["+"], &["-"]]),
    ("term", &[&["factor", "prodop", "term"], &["factor"]]),
    ("prodop", &[&["*"], &["/"]]),
    ("factor", &[&["constant"], &["variable"], &["(", "expression", ")"]]),
    ("variable", &[&["x"], &["y"], &["z"]]),
    ("constant", &[&["digit", "constant"], &["digit"]]),
    ("digit", &[&["0"], &["1"], &["2"], &["3"], &["4"],
                &["5"], &["6"], &["7"], &["8"], &["9"]]),
];

pub fn bnf_grammar() -> Result<Grammar, GrammarError> {
    Grammar::from_table(ROOT_RULE, BNF_TABLE)
}


#[cfg(test)]
mod tests {
    use super::{bnf_grammar, ROOT_RULE};
    use descent::Symbol;

    #[test]
    fn grammar_is_valid() {
        let g = bnf_grammar().unwrap();
        assert_eq!(g.start(), ROOT_RULE);
        assert_eq!(g.rules().count(), 8);
        assert_eq!(g.alternatives_for("digit").unwrap().len(), 10);
        let factor = g.alternatives_for("factor").unwrap();
        assert_eq!(factor[2], vec![
            Symbol::Term("(".to_string()),
            Symbol::NonTerm("expression".to_string()),
            Symbol::Term(")".to_string()),
        ]);
    }

    #[test]
    fn grammar_display() {
        let g = bnf_grammar().unwrap().to_string();
        let mut lines = g.lines();
        assert_eq!(lines.next(), Some("expression -> term sumop expression | term"));
        assert_eq!(lines.next(), Some(r#"sumop -> "+" | "-""#));
    }
}
