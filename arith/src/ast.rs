//! Typed view of a syntax tree produced with the arithmetic grammar.
//!
//! Each grammar rule gets its own type and each alternative its own variant,
//! so evaluation is an exhaustive match. Checking that a generic `Tree` has
//! the expected labels and child shapes happens once, when lowering.

#![deny(warnings)]

use crate::error::EvalError;
use descent::Tree;

#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    // term
    Term(Term),
    // term sumop expression
    Binary(Term, SumOp, Box<Expression>),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SumOp { Add, Sub }

#[derive(Clone, Debug, PartialEq)]
pub enum Term {
    // factor
    Factor(Factor),
    // factor prodop term
    Binary(Factor, ProdOp, Box<Term>),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProdOp { Mul, Div }

#[derive(Clone, Debug, PartialEq)]
pub enum Factor {
    Constant(Constant),
    Variable(Variable),
    // ( expression )
    Group(Box<Expression>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Variable(pub String);

#[derive(Clone, Debug, PartialEq)]
pub enum Constant {
    // digit
    Digit(Digit),
    // digit constant
    Concat(Digit, Box<Constant>),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Digit(pub u8);

///////////////////////////////////////////////////////////////////////////////

fn malformed(expected: &str, found: &Tree) -> EvalError {
    let found = match found {
        Tree::Leaf(token) => format!("token {:?}", token),
        Tree::Node(label, children) =>
            format!("{} node with {} children", label, children.len()),
    };
    EvalError::MalformedTree(format!("expected {}, found {}", expected, found))
}

/// Children of `tree` if it is a node labeled `label`.
fn node<'t>(tree: &'t Tree, label: &str) -> Result<&'t [Tree], EvalError> {
    match tree {
        Tree::Node(l, children) if l == label => Ok(children.as_slice()),
        _ => Err(malformed(&format!("{} node", label), tree)),
    }
}

/// Token of a node labeled `label` whose only child is a leaf.
fn leaf_node<'t>(tree: &'t Tree, label: &str) -> Result<&'t str, EvalError> {
    match node(tree, label)? {
        [Tree::Leaf(token)] => Ok(token.as_str()),
        _ => Err(malformed(&format!("{} node with a single token", label), tree)),
    }
}

impl TryFrom<&Tree> for Expression {
    type Error = EvalError;

    fn try_from(tree: &Tree) -> Result<Self, Self::Error> {
        match node(tree, "expression")? {
            [term] => Ok(Expression::Term(Term::try_from(term)?)),
            [term, op, rest] => Ok(Expression::Binary(
                Term::try_from(term)?,
                SumOp::try_from(op)?,
                Box::new(Expression::try_from(rest)?))),
            _ => Err(malformed("expression of 1 or 3 parts", tree)),
        }
    }
}

impl TryFrom<&Tree> for SumOp {
    type Error = EvalError;

    fn try_from(tree: &Tree) -> Result<Self, Self::Error> {
        match leaf_node(tree, "sumop")? {
            "+" => Ok(SumOp::Add),
            "-" => Ok(SumOp::Sub),
            _ => Err(malformed("+ or -", tree)),
        }
    }
}

impl TryFrom<&Tree> for Term {
    type Error = EvalError;

    fn try_from(tree: &Tree) -> Result<Self, Self::Error> {
        match node(tree, "term")? {
            [factor] => Ok(Term::Factor(Factor::try_from(factor)?)),
            [factor, op, rest] => Ok(Term::Binary(
                Factor::try_from(factor)?,
                ProdOp::try_from(op)?,
                Box::new(Term::try_from(rest)?))),
            _ => Err(malformed("term of 1 or 3 parts", tree)),
        }
    }
}

impl TryFrom<&Tree> for ProdOp {
    type Error = EvalError;

    fn try_from(tree: &Tree) -> Result<Self, Self::Error> {
        match leaf_node(tree, "prodop")? {
            "*" => Ok(ProdOp::Mul),
            "/" => Ok(ProdOp::Div),
            _ => Err(malformed("* or /", tree)),
        }
    }
}

impl TryFrom<&Tree> for Factor {
    type Error = EvalError;

    fn try_from(tree: &Tree) -> Result<Self, Self::Error> {
        match node(tree, "factor")? {
            [inner] => match inner.label() {
                Some("constant") => Ok(Factor::Constant(Constant::try_from(inner)?)),
                Some("variable") => Ok(Factor::Variable(Variable::try_from(inner)?)),
                _ => Err(malformed("constant or variable", inner)),
            },
            [Tree::Leaf(open), inner, Tree::Leaf(close)] if open == "(" && close == ")" =>
                Ok(Factor::Group(Box::new(Expression::try_from(inner)?))),
            _ => Err(malformed("factor", tree)),
        }
    }
}

impl TryFrom<&Tree> for Variable {
    type Error = EvalError;

    // Which names are variables is up to the grammar
    fn try_from(tree: &Tree) -> Result<Self, Self::Error> {
        Ok(Variable(leaf_node(tree, "variable")?.to_string()))
    }
}

impl TryFrom<&Tree> for Constant {
    type Error = EvalError;

    fn try_from(tree: &Tree) -> Result<Self, Self::Error> {
        match node(tree, "constant")? {
            [digit] => Ok(Constant::Digit(Digit::try_from(digit)?)),
            [digit, rest] => Ok(Constant::Concat(
                Digit::try_from(digit)?,
                Box::new(Constant::try_from(rest)?))),
            _ => Err(malformed("constant of 1 or 2 parts", tree)),
        }
    }
}

impl TryFrom<&Tree> for Digit {
    type Error = EvalError;

    fn try_from(tree: &Tree) -> Result<Self, Self::Error> {
        let token = leaf_node(tree, "digit")?;
        let mut chars = token.chars();
        match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
            (Some(d), None) => Ok(Digit(d as u8)),
            _ => Err(malformed("a decimal digit", tree)),
        }
    }
}
