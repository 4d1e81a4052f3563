#![deny(warnings)]

use crate::ast::{Constant, Digit, Expression, Factor, ProdOp, SumOp, Term, Variable};
use crate::error::EvalError;
use descent::Tree;
use log::debug;
use std::collections::HashMap;
use std::ops::{Add, Div, Mul, Sub};

/// Variable bindings supplied to evaluation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Env(pub HashMap<String, f64>);

impl Env {
    pub fn new() -> Env {
        Env(HashMap::new())
    }

    pub fn setvar(&mut self, var: &str, val: f64) {
        self.0.insert(var.to_string(), val);
    }

    pub fn get(&self, var: &str) -> Option<f64> {
        self.0.get(var).copied()
    }

    /// Bindings of `other` override ours.
    pub fn extend(&mut self, other: &Env) {
        self.0.extend(other.0.iter().map(|(k, v)| (k.clone(), *v)));
    }
}

impl<const N: usize> From<[(&str, f64); N]> for Env {
    fn from(bindings: [(&str, f64); N]) -> Env {
        Env(bindings.iter().map(|(k, v)| (k.to_string(), *v)).collect())
    }
}

impl From<HashMap<String, f64>> for Env {
    fn from(bindings: HashMap<String, f64>) -> Env {
        Env(bindings)
    }
}

/// Evaluate a syntax tree built with the arithmetic grammar.
pub fn evaluate(tree: &Tree, env: &Env) -> Result<f64, EvalError> {
    let expr = Expression::try_from(tree)?;
    let value = expr.eval(env)?;
    debug!("{} = {}", tree.text(), value);
    Ok(value)
}

///////////////////////////////////////////////////////////////////////////////

impl SumOp {
    pub fn function(self) -> fn(f64, f64) -> f64 {
        match self {
            SumOp::Add => f64::add,
            SumOp::Sub => f64::sub,
        }
    }
}

impl ProdOp {
    // true division, x/0 follows IEEE rules
    pub fn function(self) -> fn(f64, f64) -> f64 {
        match self {
            ProdOp::Mul => f64::mul,
            ProdOp::Div => f64::div,
        }
    }
}

impl Expression {
    pub fn eval(&self, env: &Env) -> Result<f64, EvalError> {
        match self {
            Expression::Term(term) => term.eval(env),
            Expression::Binary(lhs, op, rhs) => {
                let binop = op.function();
                let l = lhs.eval(env)?;
                let r = rhs.eval(env)?;
                Ok(binop(l, r))
            }
        }
    }
}

impl Term {
    pub fn eval(&self, env: &Env) -> Result<f64, EvalError> {
        match self {
            Term::Factor(factor) => factor.eval(env),
            Term::Binary(lhs, op, rhs) => {
                let binop = op.function();
                let l = lhs.eval(env)?;
                let r = rhs.eval(env)?;
                Ok(binop(l, r))
            }
        }
    }
}

impl Factor {
    pub fn eval(&self, env: &Env) -> Result<f64, EvalError> {
        match self {
            Factor::Constant(constant) => constant.eval(),
            Factor::Variable(var) => var.eval(env),
            Factor::Group(expr) => expr.eval(env),
        }
    }
}

impl Variable {
    pub fn eval(&self, env: &Env) -> Result<f64, EvalError> {
        env.get(&self.0).ok_or_else(|| EvalError::UnboundVariable(self.0.clone()))
    }
}

/// numjoin("12", "34") == "1234"
fn numjoin(lead: &str, rest: &str) -> String {
    format!("{}{}", lead, rest)
}

impl Constant {
    /// Decimal digits of the constant as written, leading zeros included.
    pub fn digits(&self) -> String {
        match self {
            Constant::Digit(d) => d.digits(),
            Constant::Concat(d, rest) => numjoin(&d.digits(), &rest.digits()),
        }
    }

    /// Value of the digits read as one decimal literal, correctly rounded
    /// however many digits there are.
    pub fn eval(&self) -> Result<f64, EvalError> {
        let digits = self.digits();
        digits.parse::<f64>()
            .map_err(|e| EvalError::MalformedTree(format!("constant '{}': {}", digits, e)))
    }
}

impl Digit {
    pub fn digits(&self) -> String {
        self.0.to_string()
    }
}
