use crate::config::Config;
use crate::{Calculator, Env, Error, EvalError, ParseError};
use std::collections::HashMap;

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => { assert!(($lhs - $rhs).abs() < 1.0e-10) }
}

#[test]
fn default_calculator() {
    let calc = Calculator::new().unwrap();
    assert_eq!(calc.env(), &Env::new());
    fuzzy_eq!(calc.eval_str("6*7").unwrap(), 42.0);
}

#[test]
fn setvar_binds() {
    let mut calc = Calculator::new().unwrap();
    calc.setvar("x", 2.0);
    fuzzy_eq!(calc.eval_str("x*x").unwrap(), 4.0);
    calc.setvar("x", 3.0);
    fuzzy_eq!(calc.eval_str("x*x").unwrap(), 9.0);
}

#[test]
fn eval_str_errors() {
    let calc = Calculator::new().unwrap();
    assert_eq!(calc.eval_str("2*").unwrap_err(),
               Error::Parse(ParseError::Incomplete{consumed: 1, total: 2}));
    assert_eq!(calc.eval_str("2*z").unwrap_err(),
               Error::Eval(EvalError::UnboundVariable("z".to_string())));
}

#[test]
fn config_vars() {
    let mut vars = HashMap::new();
    vars.insert("y".to_string(), 5.0);
    let config = Config{max_depth: None, vars: Some(vars)};
    let calc = Calculator::from_config(&config).unwrap();
    assert_eq!(calc.env().get("y"), Some(5.0));
    fuzzy_eq!(calc.eval_str("y/2").unwrap(), 2.5);
}

#[test]
fn config_depth_limit() {
    let input = "((((1))))";
    let shallow = Calculator::from_config(
        &Config{max_depth: Some(8), vars: None}).unwrap();
    assert_eq!(shallow.parse(input).unwrap_err(), ParseError::DepthExceeded(8));

    let unlimited = Calculator::from_config(
        &Config{max_depth: Some(0), vars: None}).unwrap();
    fuzzy_eq!(unlimited.eval_str(input).unwrap(), 1.0);
    fuzzy_eq!(Calculator::new().unwrap().eval_str(input).unwrap(), 1.0);
}

#[test]
fn env_merging() {
    let mut env = Env::from([("x", 1.0), ("y", 2.0)]);
    env.extend(&Env::from([("y", 20.0), ("z", 30.0)]));
    assert_eq!(env, Env::from([("x", 1.0), ("y", 20.0), ("z", 30.0)]));
}

#[test]
fn extend_env_overrides_config() {
    let mut vars = HashMap::new();
    vars.insert("x".to_string(), 1.0);
    vars.insert("y".to_string(), 2.0);
    let mut calc = Calculator::from_config(&Config{max_depth: None, vars: Some(vars)}).unwrap();
    calc.extend_env(&Env::from([("y", 20.0), ("z", 30.0)]));
    assert_eq!(calc.env(), &Env::from([("x", 1.0), ("y", 20.0), ("z", 30.0)]));
    fuzzy_eq!(calc.eval_str("x+y+z").unwrap(), 51.0);
}
