use anyhow::{anyhow, Context};
use arith::config::Config;
use arith::{Calculator, Env};
use clap::Parser;
use log::debug;

const DEMO_EXPR: &str = "10+2*x+3*(y+z)/2";

#[derive(Parser, Debug)]
#[clap(version, about = "Evaluate arithmetic expressions parsed from a BNF grammar")]
struct Args {
    #[clap(short, long, action, help = "a toml file containing configuration")]
    config: Option<String>,
    #[clap(short, long, help = "bind a variable, eg: x=1.5, may be provided multiple times")]
    set: Vec<String>,
    #[clap(short, long, action, help = "print the syntax tree before evaluating")]
    tree: bool,
    #[clap(long, action, help = "parse one expression and evaluate it under two sets of bindings")]
    demo: bool,
    #[clap(short, long, action = clap::ArgAction::Count,
           help = "show more in logs, may be provided multiple times")]
    verbose: u8,
    #[clap(help = "expression to evaluate, starts a repl when missing")]
    expr: Option<String>,
}

fn parse_binding(binding: &str) -> anyhow::Result<(String, f64)> {
    let (name, value) = binding.split_once('=')
        .ok_or_else(|| anyhow!("expected name=value, got '{}'", binding))?;
    let value = value.trim().parse::<f64>()
        .with_context(|| format!("parsing value of '{}'", name.trim()))?;
    Ok((name.trim().to_string(), value))
}

// Spaces aren't tokens of the language, drop them before tokenizing
fn squash(input: &str) -> String {
    input.split_whitespace().collect()
}

fn evalexpr(calc: &Calculator, input: &str, show_tree: bool) -> anyhow::Result<()> {
    let tree = calc.parse(&squash(input)).context("parsing expression")?;
    if show_tree {
        println!("{}", tree.stringify(0));
    }
    let value = calc.eval(&tree).context("evaluating expression")?;
    println!("{}", value);
    Ok(())
}

// `name = expr` binds a variable, anything else is evaluated and printed
fn parse_statement(calc: &mut Calculator, input: &str, show_tree: bool) -> anyhow::Result<()> {
    if let Some((var, expr)) = input.split_once('=') {
        let var = var.trim();
        if var.is_empty() || !var.chars().all(char::is_alphanumeric) {
            return Err(anyhow!("bad variable name '{}'", var));
        }
        let value = calc.eval_str(&squash(expr)).context("evaluating assignment")?;
        calc.setvar(var, value);
        println!("{} = {}", var, value);
        return Ok(());
    }
    evalexpr(calc, input, show_tree)
}

fn demo(calc: &Calculator) -> anyhow::Result<()> {
    let tree = calc.parse(DEMO_EXPR).context("parsing demo expression")?;
    println!("{}", tree.stringify(0));
    for env in [Env::from([("x", 1.0), ("y", 2.0), ("z", 3.0)]),
                Env::from([("x", 10.0), ("y", 2.0), ("z", 4.0)])] {
        let value = arith::evaluate(&tree, &env).context("evaluating demo expression")?;
        println!("{}", value);
    }
    Ok(())
}

fn repl(calc: &mut Calculator, show_tree: bool) -> anyhow::Result<()> {
    let mut rl = rustyline::DefaultEditor::new().context("starting line editor")?;
    while let Ok(input) = rl.readline("~> ") {
        if input.trim().is_empty() {
            continue;
        }
        rl.add_history_entry(input.as_str()).context("recording history")?;
        if let Err(err) = parse_statement(calc, &input, show_tree) {
            println!("{:#}", err);
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter_level = if args.verbose == 0 {
        log::LevelFilter::Warn
    } else if args.verbose == 1 {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Trace
    };
    env_logger::Builder::new()
        .filter_level(filter_level)
        .parse_default_env()
        .init();

    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path))?,
        None => Config::default(),
    };
    let mut calc = Calculator::from_config(&config).context("building grammar")?;
    // command line bindings win over the config file
    let mut overrides = Env::new();
    for binding in &args.set {
        let (var, value) = parse_binding(binding)?;
        overrides.setvar(&var, value);
    }
    calc.extend_env(&overrides);

    debug!("bindings: {:?}", calc.env());

    if args.demo {
        demo(&calc)
    } else if let Some(expr) = &args.expr {
        evalexpr(&calc, expr, args.tree)
    } else {
        repl(&mut calc, args.tree)
    }
}


#[cfg(test)]
mod tests {
    use super::{parse_binding, parse_statement, squash};
    use arith::Calculator;

    #[test]
    fn bindings() {
        assert_eq!(parse_binding("x=1.5").unwrap(), ("x".to_string(), 1.5));
        assert_eq!(parse_binding(" y = -2 ").unwrap(), ("y".to_string(), -2.0));
        assert!(parse_binding("x").is_err());
        assert!(parse_binding("x=one").is_err());
    }

    #[test]
    fn squash_whitespace() {
        assert_eq!(squash(" 1 + 2 *\tx "), "1+2*x");
    }

    #[test]
    fn statements() {
        let mut calc = Calculator::new().unwrap();
        parse_statement(&mut calc, "x = 2*3", false).unwrap();
        assert_eq!(calc.env().get("x"), Some(6.0));
        assert!(parse_statement(&mut calc, "x+1", false).is_ok());
        assert!(parse_statement(&mut calc, "= 1", false).is_err());
        assert!(parse_statement(&mut calc, "y", false).is_err());
    }
}
