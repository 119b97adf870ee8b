mod error;

use error::{ReplError, SourcedError};
use log::{info, LevelFilter};
use phi_compute::{
    equation::Equation,
    iteration::{gradient, Iteration},
    symbolic::{
        operator::{Symbol, Variable},
        Operator,
    },
};
use rustyline::{error::ReadlineError, DefaultEditor};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::{
    io::{self, BufRead, IsTerminal},
    process::ExitCode,
    sync::Arc,
};

const USAGE: &str = "\
usage: phi test
       phi <iterations> <m|d> <0|1>
       phi

  test          run the demonstration equations and two iterations of the Gaussian model
  iterations    number of iterations of the Gaussian model
  m|d           differentiate by the centre (m) or the standard deviation (d)
  0|1           1 if the parameters are the same for all iterations, 0 otherwise

With no arguments, every line of input is parsed and differentiated by xi, mi and di.";

/// Equations differentiated by `phi test`, with the symbol to differentiate by.
const DEMONSTRATION: &[(&str, Symbol)] = &[
    ("1", Symbol::Xi),
    ("2*xi", Symbol::Xi),
    ("xi^2", Symbol::Xi),
    ("2*xi^2", Symbol::Xi),
    ("xi+2*xi^2", Symbol::Xi),
    ("exp(xi)", Symbol::Xi),
    ("exp(xi^3+xi^2+xi)", Symbol::Xi),
    ("-(xi-mi)^2", Symbol::Xi),
    ("(-(xi-mi)^2)/(2*di^2)", Symbol::Xi),
    ("(-(xi-mi)^2)/(2*di^2)", Symbol::Di),
    ("(-(xi-mi)^2)/(2*di^2)", Symbol::Mi),
    ("exp((-(xi-mi)^2)/(2*di^2))", Symbol::Xi),
    ("exp((-(xi-mi)^2)/(2*di^2))", Symbol::Di),
    ("exp((-(xi-mi)^2)/(2*di^2))", Symbol::Mi),
];

/// What the program was asked to do.
enum Command {
    /// Run the demonstration set.
    Test,

    /// Differentiate iterations of the Gaussian model.
    Gradient {
        iterations: u32,
        symbol: Symbol,
        shared: bool,
    },

    /// Parse and differentiate lines of input.
    Interactive,
}

impl Command {
    /// Parses the command from the program arguments, excluding the program name.
    fn from_args(args: &[String]) -> Result<Self, String> {
        match args {
            [] => Ok(Self::Interactive),
            [test] if test == "test" => Ok(Self::Test),
            [iterations, symbol, shared] => {
                let iterations = iterations
                    .parse::<u32>()
                    .map_err(|_| format!("invalid number of iterations `{}`", iterations))?;
                let symbol = symbol.parse::<Symbol>().map_err(|err| err.to_string())?;
                let shared = match shared.as_str() {
                    "0" => false,
                    "1" => true,
                    _ => return Err(format!("expected 0 or 1, found `{}`", shared)),
                };
                Ok(Self::Gradient { iterations, symbol, shared })
            },
            _ => Err("wrong number of arguments".to_owned()),
        }
    }
}

/// Installs the terminal logger, with the level taken from the `PHI_LOG` environment variable.
fn init_logger() {
    let level = std::env::var("PHI_LOG")
        .ok()
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);

    if TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto).is_err() {
        eprintln!("could not install the logger");
    }
}

/// Renders a derivative, where [`None`] is zero.
fn show(derivative: &Option<Operator>) -> String {
    derivative.as_ref().map_or_else(|| "zero".to_owned(), |d| d.to_string())
}

/// Parses the equation and returns its rendering and its derivative by the given symbol.
fn differentiate(source: &str, symbol: Symbol) -> Result<(String, Option<Operator>), ReplError> {
    let mut equation = Equation::new();
    let root = equation.parse(source)?;
    Ok((root.to_string(), equation.derivative(symbol, 0)?))
}

/// Returns the source of the equation of the model that fails to parse. This is the initial
/// equation if it fails, and the step equation otherwise.
fn failed_source(model: &Iteration) -> &str {
    if Equation::new().parse(model.initial()).is_err() {
        model.initial()
    } else {
        model.step()
    }
}

/// Builds the equations of the first `iterations + 1` iterations of the model.
fn chain(
    model: &Iteration,
    iterations: u32,
    shift: bool,
) -> Result<Vec<Arc<Operator>>, SourcedError<'_>> {
    model
        .chain(iterations as usize, shift)
        .map_err(|errs| SourcedError::new(errs, failed_source(model)))
}

/// Runs the demonstration set, then differentiates two shifted iterations of the model by `mi`.
fn run_test(model: &Iteration) -> Result<(), SourcedError<'_>> {
    for (source, symbol) in DEMONSTRATION {
        match differentiate(source, *symbol) {
            Ok((rendered, derivative)) => {
                println!("Equation: {}", rendered);
                println!("Has derivative: {}", show(&derivative));
            },
            Err(err) => report(&err, source),
        }
    }

    for tree in chain(model, 2, true)? {
        let derivative = tree
            .derivative(Symbol::Mi, 0)
            .map_err(|err| SourcedError::new(err, model.step()))?;
        println!("Equation: {}", tree);
        println!("Has derivative: {}", show(&derivative));
    }

    Ok(())
}

/// Differentiates iterations of the model.
///
/// If the parameters are shared by all iterations, every iteration is differentiated by the
/// current parameter. Otherwise, the final iteration is differentiated by the parameter of every
/// iteration.
fn run_gradient(
    model: &Iteration,
    iterations: u32,
    symbol: Symbol,
    shared: bool,
) -> Result<(), SourcedError<'_>> {
    info!("{} iterations by {}, shared parameters: {}", iterations, symbol, shared);
    let trees = chain(model, iterations, !shared)?;

    if shared {
        println!("Phi0 equation: {}", trees[0]);
        for (i, tree) in trees.iter().enumerate().skip(1) {
            let derivative = tree
                .derivative(symbol, 0)
                .map_err(|err| SourcedError::new(err, model.step()))?;
            println!("Iteration {}", i);
            println!("Equation: {}", tree);
            println!("Has gradient by {}: {}", symbol, show(&derivative));
        }
    } else {
        let Some(last) = trees.last() else {
            return Ok(());
        };
        println!("Equation: phi = {}", last);
        let derivatives = gradient(last, symbol, iterations)
            .map_err(|err| SourcedError::new(err, model.step()))?;
        for (depth, derivative) in derivatives {
            println!("By {}: {}", Variable::new(symbol, depth), show(&derivative));
        }
    }

    Ok(())
}

/// Parses the line and prints its rendering and its derivative by every symbol.
fn process(input: &str) -> Result<(), ReplError> {
    let mut equation = Equation::new();
    let root = equation.parse(input)?;
    println!("{}", root);

    for symbol in Symbol::ALL {
        println!("  d/d{}: {}", symbol, show(&equation.derivative(symbol, 0)?));
    }
    Ok(())
}

/// Reports the errors to stderr, with labels pointing into `input`.
fn report(err: &ReplError, input: &str) {
    if let Err(io_err) = err.report_to_stderr("input", input) {
        eprintln!("{}", io_err);
    }
}

/// Processes a line, reporting any errors to stderr.
fn process_and_report(input: &str) {
    if let Err(err) = process(input) {
        report(&err, input);
    }
}

/// Runs the REPL until end of input.
fn run_repl() -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    fn process_line(rl: &mut DefaultEditor) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        process_and_report(&input);
        Ok(())
    }

    loop {
        match process_line(&mut rl) {
            Ok(()) => (),
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err),
        }
    }
}

fn main() -> ExitCode {
    init_logger();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let command = match Command::from_args(&args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("error: {}\n\n{}", message, USAGE);
            return ExitCode::FAILURE;
        },
    };

    let model = Iteration::gaussian();
    let result = match command {
        Command::Test => run_test(&model),
        Command::Gradient { iterations, symbol, shared } => {
            run_gradient(&model, iterations, symbol, shared)
        },
        Command::Interactive if io::stdin().is_terminal() => {
            if let Err(err) = run_repl() {
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            }
            return ExitCode::SUCCESS;
        },
        Command::Interactive => {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) if line.trim().is_empty() => (),
                    Ok(line) => process_and_report(&line),
                    Err(err) => {
                        eprintln!("{}", err);
                        return ExitCode::FAILURE;
                    },
                }
            }
            return ExitCode::SUCCESS;
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            report(&failure.error, failure.source);
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn gradient_arguments() {
        let command = Command::from_args(&args(&["3", "d", "0"])).unwrap();
        assert!(matches!(
            command,
            Command::Gradient { iterations: 3, symbol: Symbol::Di, shared: false },
        ));
    }

    #[test]
    fn too_many_iterations() {
        assert!(Command::from_args(&args(&["4294967296", "m", "1"])).is_err());
        assert!(Command::from_args(&args(&["-1", "m", "1"])).is_err());
    }

    #[test]
    fn failure_in_initial_equation() {
        let model = Iteration::new("xi+", "phi(i-1)");
        let failure = chain(&model, 1, false).unwrap_err();
        assert_eq!(failure.source, "xi+");
    }

    #[test]
    fn failure_in_step_equation() {
        let model = Iteration::new("xi", "phi(i-1)*");
        let failure = chain(&model, 1, false).unwrap_err();
        assert_eq!(failure.source, "phi(i-1)*");
    }
}
