use clap::{CommandFactory, Parser};
use crate::config::LogLevel;
use crate::models::Operation;

#[derive(Parser, Debug)]
#[command(
    name = "calculator",
    about = "Basic calculator with an optional REST service mode",
    after_help = "Example of usage: calculator --add 1 2"
)]
pub struct Cli {
    /// Add two numbers.
    #[arg(short, long, num_args = 1.., value_name = "NUMBER", allow_negative_numbers = true)]
    pub add: Option<Vec<f64>>,

    /// Subtract two numbers.
    #[arg(short, long, num_args = 1.., value_name = "NUMBER", allow_negative_numbers = true)]
    pub subtract: Option<Vec<f64>>,

    /// Multiply two numbers.
    #[arg(short, long, num_args = 1.., value_name = "NUMBER", allow_negative_numbers = true)]
    pub multiply: Option<Vec<f64>>,

    /// Divide two numbers.
    #[arg(short, long, num_args = 1.., value_name = "NUMBER", allow_negative_numbers = true)]
    pub divide: Option<Vec<f64>>,

    /// Start the calculate REST service.
    #[arg(short, long)]
    pub rest: bool,

    /// Port for the REST service, 5000 is default.
    #[arg(long)]
    pub port: Option<u16>,

    /// Logging level, DEBUG is default.
    #[arg(long, env = "LOGLEVEL", value_enum, ignore_case = true)]
    pub loglevel: Option<LogLevel>,

    /// Trace every HTTP request (default).
    #[arg(long, overrides_with = "no_debug")]
    pub debug: bool,

    /// Disable per-request tracing.
    #[arg(long = "no-debug", overrides_with = "debug")]
    pub no_debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Calculate { operation: Operation, a: f64, b: f64 },
    Serve,
    Usage,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        let given: Vec<(Operation, &Vec<f64>)> = [
            (Operation::Add, &self.add),
            (Operation::Subtract, &self.subtract),
            (Operation::Multiply, &self.multiply),
            (Operation::Divide, &self.divide),
        ]
        .into_iter()
        .filter_map(|(operation, values)| values.as_ref().map(|v| (operation, v)))
        .collect();

        if self.rest {
            return if given.is_empty() { Mode::Serve } else { Mode::Usage };
        }

        // Service options only make sense together with --rest
        if self.port.is_some() || self.debug || self.no_debug {
            return Mode::Usage;
        }

        match given.as_slice() {
            [(operation, values)] if values.len() == 2 => Mode::Calculate {
                operation: *operation,
                a: values[0],
                b: values[1],
            },
            _ => Mode::Usage,
        }
    }

    pub fn debug_override(&self) -> Option<bool> {
        if self.no_debug {
            Some(false)
        } else if self.debug {
            Some(true)
        } else {
            None
        }
    }
}

pub fn print_usage() -> std::io::Result<()> {
    println!("Wrong number of arguments provided!\n");
    Cli::command().print_help()
}

/// Renders a finished computation the way the command line echoes it, e.g. `1.0+2.0=3.0`.
pub fn format_result(operation: Operation, a: f64, b: f64, result: f64) -> String {
    format!("{:?}{}{:?}={:?}", a, operation.symbol(), b, result)
}
