use std::fmt;
use std::str::FromStr;
use crate::errors::AppError;

/// The four arithmetic kinds accepted by the calculate action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Infix symbol used when echoing a computation on the command line.
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            other => Err(AppError::UnknownOperation(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_names() {
        assert_eq!("add".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("subtract".parse::<Operation>().unwrap(), Operation::Subtract);
        assert_eq!("multiply".parse::<Operation>().unwrap(), Operation::Multiply);
        assert_eq!("divide".parse::<Operation>().unwrap(), Operation::Divide);
    }

    #[test]
    fn rejects_unknown_and_differently_cased_names() {
        assert!(matches!(
            "modulo".parse::<Operation>(),
            Err(AppError::UnknownOperation(op)) if op == "modulo"
        ));
        assert!("Add".parse::<Operation>().is_err());
    }
}
