use crate::errors::{AppError, AppResult};
use crate::models::Operation;

/// Stateless arithmetic over two `f64` operands.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(&self, operation: Operation, a: f64, b: f64) -> AppResult<f64> {
        tracing::debug!(%operation, a, b, "performing calculation");
        match operation {
            Operation::Add => Ok(self.add(a, b)),
            Operation::Subtract => Ok(self.subtract(a, b)),
            Operation::Multiply => Ok(self.multiply(a, b)),
            Operation::Divide => self.divide(a, b),
        }
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// Fails on a zero divisor (either sign); otherwise plain IEEE-754 division.
    pub fn divide(&self, a: f64, b: f64) -> AppResult<f64> {
        if b == 0.0 {
            return Err(AppError::DivisionByZero);
        }
        Ok(a / b)
    }
}
