use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl FromStr for Operation {
    type Err = ServiceError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            _ => Err(ServiceError::BadRequest("Invalid operation".into())),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CalculationQuery {
    pub operation: String,
    pub a: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalculationResult {
    pub result: f64,
}

pub fn calculate(operation: Operation, a: f64, b: f64) -> Result<f64, ServiceError> {
    debug!(?operation, a, b, "calculating");
    match operation {
        Operation::Add => Ok(a + b),
        Operation::Subtract => Ok(a - b),
        Operation::Multiply => Ok(a * b),
        Operation::Divide if b == 0.0 => Err(ServiceError::BadRequest(
            "Division by zero is not allowed".into(),
        )),
        Operation::Divide => Ok(a / b),
    }
}

impl CalculationQuery {
    pub fn evaluate(&self) -> Result<CalculationResult, ServiceError> {
        let operation = self.operation.parse()?;
        let result = calculate(operation, self.a, self.b)?;
        Ok(CalculationResult { result })
    }
}
