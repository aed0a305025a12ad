use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

// `operation` stays a string here so an unknown name surfaces as `AppError::UnknownOperation`
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CalculationForm {
    pub operation: String,
    pub operand1: f64,
    pub operand2: f64,
}
