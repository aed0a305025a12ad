use axum::extract::{Json, State};
use crate::errors::{AppError, AppResult};
use crate::models::{CalculationForm, Operation, ResultResponse};
use crate::state::AppState;
use super::json::AppJson;

pub async fn handle_calculate(
    State(state): State<AppState>,
    AppJson(form): AppJson<CalculationForm>,
) -> AppResult<Json<ResultResponse>> {
    let operation: Operation = form.operation.parse()?;
    let result = state
        .calculator
        .calculate(operation, form.operand1, form.operand2)?;

    // JSON has no encoding for inf or NaN
    if !result.is_finite() {
        return Err(AppError::Generic(
            "Out of range float values are not JSON compliant".into(),
        ));
    }

    tracing::info!(
        "Calculated {} of {} and {}: {}",
        operation, form.operand1, form.operand2, result
    );
    Ok(Json(ResultResponse { result }))
}
