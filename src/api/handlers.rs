use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde_json::{json, Value};

use super::dto::{AddTransactionRequest, DeleteTransactionRequest, SetBudgetRequest};
use super::errors::{
    json_error, json_rejection_to_response, ledger_error_to_response, path_rejection_to_response,
};
use super::AppState;
use crate::ledger::{Dashboard, MonthlySummary};
use crate::models::input::check_month;

type ApiResult<T> = Result<Json<T>, Response>;

pub async fn health() -> &'static str {
    "ok"
}

pub async fn add_transaction(
    State(state): State<AppState>,
    body: Result<Json<AddTransactionRequest>, JsonRejection>,
) -> ApiResult<Value> {
    let Json(req) = body.map_err(json_rejection_to_response)?;
    let new = req.validate().map_err(ledger_error_to_response)?;

    let mut ledger = state.lock()?;
    let txn = ledger
        .add_transaction(
            new.amount,
            &new.category,
            &new.description,
            new.transaction_type,
            new.date,
        )
        .map_err(ledger_error_to_response)?;

    Ok(Json(json!({
        "success": true,
        "transaction": txn,
        "new_balance": ledger.get_balance(),
    })))
}

pub async fn set_budget(
    State(state): State<AppState>,
    body: Result<Json<SetBudgetRequest>, JsonRejection>,
) -> ApiResult<Value> {
    let Json(req) = body.map_err(json_rejection_to_response)?;
    let (category, limit) = req.validate().map_err(ledger_error_to_response)?;

    let mut ledger = state.lock()?;
    let budget = ledger
        .set_budget(&category, limit)
        .map_err(ledger_error_to_response)?;

    Ok(Json(json!({
        "success": true,
        "budget": budget,
        "budget_status": ledger.get_budget_status(),
    })))
}

pub async fn delete_transaction(
    State(state): State<AppState>,
    body: Result<Json<DeleteTransactionRequest>, JsonRejection>,
) -> ApiResult<Value> {
    let Json(req) = body.map_err(json_rejection_to_response)?;
    let id = req.validate().map_err(ledger_error_to_response)?;

    let mut ledger = state.lock()?;
    let removed = ledger
        .delete_transaction(&id)
        .map_err(ledger_error_to_response)?;
    if !removed {
        return Err(json_error(StatusCode::NOT_FOUND, "Transaction not found"));
    }

    Ok(Json(json!({
        "success": true,
        "new_balance": ledger.get_balance(),
    })))
}

pub async fn monthly_summary(
    State(state): State<AppState>,
    path: Result<Path<(i32, u32)>, PathRejection>,
) -> ApiResult<MonthlySummary> {
    let Path((year, month)) = path.map_err(path_rejection_to_response)?;
    check_month(month).map_err(ledger_error_to_response)?;

    let ledger = state.lock()?;
    Ok(Json(ledger.get_monthly_summary(year, month)))
}

pub async fn dashboard_data(State(state): State<AppState>) -> ApiResult<Dashboard> {
    let recent_limit = state.recent_limit;
    let mut ledger = state.lock()?;
    Ok(Json(ledger.dashboard(recent_limit)))
}
