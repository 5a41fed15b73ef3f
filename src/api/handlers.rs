use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, RawQuery, State};
use log::error;

use crate::core::Record;

use super::error::ApiError;
use super::query::parse_params;
use super::state::AppState;
use super::types::FieldError;

const HIDDEN_DETAIL: &str = "Internal Server Error";

pub async fn test_data(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Record>>, ApiError> {
    let Query(pairs) = query.map_err(|_| {
        ApiError::InvalidQuery(vec![FieldError::malformed(raw.as_deref().unwrap_or(""))])
    })?;
    let params = parse_params(pairs).map_err(ApiError::InvalidQuery)?;

    match state.source.fetch(&params).await {
        Ok(rows) => Ok(Json(rows)),
        Err(err) => {
            error!(error:% = err, params = params; "test data request failed");
            let detail = if state.expose_error_detail {
                err.detail().to_string()
            } else {
                HIDDEN_DETAIL.to_string()
            };
            Err(ApiError::Internal(detail))
        }
    }
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
