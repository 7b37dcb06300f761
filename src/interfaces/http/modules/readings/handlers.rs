//! Reading REST API handlers and form-compatible routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Redirect,
    Json,
};

use super::dto::{BillPreviewResponse, ReadingFormResponse, ReadingRequest, ReadingResponse};
use super::error::ApiError;
use super::form::ReadingForm;
use super::ReadingsState;
use crate::domain::{BillingRecord, DomainError, DomainResult, ReadingError};
use crate::interfaces::http::common::{ApiJson, ApiResponse, ValidatedForm};

/// Prefix the form page shows in front of a rejection message.
const FORM_ERROR_PREFIX: &str = "Error! ";

/// Turn an engine rejection into a response that carries the current listing.
async fn reject_with_listing(state: &ReadingsState, err: ReadingError, prefix: &str) -> ApiError {
    match state.billing.list_readings().await {
        Ok(records) => ApiError::Rejected {
            message: format!("{}{}", prefix, err),
            readings: records.into_iter().map(Into::into).collect(),
        },
        Err(e) => ApiError::Domain(e),
    }
}

async fn settle(
    state: &ReadingsState,
    result: DomainResult<BillingRecord>,
    prefix: &str,
) -> Result<BillingRecord, ApiError> {
    match result {
        Ok(record) => Ok(record),
        Err(DomainError::Validation(err)) => Err(reject_with_listing(state, err, prefix).await),
        Err(e) => Err(e.into()),
    }
}

async fn listing(
    state: &ReadingsState,
) -> Result<Json<ApiResponse<Vec<ReadingResponse>>>, ApiError> {
    let records = state.billing.list_readings().await?;
    Ok(Json(ApiResponse::success(
        records.into_iter().map(Into::into).collect(),
    )))
}

// ── REST API ───────────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/api/v1/readings",
    tag = "Readings",
    responses(
        (status = 200, description = "All billing records", body = ApiResponse<Vec<ReadingResponse>>)
    )
)]
pub async fn list_readings(
    State(state): State<ReadingsState>,
) -> Result<Json<ApiResponse<Vec<ReadingResponse>>>, ApiError> {
    listing(&state).await
}

#[utoipa::path(
    get,
    path = "/api/v1/readings/{id}",
    tag = "Readings",
    params(("id" = i32, Path, description = "Reading ID")),
    responses(
        (status = 200, description = "Billing record", body = ApiResponse<ReadingResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_reading(
    State(state): State<ReadingsState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ReadingResponse>>, ApiError> {
    let record = state.billing.get_reading(id).await?;
    Ok(Json(ApiResponse::success(record.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/readings",
    tag = "Readings",
    request_body = ReadingRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<ReadingResponse>),
        (status = 400, description = "Malformed input"),
        (status = 422, description = "Readings rejected; current listing in `data`", body = ApiResponse<Vec<ReadingResponse>>)
    )
)]
pub async fn create_reading(
    State(state): State<ReadingsState>,
    ApiJson(req): ApiJson<ReadingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReadingResponse>>), ApiError> {
    let result = state.billing.create_reading(req.into()).await;
    let record = settle(&state, result, "").await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(record.into()))))
}

#[utoipa::path(
    put,
    path = "/api/v1/readings/{id}",
    tag = "Readings",
    params(("id" = i32, Path, description = "Reading ID")),
    request_body = ReadingRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<ReadingResponse>),
        (status = 400, description = "Malformed input"),
        (status = 404, description = "Not found"),
        (status = 422, description = "Readings rejected; current listing in `data`", body = ApiResponse<Vec<ReadingResponse>>)
    )
)]
pub async fn update_reading(
    State(state): State<ReadingsState>,
    Path(id): Path<i32>,
    ApiJson(req): ApiJson<ReadingRequest>,
) -> Result<Json<ApiResponse<ReadingResponse>>, ApiError> {
    let result = state.billing.update_reading(id, req.into()).await;
    let record = settle(&state, result, "").await?;
    Ok(Json(ApiResponse::success(record.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/readings/{id}",
    tag = "Readings",
    params(("id" = i32, Path, description = "Reading ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_reading(
    State(state): State<ReadingsState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.billing.delete_reading(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/readings/preview",
    tag = "Readings",
    request_body = ReadingRequest,
    responses(
        (status = 200, description = "Computed bill, nothing stored", body = ApiResponse<BillPreviewResponse>),
        (status = 400, description = "Malformed input"),
        (status = 422, description = "Readings rejected")
    )
)]
pub async fn preview_bill(
    State(state): State<ReadingsState>,
    ApiJson(req): ApiJson<ReadingRequest>,
) -> Result<Json<ApiResponse<BillPreviewResponse>>, ApiError> {
    let derived = state.billing.preview(&req.into())?;
    Ok(Json(ApiResponse::success(derived.into())))
}

// ── Form routes ────────────────────────────────────────────────

/// `GET /`: listing shown above the entry form
pub async fn index(
    State(state): State<ReadingsState>,
) -> Result<Json<ApiResponse<Vec<ReadingResponse>>>, ApiError> {
    listing(&state).await
}

/// `POST /`: create from the entry form, back to the listing on success
pub async fn submit_reading(
    State(state): State<ReadingsState>,
    ValidatedForm(form): ValidatedForm<ReadingForm>,
) -> Result<Redirect, ApiError> {
    let pair = form.parse()?;
    let result = state.billing.create_reading(pair).await;
    settle(&state, result, FORM_ERROR_PREFIX).await?;
    Ok(Redirect::to("/"))
}

/// `GET /update/{id}`: record prepared for the edit form
pub async fn edit_reading(
    State(state): State<ReadingsState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ReadingFormResponse>>, ApiError> {
    let record = state.billing.get_reading(id).await?;
    Ok(Json(ApiResponse::success(record.into())))
}

/// `POST /update/{id}`: overwrite from the edit form
pub async fn submit_update(
    State(state): State<ReadingsState>,
    Path(id): Path<i32>,
    ValidatedForm(form): ValidatedForm<ReadingForm>,
) -> Result<Redirect, ApiError> {
    let pair = form.parse()?;
    let result = state.billing.update_reading(id, pair).await;
    settle(&state, result, FORM_ERROR_PREFIX).await?;
    Ok(Redirect::to("/"))
}

/// `GET /delete/{id}`: delete and go back to the listing
pub async fn remove_reading(
    State(state): State<ReadingsState>,
    Path(id): Path<i32>,
) -> Result<Redirect, ApiError> {
    state.billing.delete_reading(id).await?;
    Ok(Redirect::to("/"))
}
