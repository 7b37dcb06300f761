//! Request extractors that answer with the API envelope on failure
//!
//! - `ApiJson<T>` works like `axum::Json<T>` but rejects malformed bodies
//!   with a 400 `ApiResponse`, so typed-field errors (bad dates, negative
//!   counters) never reach the billing engine.
//! - `ValidatedForm<T>` works like `axum::Form<T>` and additionally runs
//!   `validator::Validate::validate()` on the decoded value.

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::ApiResponse;

/// JSON body extractor with enveloped 400 rejections.
pub struct ApiJson<T>(pub T);

pub struct ApiJsonRejection(JsonRejection);

impl IntoResponse for ApiJsonRejection {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()>::error(format!("Invalid JSON: {}", self.0.body_text()));
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ApiJsonRejection)?;
        Ok(ApiJson(value))
    }
}

/// URL-encoded form extractor that validates the decoded value.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct Submit {
///     #[validate(length(min = 1))]
///     date1: String,
/// }
///
/// async fn handler(ValidatedForm(form): ValidatedForm<Submit>) {
///     // `form` passed validation
/// }
/// ```
pub struct ValidatedForm<T>(pub T);

/// Error type for `ValidatedForm` extraction failures.
pub enum ValidatedFormRejection {
    /// Form decoding failed.
    FormError(FormRejection),
    /// Validation failed.
    ValidationError(validator::ValidationErrors),
}

impl IntoResponse for ValidatedFormRejection {
    fn into_response(self) -> Response {
        let message = match self {
            Self::FormError(rejection) => format!("Invalid form: {}", rejection.body_text()),
            Self::ValidationError(errors) => {
                let mut field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errs)| {
                        errs.iter().map(move |e| {
                            let msg = e
                                .message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| format!("{:?}", e.code));
                            format!("{}: {}", field, msg)
                        })
                    })
                    .collect();
                field_errors.sort();

                if field_errors.is_empty() {
                    "Validation failed".to_string()
                } else {
                    field_errors.join("; ")
                }
            }
        };

        let body = ApiResponse::<()>::error(message);
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedFormRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(ValidatedFormRejection::FormError)?;

        value
            .validate()
            .map_err(ValidatedFormRejection::ValidationError)?;

        Ok(ValidatedForm(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    struct TestBody {
        #[validate(length(min = 1, max = 10))]
        name: String,
    }

    async fn form_handler(ValidatedForm(_body): ValidatedForm<TestBody>) -> &'static str {
        "ok"
    }

    async fn json_handler(ApiJson(_body): ApiJson<TestBody>) -> &'static str {
        "ok"
    }

    fn app() -> Router {
        Router::new()
            .route("/form", post(form_handler))
            .route("/json", post(json_handler))
    }

    async fn send(uri: &str, content_type: &str, body: &'static str) -> StatusCode {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", content_type)
            .body(Body::from(body))
            .unwrap();
        app().oneshot(req).await.unwrap().status()
    }

    #[tokio::test]
    async fn valid_form_returns_ok() {
        let status = send("/form", "application/x-www-form-urlencoded", "name=Alice").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_form_value_returns_400() {
        let status = send("/form", "application/x-www-form-urlencoded", "name=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn valid_json_returns_ok() {
        let status = send("/json", "application/json", r#"{"name":"Alice"}"#).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn malformed_json_returns_400() {
        assert_eq!(
            send("/json", "application/json", "not json").await,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            send("/json", "application/json", r#"{"name":5}"#).await,
            StatusCode::BAD_REQUEST
        );
    }
}
