use crate::infra::{deserialize_date, AppState};
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{Local, NaiveDate};
use docmint::error::AppError;
use docmint::workflows::numbering::{
    generate_document_number, parse_document_number, DocumentNumber,
};
use docmint::workflows::templates::standard::{
    standard_variables, CompanySnapshot, ContactSnapshot, ProjectSnapshot,
};
use docmint::workflows::templates::{
    analyze_template, validate_variable_value, TemplateAnalysis, ValidationOutcome, VariableConfig,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;

pub(crate) fn api_router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/templates/analyze", post(analyze_endpoint))
        .route("/api/v1/variables/validate", post(validate_endpoint))
        .route("/api/v1/documents/number", post(number_endpoint))
        .route("/api/v1/documents/number/:value", get(parse_number_endpoint))
        .route(
            "/api/v1/documents/variables",
            post(standard_variables_endpoint),
        )
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeRequest {
    pub(crate) content: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeResponse {
    pub(crate) variables: TemplateAnalysis,
    pub(crate) configs: Vec<VariableConfig>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ValidateRequest {
    pub(crate) fields: Vec<FieldSubmission>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FieldSubmission {
    pub(crate) value: String,
    pub(crate) config: VariableConfig,
}

#[derive(Debug, Serialize)]
pub(crate) struct ValidateResponse {
    pub(crate) valid: bool,
    pub(crate) results: Vec<FieldResult>,
}

#[derive(Debug, Serialize)]
pub(crate) struct FieldResult {
    pub(crate) name: String,
    #[serde(flatten)]
    pub(crate) outcome: ValidationOutcome,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NumberRequest {
    #[serde(deserialize_with = "deserialize_date")]
    pub(crate) date: NaiveDate,
    pub(crate) counter: u16,
}

#[derive(Debug, Serialize)]
pub(crate) struct NumberResponse {
    pub(crate) document_number: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StandardVariablesRequest {
    pub(crate) project: ProjectSnapshot,
    pub(crate) company: CompanySnapshot,
    pub(crate) contact: ContactSnapshot,
    pub(crate) counter: u16,
}

#[derive(Debug, Serialize)]
pub(crate) struct StandardVariablesResponse {
    pub(crate) document_number: String,
    pub(crate) variables: BTreeMap<String, String>,
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn analyze_endpoint(
    Json(payload): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    let variables = analyze_template(&payload.content);
    let configs = variables.configs();
    Json(AnalyzeResponse { variables, configs })
}

pub(crate) async fn validate_endpoint(
    Json(payload): Json<ValidateRequest>,
) -> Json<ValidateResponse> {
    let results: Vec<FieldResult> = payload
        .fields
        .iter()
        .map(|field| FieldResult {
            name: field.config.name.clone(),
            outcome: validate_variable_value(&field.value, &field.config),
        })
        .collect();

    let valid = results.iter().all(|result| result.outcome.valid);
    Json(ValidateResponse { valid, results })
}

pub(crate) async fn number_endpoint(
    Json(payload): Json<NumberRequest>,
) -> Result<Json<NumberResponse>, AppError> {
    let document_number = generate_document_number(payload.date, payload.counter)?;
    Ok(Json(NumberResponse { document_number }))
}

pub(crate) async fn parse_number_endpoint(Path(value): Path<String>) -> axum::response::Response {
    match parse_document_number(&value) {
        Some(parsed) => (StatusCode::OK, Json::<DocumentNumber>(parsed)).into_response(),
        None => {
            let payload = json!({ "error": "not a HIYES document number" });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn standard_variables_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<StandardVariablesRequest>,
) -> Result<Json<StandardVariablesResponse>, AppError> {
    let StandardVariablesRequest {
        project,
        company,
        contact,
        counter,
    } = payload;

    let now = Local::now().naive_local();
    let variables = standard_variables(&project, &company, &contact, counter, state.tax_rate, now)?;
    let document_number = variables
        .get("document_number")
        .cloned()
        .unwrap_or_default();

    Ok(Json(StandardVariablesResponse {
        document_number,
        variables,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use docmint::workflows::templates::{infer_variable_config, VariableType};
    use tower::ServiceExt;

    #[tokio::test]
    async fn analyze_endpoint_returns_variables_and_configs() {
        let request = AnalyzeRequest {
            content: "Quote {{quotation_number}} for {{project_name}}, due {{delivery_date}}"
                .to_string(),
        };

        let Json(body) = analyze_endpoint(Json(request)).await;

        assert_eq!(
            body.variables.standard,
            vec!["project_name", "quotation_number"]
        );
        assert_eq!(body.variables.extra, vec!["delivery_date"]);
        let delivery = body
            .configs
            .iter()
            .find(|config| config.name == "delivery_date")
            .expect("delivery config present");
        assert_eq!(delivery.kind, VariableType::Date);
    }

    #[tokio::test]
    async fn validate_endpoint_aggregates_field_outcomes() {
        let request = ValidateRequest {
            fields: vec![
                FieldSubmission {
                    value: "test@example.com".to_string(),
                    config: infer_variable_config("email"),
                },
                FieldSubmission {
                    value: "".to_string(),
                    config: infer_variable_config("status"),
                },
            ],
        };

        let Json(body) = validate_endpoint(Json(request)).await;

        assert!(!body.valid);
        assert!(body.results[0].outcome.valid);
        assert!(!body.results[1].outcome.valid);
        assert_eq!(body.results[1].name, "status");
    }

    #[tokio::test]
    async fn number_endpoint_round_trips_through_parse() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 27).expect("valid date");
        let Json(body) = number_endpoint(Json(NumberRequest { date, counter: 1 }))
            .await
            .expect("number generates");
        assert_eq!(body.document_number, "HIYES25JBA001");

        let response = parse_number_endpoint(Path(body.document_number)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn number_endpoint_rejects_out_of_range_counter() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 27).expect("valid date");
        let result = number_endpoint(Json(NumberRequest { date, counter: 0 })).await;
        assert!(matches!(result, Err(AppError::Numbering(_))));
    }

    #[tokio::test]
    async fn router_serves_analyze_and_rejects_unknown_numbers() {
        let app = api_router();

        let analyze = Request::builder()
            .method("POST")
            .uri("/api/v1/templates/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"content":"{{price}}"}"#))
            .expect("request builds");
        let response = app
            .clone()
            .oneshot(analyze)
            .await
            .expect("analyze responds");
        assert_eq!(response.status(), StatusCode::OK);

        let probe = Request::builder()
            .uri("/api/v1/documents/number/NOTREAL")
            .body(Body::empty())
            .expect("request builds");
        let response = app.oneshot(probe).await.expect("probe responds");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
