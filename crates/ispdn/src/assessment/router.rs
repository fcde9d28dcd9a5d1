use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Local;
use serde::Deserialize;
use tracing::{info, warn};

use super::answers::{AssessmentAnswers, ValidationError};
use super::context::ActUserInputs;
use super::export::{export_act, export_report, safe_filename, ExportError};
use super::report::EvaluationReport;
use crate::error::AppError;

const LEGACY_FALLBACK_NAME: &str = "report.docx";

/// Request-independent settings shared by the assessment handlers.
#[derive(Debug, Clone)]
pub struct AssessmentState {
    pub act_template: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportExportRequest {
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub payload: AssessmentAnswers,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActExportRequest {
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub payload: AssessmentAnswers,
    #[serde(default)]
    pub user_inputs: ActUserInputs,
}

/// Router exposing evaluation and document export endpoints.
pub fn assessment_router(state: Arc<AssessmentState>) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate_handler))
        .route("/export", post(export_report_handler))
        .route("/export/act", post(export_act_handler))
        .with_state(state)
}

fn parse<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected assessment payload");
        AppError::Validation(ValidationError::MalformedPayload(rejection.body_text()))
    })
}

pub(crate) async fn evaluate_handler(
    payload: Result<Json<AssessmentAnswers>, JsonRejection>,
) -> Result<Json<EvaluationReport>, AppError> {
    let answers = parse(payload)?;
    let report = EvaluationReport::build(&answers).map_err(|err| {
        warn!(error = %err, "evaluation rejected");
        AppError::from(err)
    })?;
    info!(
        level = report.level().number(),
        unknown_threats = answers.has_unknown_threats(),
        "security level evaluated"
    );
    Ok(Json(report))
}

pub(crate) async fn export_report_handler(
    payload: Result<Json<ReportExportRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let request = parse(payload)?;
    let file_name = safe_filename(request.file_name.as_deref());
    let bytes = export_report(&request.payload).map_err(log_export_error)?;
    info!(%file_name, size = bytes.len(), "evaluation report exported");
    Ok(attachment(&file_name, bytes))
}

pub(crate) async fn export_act_handler(
    State(state): State<Arc<AssessmentState>>,
    payload: Result<Json<ActExportRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let request = parse(payload)?;
    let file_name = safe_filename(request.file_name.as_deref());
    let today = Local::now().date_naive();
    let bytes = export_act(
        &state.act_template,
        &request.payload,
        &request.user_inputs,
        today,
    )
    .map_err(log_export_error)?;
    info!(%file_name, size = bytes.len(), "compliance act exported");
    Ok(attachment(&file_name, bytes))
}

fn log_export_error(err: ExportError) -> AppError {
    match &err {
        ExportError::Validation(inner) => warn!(error = %inner, "export rejected"),
        ExportError::Document(inner) => warn!(error = %inner, "export failed"),
    }
    AppError::from(err)
}

/// Plain `filename=` value for clients that ignore `filename*`.
fn legacy_filename(file_name: &str) -> &str {
    let quotable = file_name
        .chars()
        .all(|ch| ch.is_ascii() && !ch.is_ascii_control() && !matches!(ch, '"' | '\\'));
    if quotable && !file_name.is_empty() {
        file_name
    } else {
        LEGACY_FALLBACK_NAME
    }
}

/// Binary DOCX response offered as a download named `file_name`.
pub fn attachment(file_name: &str, bytes: Vec<u8>) -> Response {
    let content_type: mime::Mime = mime_guess::from_path(file_name).first_or_octet_stream();
    let disposition = format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        legacy_filename(file_name),
        urlencoding::encode(file_name)
    );
    let headers = [
        (
            header::CONTENT_TYPE,
            HeaderValue::from_str(content_type.essence_str())
                .unwrap_or(HeaderValue::from_static("application/octet-stream")),
        ),
        (
            header::CONTENT_DISPOSITION,
            HeaderValue::from_str(&disposition).unwrap_or(HeaderValue::from_static("attachment")),
        ),
    ];
    (headers, bytes).into_response()
}
