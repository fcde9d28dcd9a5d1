use crate::assessment::{CatalogError, ClassificationError, ExportError, ValidationError};
use crate::config::ConfigError;
use crate::document::DocumentError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Validation(ValidationError),
    Classification(ClassificationError),
    Catalog(CatalogError),
    Document(DocumentError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Document(DocumentError::TemplateNotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Classification(_)
            | AppError::Catalog(_)
            | AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Document(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Validation(err) => write!(f, "invalid request: {}", err),
            AppError::Classification(err) => write!(f, "classification error: {}", err),
            AppError::Catalog(err) => write!(f, "catalog error: {}", err),
            AppError::Document(err) => write!(f, "document error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Validation(err) => Some(err),
            AppError::Classification(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Document(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<ValidationError> for AppError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<ClassificationError> for AppError {
    fn from(value: ClassificationError) -> Self {
        Self::Classification(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<DocumentError> for AppError {
    fn from(value: DocumentError) -> Self {
        Self::Document(value)
    }
}

impl From<ExportError> for AppError {
    fn from(value: ExportError) -> Self {
        match value {
            ExportError::Validation(err) => Self::Validation(err),
            ExportError::Document(err) => Self::Document(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn validation_failures_are_client_errors() {
        let err = AppError::from(ValidationError::MissingDataCategory);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "invalid request: data category (dataType) is required"
        );
    }

    #[test]
    fn missing_template_maps_to_not_found() {
        let err = AppError::from(ExportError::Document(DocumentError::TemplateNotFound(
            PathBuf::from("templates/act_template.docx"),
        )));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn broken_template_is_a_server_error() {
        let err = AppError::from(DocumentError::InvalidFormat("bad zip".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn catalog_and_classifier_contract_breaks_are_server_errors() {
        let out_of_range = AppError::from(CatalogError::LevelOutOfRange(5));
        assert_eq!(out_of_range.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let no_threats = AppError::from(ClassificationError::NoThreatTypes);
        assert_eq!(no_threats.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
