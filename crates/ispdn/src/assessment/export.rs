use chrono::NaiveDate;
use std::path::Path;

use super::answers::{AssessmentAnswers, Classification, ValidationError};
use super::catalog::{base_requirements, measures_for_level};
use super::context::{ActContext, ActUserInputs};
use crate::document::{
    fill_labelled_blanks, render, replace_placeholders, DocumentError, DocxTemplate,
    StructuredDocument,
};

pub const DEFAULT_REPORT_NAME: &str = "Отчет ИСПДн";
pub const DATE_LABEL: &str = "Дата";

/// Errors raised while producing an exported document.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Keep alphanumerics, spaces, `-`, `_` and `.`; fall back to the default
/// report name and make sure the result ends in `.docx`.
pub fn safe_filename(name: Option<&str>) -> String {
    let cleaned: String = name
        .unwrap_or_default()
        .chars()
        .filter(|ch| ch.is_alphanumeric() || matches!(ch, ' ' | '-' | '_' | '.'))
        .collect();
    let cleaned = match cleaned.trim() {
        "" => DEFAULT_REPORT_NAME.to_string(),
        trimmed => trimmed.to_string(),
    };
    if cleaned.to_lowercase().ends_with(".docx") {
        cleaned
    } else {
        format!("{cleaned}.docx")
    }
}

/// Evaluation report document for the classification of `answers`.
pub fn report_document(answers: &AssessmentAnswers) -> Result<StructuredDocument, ValidationError> {
    let classification = answers.classify()?;
    let mut document = StructuredDocument::new();
    document.heading("Отчет по защищенности ИСПДн", 1);

    match classification {
        Classification::UnknownThreats {
            possible_levels, ..
        } => {
            document
                .text("Тип актуальных угроз выбран как «не известен».")
                .heading("Возможные уровни защищенности", 2);
            for (threat, level) in possible_levels {
                document.bullet(format!("Угрозы {} типа: уровень {}", threat.code(), level));
            }
            document.text(
                "Для уточнения уровня защищенности закажите услугу специалиста по определению \
                 типа актуальных угроз, после этого выполните перерасчет.",
            );
        }
        Classification::Determined { level } => {
            document
                .text(format!("Уровень защищенности: {level}"))
                .text("")
                .heading("Организационные требования", 2);
            for requirement in base_requirements(level) {
                document.bullet(*requirement);
            }
            document.heading("Базовый набор мер", 2);
            for measure in measures_for_level(level) {
                document
                    .bullet(format!("{} — {}", measure.code, measure.section))
                    .text(measure.description);
            }
        }
    }

    Ok(document)
}

/// Encoded evaluation report.
pub fn export_report(answers: &AssessmentAnswers) -> Result<Vec<u8>, ExportError> {
    let document = report_document(answers)?;
    Ok(render(&document)?)
}

/// Checks that must pass before the act template is touched.
pub fn validate_act_request(
    answers: &AssessmentAnswers,
    inputs: &ActUserInputs,
) -> Result<(), ValidationError> {
    inputs.validate()?;
    answers.category()?;
    if answers.has_unknown_threats() {
        return Err(ValidationError::UnknownThreatsInAct);
    }
    if answers.concrete_threats().is_empty() {
        return Err(ValidationError::MissingThreatTypes);
    }
    if answers.employees_only.is_none() {
        return Err(ValidationError::UndeterminedScope);
    }
    Ok(())
}

/// Fill the act template at `template` for `answers` and return the encoded act.
pub fn export_act(
    template: &Path,
    answers: &AssessmentAnswers,
    inputs: &ActUserInputs,
    today: NaiveDate,
) -> Result<Vec<u8>, ExportError> {
    validate_act_request(answers, inputs)?;

    let threats = answers.concrete_threats();
    let context = ActContext::build(answers, &threats, inputs)?;

    let mut act = DocxTemplate::open(template)?;
    let replaced = replace_placeholders(&mut act, &context.placeholders());
    let dated = fill_labelled_blanks(&mut act, DATE_LABEL, &today.format("%d.%m.%Y").to_string());
    tracing::debug!(replaced, dated, template = %template.display(), "act template filled");

    Ok(act.into_bytes()?)
}
