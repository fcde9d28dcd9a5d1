//! Security level assessment of personal data information systems: the
//! questionnaire answers, the decision table, the requirement and measure
//! catalog, and the report and act exports built on top of them.

pub mod answers;
pub mod catalog;
pub mod classifier;
pub mod context;
pub mod domain;
pub mod export;
pub mod report;
pub mod router;

#[cfg(test)]
mod tests;

pub use answers::{AssessmentAnswers, Classification, ValidationError};
pub use catalog::{base_requirements, measures_for_level, measures_for_number, CatalogError};
pub use classifier::{
    determine_level, enumerate_levels_for_unknown_threat, level_for, ClassificationError,
};
pub use context::{ActContext, ActUserInputs};
pub use domain::{
    DataCategory, Level, Measure, NonEmployeeVolume, SubjectScope, ThreatAnswer, ThreatType,
};
pub use export::{export_act, export_report, report_document, safe_filename, ExportError};
pub use report::{EvaluationReport, PossibleLevel};
pub use router::{assessment_router, AssessmentState};
