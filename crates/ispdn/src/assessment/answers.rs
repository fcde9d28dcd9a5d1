use serde::{Deserialize, Serialize};

use super::classifier::{determine_level, enumerate_levels_for_unknown_threat};
use super::domain::{
    DataCategory, Level, NonEmployeeVolume, SubjectScope, ThreatAnswer, ThreatType,
};

/// Input problems detected before anything is computed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("malformed request payload: {0}")]
    MalformedPayload(String),
    #[error("data category (dataType) is required")]
    MissingDataCategory,
    #[error("at least one threat type must be selected")]
    MissingThreatTypes,
    #[error("{0} must not be empty")]
    BlankField(&'static str),
    #[error("the act cannot be generated while the threat type is unknown")]
    UnknownThreatsInAct,
    #[error("the subject scope (employeesOnly) must be specified for the act")]
    UndeterminedScope,
}

/// Questionnaire answers as submitted by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentAnswers {
    #[serde(default)]
    pub data_type: Option<DataCategory>,
    #[serde(default)]
    pub threats: Vec<ThreatAnswer>,
    #[serde(default)]
    pub employees_only: Option<bool>,
    #[serde(default)]
    pub non_employee_scope: Option<NonEmployeeVolume>,
}

/// Outcome of the shared branching rule: a concrete level, or the envelope of
/// levels when the threat type is unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Determined {
        level: Level,
    },
    UnknownThreats {
        summary_level: Level,
        possible_levels: [(ThreatType, Level); 3],
    },
}

impl Classification {
    pub fn level(&self) -> Level {
        match self {
            Classification::Determined { level } => *level,
            Classification::UnknownThreats { summary_level, .. } => *summary_level,
        }
    }
}

impl AssessmentAnswers {
    pub fn category(&self) -> Result<DataCategory, ValidationError> {
        self.data_type.ok_or(ValidationError::MissingDataCategory)
    }

    /// Subject scope with the form defaults applied.
    pub fn scope(&self) -> SubjectScope {
        SubjectScope::from_answers(self.employees_only.unwrap_or(false), self.non_employee_scope)
    }

    pub fn has_unknown_threats(&self) -> bool {
        self.threats.contains(&ThreatAnswer::Unknown)
    }

    /// Threat answers with the `unknown` sentinel stripped, deduplicated, in severity order.
    pub fn concrete_threats(&self) -> Vec<ThreatType> {
        let mut threats: Vec<ThreatType> = self
            .threats
            .iter()
            .filter_map(|answer| answer.concrete())
            .collect();
        threats.sort();
        threats.dedup();
        threats
    }

    /// Classification shared by the evaluation endpoint and every export.
    ///
    /// Any `unknown` answer selects the envelope branch, whose headline level is
    /// the numeric maximum over the three hypotheses.
    pub fn classify(&self) -> Result<Classification, ValidationError> {
        let category = self.category()?;
        let scope = self.scope();

        if self.has_unknown_threats() {
            let possible_levels = enumerate_levels_for_unknown_threat(category, scope);
            let summary_level = possible_levels
                .iter()
                .map(|(_, level)| *level)
                .max()
                .unwrap_or(Level::L4);
            return Ok(Classification::UnknownThreats {
                summary_level,
                possible_levels,
            });
        }

        let level = determine_level(category, &self.concrete_threats(), scope)
            .map_err(|_| ValidationError::MissingThreatTypes)?;
        Ok(Classification::Determined { level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(category: DataCategory, threats: &[ThreatAnswer]) -> AssessmentAnswers {
        AssessmentAnswers {
            data_type: Some(category),
            threats: threats.to_vec(),
            employees_only: Some(false),
            non_employee_scope: None,
        }
    }

    #[test]
    fn missing_volume_defaults_to_over_100k() {
        let answers = answers(DataCategory::Other, &[ThreatAnswer::Type3]);
        assert_eq!(
            answers.scope(),
            SubjectScope::NonEmployees(NonEmployeeVolume::Over100k)
        );
    }

    #[test]
    fn missing_category_is_a_validation_error() {
        let mut answers = answers(DataCategory::Other, &[ThreatAnswer::Type3]);
        answers.data_type = None;
        assert_eq!(answers.classify(), Err(ValidationError::MissingDataCategory));
    }

    #[test]
    fn empty_threats_are_a_validation_error() {
        let answers = answers(DataCategory::Public, &[]);
        assert_eq!(answers.classify(), Err(ValidationError::MissingThreatTypes));
    }

    #[test]
    fn unknown_wins_over_concrete_answers() {
        let answers = answers(
            DataCategory::Special,
            &[ThreatAnswer::Type3, ThreatAnswer::Unknown],
        );
        match answers.classify().expect("classifies") {
            Classification::UnknownThreats {
                summary_level,
                possible_levels,
            } => {
                assert_eq!(summary_level, Level::L2);
                assert_eq!(possible_levels[0], (ThreatType::Type1, Level::L1));
            }
            other => panic!("expected unknown branch, got {other:?}"),
        }
        assert_eq!(answers.concrete_threats(), vec![ThreatType::Type3]);
    }

    #[test]
    fn payload_uses_form_field_names() {
        let answers: AssessmentAnswers = serde_json::from_str(
            r#"{"dataType":"biometric","threats":["1","unknown"],"employeesOnly":false,"nonEmployeeScope":"under_100k"}"#,
        )
        .expect("payload parses");
        assert_eq!(answers.data_type, Some(DataCategory::Biometric));
        assert_eq!(answers.threats, vec![ThreatAnswer::Type1, ThreatAnswer::Unknown]);
        assert_eq!(answers.non_employee_scope, Some(NonEmployeeVolume::Under100k));
    }
}
