use serde::Serialize;

use super::answers::{AssessmentAnswers, Classification, ValidationError};
use super::catalog::{base_requirements, measures_for_level};
use super::domain::{Level, Measure, ThreatType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PossibleLevel {
    pub threat_type: ThreatType,
    pub level: Level,
}

/// JSON result of an evaluation in one of its two shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EvaluationReport {
    #[serde(rename_all = "camelCase")]
    Determined {
        level: Level,
        base_requirements: Vec<String>,
        measures: Vec<Measure>,
    },
    #[serde(rename_all = "camelCase")]
    UnknownThreats {
        level: Level,
        possible_levels: Vec<PossibleLevel>,
        unknown_threats: bool,
        base_requirements: Vec<String>,
        measures: Vec<Measure>,
    },
}

impl EvaluationReport {
    pub fn build(answers: &AssessmentAnswers) -> Result<Self, ValidationError> {
        answers.classify().map(Self::from_classification)
    }

    pub fn from_classification(classification: Classification) -> Self {
        match classification {
            Classification::Determined { level } => EvaluationReport::Determined {
                level,
                base_requirements: base_requirements(level)
                    .iter()
                    .map(|requirement| requirement.to_string())
                    .collect(),
                measures: measures_for_level(level),
            },
            Classification::UnknownThreats {
                summary_level,
                possible_levels,
            } => EvaluationReport::UnknownThreats {
                level: summary_level,
                possible_levels: possible_levels
                    .iter()
                    .map(|(threat_type, level)| PossibleLevel {
                        threat_type: *threat_type,
                        level: *level,
                    })
                    .collect(),
                unknown_threats: true,
                base_requirements: Vec::new(),
                measures: Vec::new(),
            },
        }
    }

    pub fn level(&self) -> Level {
        match self {
            EvaluationReport::Determined { level, .. }
            | EvaluationReport::UnknownThreats { level, .. } => *level,
        }
    }
}
