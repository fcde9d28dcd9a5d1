use serde::{Deserialize, Serialize};

use super::answers::{AssessmentAnswers, ValidationError};
use super::classifier::determine_level;
use super::domain::ThreatType;
use crate::document::PlaceholderMap;

pub const PLACEHOLDER_HEAD_POSITION: &str = "Должность руководителя организации";
pub const PLACEHOLDER_ORGANIZATION: &str = "Наименование организации";
pub const PLACEHOLDER_SYSTEM_NAME: &str = "Наименование ИСПДн";
pub const PLACEHOLDER_CATEGORY: &str = "Категория персональных данных";
pub const PLACEHOLDER_EMPLOYEES: &str = "Только сотрудники/Не только сотрудники";
pub const PLACEHOLDER_VOLUME: &str = "Объём обрабатываемых субъектов";
pub const PLACEHOLDER_THREATS: &str = "Тип актуальных угроз";
pub const PLACEHOLDER_LEVEL: &str = "Вычисленный уровень защищённости ИСПДн";

pub const UNDETERMINED_THREATS_LABEL: &str =
    "Тип актуальных угроз не определён, требуется заключение специалиста";
pub const UNDETERMINED_LEVEL_LABEL: &str = "—";

/// Organization details typed into the act form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActUserInputs {
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub head_position: String,
    #[serde(default)]
    pub system_name: String,
}

impl ActUserInputs {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("organization", &self.organization),
            ("headPosition", &self.head_position),
            ("systemName", &self.system_name),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ValidationError::BlankField(name));
            }
        }
        Ok(())
    }
}

/// Human-readable strings substituted into the act template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActContext {
    pub organization: String,
    pub head_position: String,
    pub system_name: String,
    pub category_label: String,
    pub employees_label: String,
    pub volume_label: String,
    pub threats_label: String,
    pub level_label: String,
}

impl ActContext {
    /// `threats` holds the answers with `unknown` already stripped; the raw
    /// answers decide whether the threat type counts as undetermined.
    pub fn build(
        answers: &AssessmentAnswers,
        threats: &[ThreatType],
        inputs: &ActUserInputs,
    ) -> Result<Self, ValidationError> {
        let category = answers.category()?;
        let scope = answers.scope();
        let undetermined = answers.has_unknown_threats() || threats.is_empty();

        let (threats_label, level_label) = if undetermined {
            (
                UNDETERMINED_THREATS_LABEL.to_string(),
                UNDETERMINED_LEVEL_LABEL.to_string(),
            )
        } else {
            let labels: Vec<&str> = threats.iter().map(|threat| threat.label()).collect();
            let level = determine_level(category, threats, scope)
                .map_err(|_| ValidationError::MissingThreatTypes)?;
            (labels.join(", "), level.label())
        };

        Ok(Self {
            organization: inputs.organization.trim().to_string(),
            head_position: inputs.head_position.trim().to_string(),
            system_name: inputs.system_name.trim().to_string(),
            category_label: category.label().to_string(),
            employees_label: scope.employees_label().to_string(),
            volume_label: scope.volume_label().to_string(),
            threats_label,
            level_label,
        })
    }

    pub fn placeholders(&self) -> PlaceholderMap {
        [
            (PLACEHOLDER_HEAD_POSITION, self.head_position.as_str()),
            (PLACEHOLDER_ORGANIZATION, self.organization.as_str()),
            (PLACEHOLDER_SYSTEM_NAME, self.system_name.as_str()),
            (PLACEHOLDER_CATEGORY, self.category_label.as_str()),
            (PLACEHOLDER_EMPLOYEES, self.employees_label.as_str()),
            (PLACEHOLDER_VOLUME, self.volume_label.as_str()),
            (PLACEHOLDER_THREATS, self.threats_label.as_str()),
            (PLACEHOLDER_LEVEL, self.level_label.as_str()),
        ]
        .into_iter()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::{DataCategory, NonEmployeeVolume, ThreatAnswer};

    fn inputs() -> ActUserInputs {
        ActUserInputs {
            organization: " ООО «Ромашка» ".to_string(),
            head_position: "Генеральный директор".to_string(),
            system_name: "1С: Зарплата и управление персоналом".to_string(),
        }
    }

    #[test]
    fn labels_describe_a_determined_system() {
        let answers = AssessmentAnswers {
            data_type: Some(DataCategory::Other),
            threats: vec![ThreatAnswer::Type3, ThreatAnswer::Type2],
            employees_only: Some(false),
            non_employee_scope: Some(NonEmployeeVolume::Under100k),
        };

        let context =
            ActContext::build(&answers, &answers.concrete_threats(), &inputs()).expect("builds");

        assert_eq!(context.organization, "ООО «Ромашка»");
        assert_eq!(context.category_label, "Иные категории персональных данных");
        assert_eq!(context.employees_label, "Не только сотрудники");
        assert_eq!(context.threats_label, "Угрозы 2-го типа, Угрозы 3-го типа");
        assert_eq!(context.level_label, "3-й уровень защищённости (УЗ-3)");
    }

    #[test]
    fn unknown_in_raw_answers_marks_threats_undetermined() {
        let answers = AssessmentAnswers {
            data_type: Some(DataCategory::Special),
            threats: vec![ThreatAnswer::Type1, ThreatAnswer::Unknown],
            employees_only: Some(true),
            non_employee_scope: None,
        };

        let context =
            ActContext::build(&answers, &answers.concrete_threats(), &inputs()).expect("builds");

        assert_eq!(context.threats_label, UNDETERMINED_THREATS_LABEL);
        assert_eq!(context.level_label, UNDETERMINED_LEVEL_LABEL);
        assert_eq!(context.volume_label, "Только сотрудники оператора");
    }

    #[test]
    fn placeholder_map_covers_every_act_token() {
        let answers = AssessmentAnswers {
            data_type: Some(DataCategory::Public),
            threats: vec![ThreatAnswer::Type3],
            employees_only: Some(true),
            non_employee_scope: None,
        };
        let context =
            ActContext::build(&answers, &answers.concrete_threats(), &inputs()).expect("builds");

        let map = context.placeholders();

        assert_eq!(map.len(), 8);
        assert_eq!(map.get(PLACEHOLDER_LEVEL), Some("4-й уровень защищённости (УЗ-4)"));
        assert_eq!(map.get(PLACEHOLDER_EMPLOYEES), Some("Только сотрудники"));
    }

    #[test]
    fn blank_inputs_are_rejected() {
        let mut inputs = inputs();
        inputs.head_position = "   ".to_string();
        assert_eq!(
            inputs.validate(),
            Err(ValidationError::BlankField("headPosition"))
        );
    }
}
