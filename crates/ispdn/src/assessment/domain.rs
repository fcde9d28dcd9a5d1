use serde::{Deserialize, Serialize};
use std::fmt;

use super::catalog::CatalogError;

/// Category of personal data processed by the information system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataCategory {
    Special,
    Biometric,
    Public,
    Other,
}

impl DataCategory {
    pub const fn ordered() -> [Self; 4] {
        [Self::Special, Self::Biometric, Self::Public, Self::Other]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Special => "Специальные категории персональных данных",
            Self::Biometric => "Биометрические персональные данные",
            Self::Public => "Общедоступные персональные данные",
            Self::Other => "Иные категории персональных данных",
        }
    }
}

/// Concrete threat type; type 1 is the most severe attacker model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ThreatType {
    #[serde(rename = "1")]
    Type1,
    #[serde(rename = "2")]
    Type2,
    #[serde(rename = "3")]
    Type3,
}

impl ThreatType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Type1, Self::Type2, Self::Type3]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Type1 => "1",
            Self::Type2 => "2",
            Self::Type3 => "3",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Type1 => "Угрозы 1-го типа",
            Self::Type2 => "Угрозы 2-го типа",
            Self::Type3 => "Угрозы 3-го типа",
        }
    }
}

/// Threat type as answered in the questionnaire, including the `unknown` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreatAnswer {
    #[serde(rename = "1")]
    Type1,
    #[serde(rename = "2")]
    Type2,
    #[serde(rename = "3")]
    Type3,
    #[serde(rename = "unknown")]
    Unknown,
}

impl ThreatAnswer {
    pub const fn concrete(self) -> Option<ThreatType> {
        match self {
            Self::Type1 => Some(ThreatType::Type1),
            Self::Type2 => Some(ThreatType::Type2),
            Self::Type3 => Some(ThreatType::Type3),
            Self::Unknown => None,
        }
    }
}

impl From<ThreatType> for ThreatAnswer {
    fn from(value: ThreatType) -> Self {
        match value {
            ThreatType::Type1 => Self::Type1,
            ThreatType::Type2 => Self::Type2,
            ThreatType::Type3 => Self::Type3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NonEmployeeVolume {
    #[serde(rename = "under_100k")]
    Under100k,
    #[serde(rename = "over_100k")]
    Over100k,
}

impl NonEmployeeVolume {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Under100k => "Менее 100 000 субъектов, не являющихся сотрудниками оператора",
            Self::Over100k => "Более 100 000 субъектов, не являющихся сотрудниками оператора",
        }
    }
}

/// Who the processed personal data belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubjectScope {
    EmployeesOnly,
    NonEmployees(NonEmployeeVolume),
}

impl SubjectScope {
    /// A missing volume for non-employee processing is read as over 100k subjects.
    pub fn from_answers(employees_only: bool, volume: Option<NonEmployeeVolume>) -> Self {
        if employees_only {
            Self::EmployeesOnly
        } else {
            Self::NonEmployees(volume.unwrap_or(NonEmployeeVolume::Over100k))
        }
    }

    pub const fn ordered() -> [Self; 3] {
        [
            Self::EmployeesOnly,
            Self::NonEmployees(NonEmployeeVolume::Under100k),
            Self::NonEmployees(NonEmployeeVolume::Over100k),
        ]
    }

    pub const fn employees_only(self) -> bool {
        matches!(self, Self::EmployeesOnly)
    }

    pub const fn employees_label(self) -> &'static str {
        match self {
            Self::EmployeesOnly => "Только сотрудники",
            Self::NonEmployees(_) => "Не только сотрудники",
        }
    }

    pub const fn volume_label(self) -> &'static str {
        match self {
            Self::EmployeesOnly => "Только сотрудники оператора",
            Self::NonEmployees(volume) => volume.label(),
        }
    }
}

/// Security level of the information system; `L1` is the most stringent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Level {
    L1,
    L2,
    L3,
    L4,
}

impl Level {
    pub const fn ordered() -> [Self; 4] {
        [Self::L1, Self::L2, Self::L3, Self::L4]
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::L1 => 1,
            Self::L2 => 2,
            Self::L3 => 3,
            Self::L4 => 4,
        }
    }

    pub fn label(self) -> String {
        format!("{}-й уровень защищённости (УЗ-{})", self.number(), self.number())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl From<Level> for u8 {
    fn from(value: Level) -> Self {
        value.number()
    }
}

impl TryFrom<u8> for Level {
    type Error = CatalogError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::L1),
            2 => Ok(Self::L2),
            3 => Ok(Self::L3),
            4 => Ok(Self::L4),
            other => Err(CatalogError::LevelOutOfRange(other)),
        }
    }
}

/// Coded technical protection measure required at a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measure {
    pub code: String,
    pub section: String,
    pub description: String,
}
