use super::domain::{DataCategory, Level, NonEmployeeVolume, SubjectScope, ThreatType};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ClassificationError {
    #[error("at least one concrete threat type is required to determine a level")]
    NoThreatTypes,
}

/// Subject population column of the decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Population {
    Employees,
    Under100k,
    Over100k,
}

impl From<SubjectScope> for Population {
    fn from(scope: SubjectScope) -> Self {
        match scope {
            SubjectScope::EmployeesOnly => Self::Employees,
            SubjectScope::NonEmployees(NonEmployeeVolume::Under100k) => Self::Under100k,
            SubjectScope::NonEmployees(NonEmployeeVolume::Over100k) => Self::Over100k,
        }
    }
}

use Level::{L1, L2, L3, L4};

/// Decree No. 1119 items 9-12. Indexed by category, then threat type, then
/// population (employees, under 100k, over 100k).
const DECISION_TABLE: [[[Level; 3]; 3]; 4] = [
    // special
    [[L1, L1, L1], [L2, L2, L1], [L3, L3, L2]],
    // biometric
    [[L1, L1, L1], [L2, L2, L2], [L3, L3, L3]],
    // other
    [[L1, L1, L1], [L3, L3, L2], [L4, L4, L3]],
    // public
    [[L2, L2, L2], [L3, L3, L2], [L4, L4, L4]],
];

const fn category_row(category: DataCategory) -> usize {
    match category {
        DataCategory::Special => 0,
        DataCategory::Biometric => 1,
        DataCategory::Other => 2,
        DataCategory::Public => 3,
    }
}

const fn threat_row(threat: ThreatType) -> usize {
    match threat {
        ThreatType::Type1 => 0,
        ThreatType::Type2 => 1,
        ThreatType::Type3 => 2,
    }
}

const fn population_column(population: Population) -> usize {
    match population {
        Population::Employees => 0,
        Population::Under100k => 1,
        Population::Over100k => 2,
    }
}

/// Level implied by a single concrete threat type.
pub fn level_for(category: DataCategory, threat: ThreatType, scope: SubjectScope) -> Level {
    DECISION_TABLE[category_row(category)][threat_row(threat)]
        [population_column(Population::from(scope))]
}

/// Most restrictive level across the given threat types, each evaluated on its own.
pub fn determine_level(
    category: DataCategory,
    threats: &[ThreatType],
    scope: SubjectScope,
) -> Result<Level, ClassificationError> {
    threats
        .iter()
        .map(|threat| level_for(category, *threat, scope))
        .min()
        .ok_or(ClassificationError::NoThreatTypes)
}

/// Level under each threat type hypothesis, in the order 1, 2, 3.
pub fn enumerate_levels_for_unknown_threat(
    category: DataCategory,
    scope: SubjectScope,
) -> [(ThreatType, Level); 3] {
    ThreatType::ordered().map(|threat| (threat, level_for(category, threat, scope)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use DataCategory::{Other, Public, Special};
    use ThreatType::{Type1, Type2, Type3};

    fn all_inputs() -> Vec<(DataCategory, ThreatType, SubjectScope)> {
        let mut inputs = Vec::new();
        for category in DataCategory::ordered() {
            for threat in ThreatType::ordered() {
                for scope in SubjectScope::ordered() {
                    inputs.push((category, threat, scope));
                }
            }
        }
        inputs
    }

    #[test]
    fn every_input_owns_one_table_cell() {
        let mut cells: Vec<(usize, usize, usize)> = all_inputs()
            .into_iter()
            .map(|(category, threat, scope)| {
                (
                    category_row(category),
                    threat_row(threat),
                    population_column(Population::from(scope)),
                )
            })
            .collect();
        cells.sort();
        cells.dedup();
        assert_eq!(cells.len(), 4 * 3 * 3);
    }

    #[test]
    fn determine_level_is_repeatable() {
        for (category, threat, scope) in all_inputs() {
            let first = determine_level(category, &[threat], scope).expect("level");
            let second = determine_level(category, &[threat], scope).expect("level");
            assert_eq!(first, second);
            assert!((1..=4).contains(&first.number()));
        }
    }

    #[test]
    fn more_severe_threats_never_relax_the_level() {
        for category in DataCategory::ordered() {
            for scope in SubjectScope::ordered() {
                let levels = ThreatType::ordered().map(|threat| level_for(category, threat, scope));
                assert!(levels[0] <= levels[1], "{category:?}/{scope:?}");
                assert!(levels[1] <= levels[2], "{category:?}/{scope:?}");
            }
        }
    }

    #[test]
    fn multiple_threat_types_take_the_minimum() {
        for category in DataCategory::ordered() {
            for scope in SubjectScope::ordered() {
                let combined =
                    determine_level(category, &[Type3, Type2], scope).expect("level");
                let expected = level_for(category, Type2, scope).min(level_for(category, Type3, scope));
                assert_eq!(combined, expected);
            }
        }
    }

    #[test]
    fn empty_threat_set_is_rejected() {
        let scope = SubjectScope::EmployeesOnly;
        assert_eq!(
            determine_level(Special, &[], scope),
            Err(ClassificationError::NoThreatTypes)
        );
    }

    #[test]
    fn reference_cases_match_the_decree() {
        let over = SubjectScope::NonEmployees(NonEmployeeVolume::Over100k);
        let under = SubjectScope::NonEmployees(NonEmployeeVolume::Under100k);
        assert_eq!(level_for(DataCategory::Biometric, Type1, over), L1);
        assert_eq!(level_for(Special, Type2, over), L1);
        assert_eq!(level_for(Special, Type2, under), L2);
        assert_eq!(level_for(Public, Type1, over), L2);
        assert_eq!(level_for(Other, Type3, SubjectScope::EmployeesOnly), L4);
        assert_eq!(level_for(Other, Type3, over), L3);
    }

    #[test]
    fn unknown_threat_enumerates_three_hypotheses() {
        let scope = SubjectScope::NonEmployees(NonEmployeeVolume::Over100k);
        let levels = enumerate_levels_for_unknown_threat(Special, scope);
        assert_eq!(levels, [(Type1, L1), (Type2, L1), (Type3, L2)]);
    }
}
