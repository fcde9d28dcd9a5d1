use crate::infra::{parse_category, parse_threat, parse_volume};
use clap::Args;
use ispdn::assessment::{
    measures_for_number, AssessmentAnswers, DataCategory, EvaluationReport, NonEmployeeVolume,
    ThreatAnswer,
};
use ispdn::error::AppError;
use std::io::{self, Write};

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Category of processed personal data (special, biometric, public, other)
    #[arg(long, value_parser = parse_category)]
    pub(crate) data_type: DataCategory,
    /// Actual threat type; repeat for several (1, 2, 3, unknown)
    #[arg(long = "threat", value_parser = parse_threat, required = true)]
    pub(crate) threats: Vec<ThreatAnswer>,
    /// Only the operator's employees are data subjects
    #[arg(long)]
    pub(crate) employees_only: bool,
    /// Number of non-employee subjects (under_100k, over_100k)
    #[arg(long, value_parser = parse_volume)]
    pub(crate) non_employee_scope: Option<NonEmployeeVolume>,
    /// Print the JSON returned by the HTTP API instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

impl EvaluateArgs {
    fn answers(&self) -> AssessmentAnswers {
        AssessmentAnswers {
            data_type: Some(self.data_type),
            threats: self.threats.clone(),
            employees_only: Some(self.employees_only),
            non_employee_scope: self.non_employee_scope,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// Protection level, 1 (strictest) to 4
    #[arg(long)]
    pub(crate) level: u8,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let report = EvaluationReport::build(&args.answers())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &report).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        write_evaluation(&report, &mut out)?;
    }
    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let stdout = io::stdout();
    write_catalog(args.level, stdout.lock())
}

fn write_evaluation<W: Write>(report: &EvaluationReport, out: &mut W) -> io::Result<()> {
    match report {
        EvaluationReport::Determined {
            level,
            base_requirements,
            measures,
        } => {
            writeln!(out, "Уровень защищенности: {level}")?;
            writeln!(out)?;
            writeln!(out, "Организационные требования:")?;
            for requirement in base_requirements {
                writeln!(out, "  • {requirement}")?;
            }
            writeln!(out)?;
            writeln!(out, "Базовый набор мер ({}):", measures.len())?;
            for measure in measures {
                writeln!(out, "  {:<8} {}", measure.code, measure.description)?;
            }
        }
        EvaluationReport::UnknownThreats {
            level,
            possible_levels,
            ..
        } => {
            writeln!(out, "Тип актуальных угроз не определён.")?;
            writeln!(out, "Возможные уровни защищенности:")?;
            for possible in possible_levels {
                writeln!(
                    out,
                    "  • Угрозы {} типа: уровень {}",
                    possible.threat_type.code(),
                    possible.level
                )?;
            }
            writeln!(out, "Ориентировочный уровень: {level}")?;
            writeln!(
                out,
                "Для уточнения уровня закажите определение типа актуальных угроз у специалиста."
            )?;
        }
    }
    Ok(())
}

fn write_catalog<W: Write>(level: u8, out: W) -> Result<(), AppError> {
    let measures = measures_for_number(level)?;
    let mut writer = csv::Writer::from_writer(out);
    for measure in &measures {
        writer.serialize(measure).map_err(io::Error::from)?;
    }
    writer.flush()?;
    tracing::debug!(level, count = measures.len(), "measure catalog written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ispdn::assessment::CatalogError;

    fn evaluate_args(threats: Vec<ThreatAnswer>) -> EvaluateArgs {
        EvaluateArgs {
            data_type: DataCategory::Special,
            threats,
            employees_only: false,
            non_employee_scope: Some(NonEmployeeVolume::Over100k),
            json: false,
        }
    }

    #[test]
    fn determined_summary_starts_with_level() {
        let report =
            EvaluationReport::build(&evaluate_args(vec![ThreatAnswer::Type3]).answers())
                .expect("evaluation succeeds");
        let mut out = Vec::new();

        write_evaluation(&report, &mut out).expect("summary written");

        let text = String::from_utf8(out).expect("utf-8");
        assert!(text.starts_with("Уровень защищенности: 2\n"));
        assert!(text.contains("ИАФ.1"));
    }

    #[test]
    fn unknown_summary_lists_each_threat_type() {
        let report =
            EvaluationReport::build(&evaluate_args(vec![ThreatAnswer::Unknown]).answers())
                .expect("evaluation succeeds");
        let mut out = Vec::new();

        write_evaluation(&report, &mut out).expect("summary written");

        let text = String::from_utf8(out).expect("utf-8");
        assert!(text.contains("Угрозы 1 типа: уровень 1"));
        assert!(text.contains("Угрозы 3 типа: уровень 2"));
        assert!(text.contains("Ориентировочный уровень: 2"));
    }

    #[test]
    fn catalog_is_written_as_csv_with_header() {
        let mut out = Vec::new();

        write_catalog(4, &mut out).expect("catalog written");

        let mut reader = csv::Reader::from_reader(out.as_slice());
        let headers = reader.headers().expect("header row").clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), ["code", "section", "description"]);
        let rows = reader.records().count();
        assert_eq!(rows, measures_for_number(4).expect("level 4").len());
    }

    #[test]
    fn catalog_rejects_unknown_levels() {
        let result = write_catalog(7, Vec::new());
        assert!(matches!(
            result,
            Err(AppError::Catalog(CatalogError::LevelOutOfRange(7)))
        ));
    }
}
