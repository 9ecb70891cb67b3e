use crate::evaluation::{BinaryClassificationEvaluator, ConfusionCounts, Measurement, PerformanceEvaluator};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;
use strum_macros::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

/// Result of evaluating one trained learner on one set of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub name: String,
    pub learner: String,
    pub evaluated: usize,
    pub counts: ConfusionCounts,
    pub measurements: Vec<Measurement>,
}

impl EvaluationReport {
    pub fn from_evaluator<N, L>(name: N, learner: L, evaluator: &BinaryClassificationEvaluator) -> Self
    where
        N: Into<String>,
        L: Into<String>,
    {
        let counts = evaluator.counts();
        Self {
            name: name.into(),
            learner: learner.into(),
            evaluated: counts.total(),
            counts,
            measurements: evaluator.performance(),
        }
    }

    pub fn measurement(&self, name: &str) -> Option<f64> {
        self.measurements
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.value)
    }

    pub fn accuracy(&self) -> f64 {
        self.measurement("accuracy").unwrap_or(f64::NAN)
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: ReportFormat) -> Result<(), Error> {
        export_reports(std::slice::from_ref(self), path, fmt)
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.counts;
        writeln!(f, "{} [{}]: {} records", self.name, self.learner, self.evaluated)?;
        writeln!(f, "True Pos: {:.2}%", c.percentage(c.true_positive))?;
        writeln!(f, "True Neg: {:.2}%", c.percentage(c.true_negative))?;
        writeln!(f, "Total True: {:.2}%", c.percentage(c.correct()))?;
        writeln!(f)?;
        writeln!(f, "False Pos: {:.2}%", c.percentage(c.false_positive))?;
        writeln!(f, "False Neg: {:.2}%", c.percentage(c.false_negative))?;
        write!(f, "Total False: {:.2}%", c.percentage(c.incorrect()))
    }
}

const COLUMNS: [&str; 8] = [
    "name",
    "learner",
    "evaluated",
    "true_positive",
    "true_negative",
    "false_positive",
    "false_negative",
    "accuracy",
];

/// Writes several reports to one file, one row (or JSON object) per report.
pub fn export_reports<P: AsRef<Path>>(
    reports: &[EvaluationReport],
    path: P,
    fmt: ReportFormat,
) -> Result<(), Error> {
    match fmt {
        ReportFormat::Csv => export_with_delimiter(reports, path, ','),
        ReportFormat::Tsv => export_with_delimiter(reports, path, '\t'),
        ReportFormat::Json => {
            let mut w = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut w, reports)?;
            writeln!(w)?;
            w.flush()
        }
    }
}

fn export_with_delimiter<P: AsRef<Path>>(
    reports: &[EvaluationReport],
    path: P,
    delimiter: char,
) -> Result<(), Error> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "{}", COLUMNS.join(&delimiter.to_string()))?;
    for r in reports {
        let c = &r.counts;
        writeln!(
            w,
            "{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{:.12}",
            r.name,
            r.learner,
            r.evaluated,
            c.true_positive,
            c.true_negative,
            c.false_positive,
            c.false_negative,
            r.accuracy(),
            d = delimiter
        )?;
    }
    w.flush()
}
