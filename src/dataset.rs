//! CSV ingestion and persistence. Reading validates the header up front and
//! fails before any scoring; writing appends the six score columns after the
//! raw columns and preserves row order exactly. Every failure is terminal
//! for the run, there are no retries and no partial output.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{ScoredRecord, StudentRecord};

/// Input columns, in the order the reference dataset uses. Deserialization
/// matches by header name, so input files may order them differently; output
/// files are always written in this order.
pub const REQUIRED_COLUMNS: [&str; 15] = [
    "student_id",
    "age",
    "program",
    "semester",
    "gpa",
    "attendance",
    "assignments_completion",
    "stress_level",
    "sleep_hours",
    "mental_wellbeing",
    "productivity_score",
    "distractions",
    "career_clarity",
    "skill_readiness",
    "engagement_score",
];

/// Columns appended to the scored output, after the raw columns.
pub const SCORE_COLUMNS: [&str; 6] = ["APS", "WWS", "PTMS", "CRS", "SRI", "Risk_Category"];

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("input dataset could not be opened at {}", path.display())]
    InputNotFound { path: PathBuf, source: io::Error },

    #[error("input header could not be read")]
    Header { source: csv::Error },

    #[error("required column `{column}` is missing from the input header")]
    MissingColumn { column: &'static str },

    #[error("record at line {line} could not be parsed")]
    Row { line: u64, source: csv::Error },

    #[error("failed to write output to {}", path.display())]
    WriteFailure { path: PathBuf, source: csv::Error },
}

pub fn read_records(path: &Path) -> Result<Vec<StudentRecord>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    read_from_reader(file)
}

pub fn read_from_reader<R: Read>(reader: R) -> Result<Vec<StudentRecord>, DatasetError> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|source| DatasetError::Header { source })?;
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(DatasetError::MissingColumn { column });
        }
    }

    let mut records = Vec::new();
    for result in reader.deserialize::<StudentRecord>() {
        let record = result.map_err(|source| DatasetError::Row {
            line: source.position().map_or(0, |p| p.line()),
            source,
        })?;
        records.push(record);
    }

    Ok(records)
}

pub fn write_students(path: &Path, students: &[StudentRecord]) -> Result<(), DatasetError> {
    let file = File::create(path).map_err(|source| DatasetError::WriteFailure {
        path: path.to_path_buf(),
        source: source.into(),
    })?;
    write_students_to_writer(file, students).map_err(|source| DatasetError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_students_to_writer<W: Write>(
    writer: W,
    students: &[StudentRecord],
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(REQUIRED_COLUMNS)?;
    for student in students {
        writer.write_record(raw_fields(student))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_scored(path: &Path, scored: &[ScoredRecord]) -> Result<(), DatasetError> {
    let file = File::create(path).map_err(|source| DatasetError::WriteFailure {
        path: path.to_path_buf(),
        source: source.into(),
    })?;
    write_scored_to_writer(file, scored).map_err(|source| DatasetError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_scored_to_writer<W: Write>(
    writer: W,
    scored: &[ScoredRecord],
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);

    let header: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .chain(SCORE_COLUMNS.iter())
        .copied()
        .collect();
    writer.write_record(&header)?;

    for record in scored {
        let mut row: Vec<String> = raw_fields(&record.student).to_vec();
        row.push(format!("{:.1}", record.aps));
        row.push(format!("{:.1}", record.wws));
        row.push(format!("{:.1}", record.ptms));
        row.push(format!("{:.1}", record.crs));
        row.push(format!("{:.1}", record.sri));
        row.push(record.risk_category.to_string());
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

// Raw values pass through as parsed; only the appended scores get fixed
// one-decimal formatting.
fn raw_fields(student: &StudentRecord) -> [String; 15] {
    [
        student.student_id.clone(),
        student.age.to_string(),
        student.program.to_string(),
        student.semester.to_string(),
        student.gpa.to_string(),
        student.attendance.to_string(),
        student.assignments_completion.to_string(),
        student.stress_level.to_string(),
        student.sleep_hours.to_string(),
        student.mental_wellbeing.to_string(),
        student.productivity_score.to_string(),
        student.distractions.to_string(),
        student.career_clarity.to_string(),
        student.skill_readiness.to_string(),
        student.engagement_score.to_string(),
    ]
}
