use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::records::{Difficulty, ProblemRecord};

pub const COLUMNS: [&str; 6] = ["date", "problem_id", "problem_title", "difficulty", "last_result", "url"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub format: ReportFormat,
    /// Emit the `last_result` column.
    pub last_result: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: ReportFormat::Csv,
            last_result: true,
        }
    }
}

pub fn columns(last_result: bool) -> Vec<&'static str> {
    COLUMNS
        .into_iter()
        .filter(|c| last_result || *c != "last_result")
        .collect()
}

fn cells(record: &ProblemRecord, last_result: bool) -> Vec<&str> {
    let mut row = vec![
        record.date.as_str(),
        record.problem_id.as_str(),
        record.problem_title.as_str(),
        record.difficulty.as_str(),
    ];
    if last_result {
        row.push(record.last_result.as_deref().unwrap_or(""));
    }
    row.push(record.url.as_str());
    row
}

pub fn write_csv<W: Write>(writer: W, records: &[ProblemRecord], last_result: bool) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(columns(last_result))?;
    for record in records {
        wtr.write_record(cells(record, last_result))?;
    }
    wtr.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonRow<'a> {
    date: &'a str,
    problem_id: &'a str,
    problem_title: &'a str,
    difficulty: &'a Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_result: Option<&'a str>,
    url: &'a str,
}

pub fn write_json<W: Write>(mut writer: W, records: &[ProblemRecord], last_result: bool) -> Result<()> {
    let rows: Vec<JsonRow<'_>> = records
        .iter()
        .map(|r| JsonRow {
            date: &r.date,
            problem_id: &r.problem_id,
            problem_title: &r.problem_title,
            difficulty: &r.difficulty,
            last_result: r.last_result.as_deref().filter(|_| last_result),
            url: &r.url,
        })
        .collect();
    serde_json::to_writer_pretty(&mut writer, &rows)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write the report to `path`, creating parent directories as needed.
pub fn write_report(path: &Path, records: &[ProblemRecord], options: ReportOptions) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let out = BufWriter::new(file);

    let written = match options.format {
        ReportFormat::Csv => write_csv(out, records, options.last_result),
        ReportFormat::Json => write_json(out, records, options.last_result),
    };
    written.with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

// ── Tests ──
