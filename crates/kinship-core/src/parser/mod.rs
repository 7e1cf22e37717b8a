//! Record dispatcher
//!
//! Walks level-0 lines, creates a [`Person`] or [`Family`] for every `INDI` or
//! `FAM` marker and hands the cursor to the matching sub-parser. A malformed
//! record is kept with whatever was read before the fault; the rest of it is
//! skipped and noted in [`ParseOutcome::issues`].

mod family;
mod individual;

use crate::error::{Error, Result};
use crate::family::Family;
use crate::limits::validate_record_id;
use crate::person::Person;
use crate::reader::{Line, LineCursor};
use crate::registry::Registry;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const INDIVIDUAL_MARKER: &str = "INDI";
const FAMILY_MARKER: &str = "FAM";

/// Column where a `@ID@` pointer starts on a nested line (`1 FAMS @F1@`)
const POINTER_COLUMN: usize = 8;

/// Counters collected while parsing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    pub lines_read: usize,
    pub persons: usize,
    pub families: usize,
    pub skipped_records: usize,
}

/// A record whose remaining content was skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordIssue {
    pub line: usize,
    pub record_id: String,
    pub message: String,
}

impl std::fmt::Display for RecordIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "record {} (line {}): {}", self.record_id, self.line, self.message)
    }
}

/// Result of one parse run
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub registry: Registry,
    pub stats: ParseStats,
    pub issues: Vec<RecordIssue>,
}

impl ParseOutcome {
    pub fn into_registry(self) -> Registry {
        self.registry
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordKind {
    Individual,
    Family,
}

/// Parse a GEDCOM file from disk
pub fn parse_file(path: impl AsRef<Path>) -> Result<ParseOutcome> {
    let path = path.as_ref();
    tracing::debug!("Parsing {:?}", path);
    let file = File::open(path)?;
    parse_reader(BufReader::new(file))
}

/// Parse GEDCOM text held in memory
pub fn parse_str(input: &str) -> Result<ParseOutcome> {
    parse_reader(input.as_bytes())
}

/// Parse GEDCOM lines from any buffered reader
pub fn parse_reader<R: BufRead>(input: R) -> Result<ParseOutcome> {
    let mut cursor = LineCursor::new(input)?;
    let mut outcome = ParseOutcome::default();

    while let Some(line) = cursor.current() {
        let Some((kind, id)) = classify(line) else {
            cursor.advance()?;
            continue;
        };

        if let Err(e) = validate_record_id(&id) {
            let line = line.number;
            skip_record(&mut cursor, &mut outcome, line, &id, Error::from(e))?;
            continue;
        }

        tracing::debug!("Dispatching {:?} record {}", kind, id);
        match kind {
            RecordKind::Individual => {
                let mut person = Person::new(&id);
                let result = individual::parse_individual(&mut cursor, &mut person);
                recover(&mut cursor, &mut outcome, &id, result)?;
                if outcome.registry.insert_person(person).is_some() {
                    tracing::warn!("Duplicate person record {} replaces earlier one", id);
                }
            }
            RecordKind::Family => {
                let mut family = Family::new(&id);
                let result = family::parse_family(&mut cursor, &mut family);
                recover(&mut cursor, &mut outcome, &id, result)?;
                if outcome.registry.insert_family(family).is_some() {
                    tracing::warn!("Duplicate family record {} replaces earlier one", id);
                }
            }
        }
    }

    outcome.stats.lines_read = cursor.lines_read();
    outcome.stats.persons = outcome.registry.person_count();
    outcome.stats.families = outcome.registry.family_count();

    tracing::debug!(
        "Parsed {} persons and {} families from {} lines ({} records skipped)",
        outcome.stats.persons,
        outcome.stats.families,
        outcome.stats.lines_read,
        outcome.stats.skipped_records
    );

    Ok(outcome)
}

/// Recognize `0 @ID@ INDI` / `0 @ID@ FAM` lines
fn classify(line: &Line) -> Option<(RecordKind, String)> {
    if !line.is_record_start() {
        return None;
    }
    let mut fields = line.fields().skip(1);
    let id = fields.next()?;
    let kind = match fields.next()? {
        INDIVIDUAL_MARKER => RecordKind::Individual,
        FAMILY_MARKER => RecordKind::Family,
        _ => return None,
    };
    Some((kind, id.trim_matches('@').to_string()))
}

/// Turn a structural error from a sub-parser into a record issue
fn recover<R: BufRead>(
    cursor: &mut LineCursor<R>,
    outcome: &mut ParseOutcome,
    record_id: &str,
    result: Result<()>,
) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.is_structural() => {
            let line = match &e {
                Error::MalformedLine { line, .. } => *line,
                _ => cursor.current().map_or(0, |l| l.number),
            };
            skip_record(cursor, outcome, line, record_id, e)
        }
        Err(e) => Err(e),
    }
}

fn skip_record<R: BufRead>(
    cursor: &mut LineCursor<R>,
    outcome: &mut ParseOutcome,
    line: usize,
    record_id: &str,
    error: Error,
) -> Result<()> {
    tracing::warn!("Skipping rest of record {}: {}", record_id, error);
    outcome.stats.skipped_records += 1;
    outcome.issues.push(RecordIssue {
        line,
        record_id: record_id.to_string(),
        message: error.to_string(),
    });
    if cursor.current().map_or(false, Line::is_record_start) {
        cursor.advance()?;
    }
    cursor.skip_to_next_record()
}

/// Record id referenced by a nested line, e.g. `F1` in `1 FAMS @F1@`
pub(crate) fn pointer(line: &Line) -> Result<String> {
    let rest = line
        .from_column(POINTER_COLUMN)
        .ok_or_else(|| Error::malformed(line.number, "pointer outside line"))?;
    let id = rest.split('@').next().unwrap_or_default().trim();
    if id.is_empty() {
        return Err(Error::malformed(line.number, "empty pointer"));
    }
    Ok(id.to_string())
}
