use super::super::answers::AnswerSet;
use super::super::catalog::DimensionCatalog;
use super::{LeadImportError, Submission};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct ParsedRow {
    pub(crate) line: u64,
    pub(crate) submission: Submission,
}

#[derive(Debug, Clone, Copy)]
enum Column {
    FirstName,
    LastName,
    Email,
    Organization,
    Role,
    CompanySize,
    SubmittedAt,
    Dimension(&'static str),
    Ignored,
}

/// Parses a responses export: firmographic columns plus one column per
/// dimension (headed by id or display title). Unrecognized columns are
/// ignored, matching how form exports accumulate extra fields.
pub(crate) fn parse_rows<R: Read>(
    reader: R,
    catalog: &DimensionCatalog,
) -> Result<Vec<ParsedRow>, LeadImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns: Vec<Column> = csv_reader
        .headers()?
        .iter()
        .map(|header| classify_header(header, catalog))
        .collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|pos| pos.line()).unwrap_or(0);

        let mut submission = Submission::default();
        let mut answers = AnswerSet::new();

        for (column, value) in columns.iter().zip(record.iter()) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match column {
                Column::FirstName => submission.first_name = value.to_string(),
                Column::LastName => submission.last_name = value.to_string(),
                Column::Email => submission.email = value.to_string(),
                Column::Organization => submission.organization = Some(value.to_string()),
                Column::Role => submission.role = Some(value.to_string()),
                Column::CompanySize => submission.company_size = Some(value.to_string()),
                Column::SubmittedAt => submission.submitted_at = parse_datetime(value),
                Column::Dimension(id) => {
                    // Non-integer and out-of-range answers report the same
                    // row-level diagnostics.
                    let invalid = || LeadImportError::InvalidAnswer {
                        line,
                        dimension: (*id).to_string(),
                        value: value.to_string(),
                    };
                    let score: u8 = value.parse().map_err(|_| invalid())?;
                    answers.set(*id, score).map_err(|_| invalid())?;
                }
                Column::Ignored => {}
            }
        }

        submission.answers = answers;
        rows.push(ParsedRow { line, submission });
    }

    Ok(rows)
}

fn classify_header(header: &str, catalog: &DimensionCatalog) -> Column {
    let normalized = normalize_header(header);
    match normalized.as_str() {
        "first name" | "firstname" => Column::FirstName,
        "last name" | "lastname" => Column::LastName,
        "email" | "email address" => Column::Email,
        "company" | "organization" | "organisation" => Column::Organization,
        "role" | "job title" | "title" => Column::Role,
        "company size" | "employees" => Column::CompanySize,
        "submitted at" | "submitted" | "timestamp" => Column::SubmittedAt,
        _ => catalog
            .dimensions()
            .iter()
            .find(|dimension| {
                dimension.id == normalized || dimension.title.to_ascii_lowercase() == normalized
            })
            .map(|dimension| Column::Dimension(dimension.id))
            .unwrap_or(Column::Ignored),
    }
}

fn normalize_header(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_lowercase()
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}

#[cfg(test)]
pub(crate) fn parse_datetime_for_tests(value: &str) -> Option<NaiveDateTime> {
    parse_datetime(value)
}

#[cfg(test)]
pub(crate) fn normalize_for_tests(value: &str) -> String {
    normalize_header(value)
}
