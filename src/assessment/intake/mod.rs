mod parser;

use super::answers::AnswerSet;
use super::catalog::{AssessmentKind, DimensionCatalog};
use super::gaps::{analyze, GapAnalysis, GapPolicy, Recommendation, RecommendationTable};
use super::leads::{classify, CompanySize, LeadClassification, LeadContext, RoleSeniority};
use super::report::{summarize, AssessmentReportSummary};
use super::scoring::{aggregate, BandCutoffs, ScoreResult, ScoringMode};
use super::AssessmentError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// One respondent's completed (or abandoned) questionnaire plus the
/// firmographic fields the intake form collects. The raw answers are the
/// durable record; everything scored from them is recomputed on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub organization: Option<String>,
    pub role: Option<String>,
    pub company_size: Option<String>,
    pub submitted_at: Option<NaiveDateTime>,
    pub answers: AnswerSet,
}

impl Submission {
    fn lead_context(&self, is_partial: bool) -> LeadContext {
        LeadContext {
            company_size: self
                .company_size
                .as_deref()
                .and_then(CompanySize::parse),
            role: self.role.as_deref().and_then(RoleSeniority::parse),
            is_partial,
        }
    }
}

/// Immutable scoring configuration assembled once at startup and passed
/// explicitly into the computation functions.
#[derive(Debug, Clone)]
pub struct AssessmentContext {
    pub catalog: DimensionCatalog,
    pub cutoffs: BandCutoffs,
    pub gap_policy: GapPolicy,
    pub recommendations: RecommendationTable,
}

impl AssessmentContext {
    pub fn new(kind: AssessmentKind) -> Self {
        Self {
            catalog: DimensionCatalog::for_kind(kind),
            cutoffs: BandCutoffs::default(),
            gap_policy: GapPolicy::default(),
            recommendations: RecommendationTable::default(),
        }
    }
}

/// A submission run through the full score -> gaps -> classify pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedLead {
    pub submission: Submission,
    pub score: ScoreResult,
    pub gaps: GapAnalysis,
    pub classification: LeadClassification,
    pub recommendations: Vec<Recommendation>,
}

impl ProcessedLead {
    pub fn summary(&self, context: &AssessmentContext) -> AssessmentReportSummary {
        summarize(
            &self.score,
            &self.gaps,
            &context.catalog,
            &context.recommendations,
            Some(&self.classification),
        )
    }
}

/// Runs one submission through aggregation, gap analysis, and lead
/// classification. `Final` mode rejects incomplete answer sets; `Preview`
/// scores them partial, which the classifier's hot-guard then respects.
pub fn process_submission(
    submission: Submission,
    context: &AssessmentContext,
    mode: ScoringMode,
) -> Result<ProcessedLead, AssessmentError> {
    let score = aggregate(&submission.answers, &context.catalog, &context.cutoffs, mode)?;
    let gaps = analyze(&score, &context.catalog, &context.gap_policy);
    let lead_context = submission.lead_context(score.is_partial);
    let classification = classify(&score, &gaps, &lead_context)?;
    let recommendations = context.recommendations.recommendations(&gaps);

    Ok(ProcessedLead {
        submission,
        score,
        gaps,
        classification,
        recommendations,
    })
}

/// Failures while importing a responses CSV export.
#[derive(Debug, thiserror::Error)]
pub enum LeadImportError {
    #[error("failed to read responses export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid responses CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {line}: answer for '{dimension}' must be an integer between 1 and 5, got '{value}'")]
    InvalidAnswer {
        line: u64,
        dimension: String,
        value: String,
    },
    #[error("could not score imported submission: {0}")]
    Assessment(#[from] AssessmentError),
}

/// Batch importer for responses CSV exports. Rows without an email cannot
/// become leads and are skipped; rows with unanswered dimensions score in
/// preview mode and carry the partial flag into classification.
pub struct LeadCsvImporter;

impl LeadCsvImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        context: &AssessmentContext,
    ) -> Result<Vec<ProcessedLead>, LeadImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, context)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        context: &AssessmentContext,
    ) -> Result<Vec<ProcessedLead>, LeadImportError> {
        let mut leads = Vec::new();

        for row in parser::parse_rows(reader, &context.catalog)? {
            if row.submission.email.is_empty() {
                warn!(line = row.line, "skipping row without an email address");
                continue;
            }

            let mode = if row.submission.answers.is_complete_for(&context.catalog) {
                ScoringMode::Final
            } else {
                ScoringMode::Preview
            };

            leads.push(process_submission(row.submission, context, mode)?);
        }

        Ok(leads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::leads::LeadTier;
    use crate::assessment::scoring::MaturityBand;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn context() -> AssessmentContext {
        AssessmentContext::new(AssessmentKind::AiReadiness)
    }

    fn complete_submission(score: u8) -> Submission {
        let context = context();
        Submission {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            organization: Some("Analytical Engines".to_string()),
            role: Some("CTO".to_string()),
            company_size: Some("51-200".to_string()),
            submitted_at: None,
            answers: AnswerSet::from_pairs(context.catalog.ids().map(|id| (id, score)))
                .expect("valid answers"),
        }
    }

    #[test]
    fn process_submission_runs_the_full_pipeline() {
        let context = context();
        let lead = process_submission(complete_submission(4), &context, ScoringMode::Final)
            .expect("processes");

        assert_eq!(lead.score.total_score, 40);
        assert_eq!(lead.score.band, MaturityBand::Advanced);
        assert_eq!(lead.classification.tier, LeadTier::Hot);
        assert!(lead.gaps.gaps.is_empty());
        assert_eq!(lead.recommendations[0].title, "Scale Your Success");
    }

    #[test]
    fn submission_deserialization_rejects_out_of_range_answers() {
        let json = r#"{
            "first_name": "Eve",
            "last_name": "Adams",
            "email": "eve@example.com",
            "organization": null,
            "role": null,
            "company_size": null,
            "submitted_at": null,
            "answers": {"scores": {"strategic": 9}}
        }"#;

        let err = serde_json::from_str::<Submission>(json)
            .expect_err("out-of-range answers must not deserialize");
        assert!(err.to_string().contains("between 1 and 5"), "{err}");
    }

    #[test]
    fn final_mode_rejects_incomplete_submissions() {
        let context = context();
        let mut submission = complete_submission(4);
        submission.answers = AnswerSet::from_pairs([("strategic", 4)]).expect("valid");

        match process_submission(submission, &context, ScoringMode::Final) {
            Err(AssessmentError::Aggregation(_)) => {}
            other => panic!("expected aggregation error, got {other:?}"),
        }
    }

    #[test]
    fn parse_datetime_supports_rfc3339_and_date_strings() {
        let rfc = parser::parse_datetime_for_tests("2026-03-02T10:00:00Z").expect("parse rfc");
        assert_eq!(
            rfc,
            NaiveDate::from_ymd_opt(2026, 3, 2)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        );

        let date = parser::parse_datetime_for_tests("2026-03-02").expect("parse date");
        assert_eq!(
            date,
            NaiveDate::from_ymd_opt(2026, 3, 2)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );

        assert!(parser::parse_datetime_for_tests("  ").is_none());
        assert!(parser::parse_datetime_for_tests("not-a-date").is_none());
    }

    #[test]
    fn normalize_header_removes_byte_order_marks_and_case() {
        let normalized = parser::normalize_for_tests("\u{feff}First   Name");
        assert_eq!(normalized, "first name");
    }

    #[test]
    fn importer_scores_complete_rows_final() {
        let csv = "First Name,Last Name,Email,Company,Role,Company Size,strategic,executive,oversight,data,security,risk,governance,integration,workforce,improvement\n\
Grace,Hopper,grace@example.com,Navy Labs,Director of Engineering,201-1000,5,4,5,4,5,4,5,4,5,4\n";

        let context = context();
        let leads =
            LeadCsvImporter::from_reader(Cursor::new(csv), &context).expect("import succeeds");

        assert_eq!(leads.len(), 1);
        let lead = &leads[0];
        assert!(!lead.score.is_partial);
        assert_eq!(lead.score.total_score, 45);
        assert_eq!(lead.classification.tier, LeadTier::Hot);
        assert_eq!(lead.submission.organization.as_deref(), Some("Navy Labs"));
    }

    #[test]
    fn importer_flags_rows_with_missing_answers_partial() {
        let csv = "First Name,Last Name,Email,strategic,executive,oversight,data\n\
Alan,Turing,alan@example.com,5,5,5,5\n";

        let context = context();
        let leads =
            LeadCsvImporter::from_reader(Cursor::new(csv), &context).expect("import succeeds");

        assert_eq!(leads.len(), 1);
        assert!(leads[0].score.is_partial);
        // Partial submissions never classify hot, whatever the raw answers.
        assert_ne!(leads[0].classification.tier, LeadTier::Hot);
    }

    #[test]
    fn importer_skips_rows_without_email() {
        let csv = "First Name,Last Name,Email,strategic\n\
NoEmail,Person,,3\n\
Has,Email,has@example.com,3\n";

        let context = context();
        let leads =
            LeadCsvImporter::from_reader(Cursor::new(csv), &context).expect("import succeeds");

        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].submission.email, "has@example.com");
    }

    #[test]
    fn importer_accepts_title_headers_and_ignores_unknown_columns() {
        let csv = "First Name,Email,Strategic Vision,Data Foundation,UTM Source\n\
Joan,joan@example.com,4,2,newsletter\n";

        let context = context();
        let leads =
            LeadCsvImporter::from_reader(Cursor::new(csv), &context).expect("import succeeds");

        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].submission.answers.get("strategic"), Some(4));
        assert_eq!(leads[0].submission.answers.get("data"), Some(2));
    }

    #[test]
    fn importer_rejects_non_integer_answers() {
        let csv = "Email,strategic\ntest@example.com,often\n";

        let context = context();
        match LeadCsvImporter::from_reader(Cursor::new(csv), &context) {
            Err(LeadImportError::InvalidAnswer { dimension, value, .. }) => {
                assert_eq!(dimension, "strategic");
                assert_eq!(value, "often");
            }
            other => panic!("expected invalid answer error, got {other:?}"),
        }
    }

    #[test]
    fn importer_from_path_propagates_io_errors() {
        let context = context();
        match LeadCsvImporter::from_path("./does-not-exist.csv", &context) {
            Err(LeadImportError::Io(_)) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
