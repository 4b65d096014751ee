//! Assessment scoring and lead-qualification core.
//!
//! Four pure stages run in order: the dimension catalog supplies the fixed
//! reference data, the aggregator turns raw answers into a total score and
//! maturity band, the gap analyzer ranks weaknesses against benchmarks, and
//! the lead classifier folds in firmographic signals. All stages are
//! deterministic, synchronous, and free of shared mutable state.

pub mod answers;
pub mod catalog;
pub mod gaps;
pub mod intake;
pub mod leads;
pub mod report;
pub mod scoring;

pub use answers::AnswerSet;
pub use catalog::{AssessmentKind, AssessmentPhase, CatalogError, Dimension, DimensionCatalog};
pub use gaps::{
    analyze, GapAnalysis, GapEntry, GapPolicy, GapStatus, Recommendation, RecommendationTable,
};
pub use intake::{
    process_submission, AssessmentContext, LeadCsvImporter, LeadImportError, ProcessedLead,
    Submission,
};
pub use leads::{
    classify, ClassificationError, CompanySize, LeadClassification, LeadContext, LeadTier,
    RoleSeniority,
};
pub use report::{summarize, AssessmentReportSummary};
pub use scoring::{
    aggregate, AggregationError, BandCutoffs, DimensionScore, MaturityBand, ScoreResult,
    ScoringMode,
};

/// Umbrella error for the full pipeline; callers that only run one stage can
/// match the specific variant.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Aggregation(#[from] AggregationError),
    #[error(transparent)]
    Classification(#[from] ClassificationError),
}
