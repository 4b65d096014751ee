use super::catalog::{AssessmentKind, AssessmentPhase, DimensionCatalog};
use super::gaps::{GapAnalysis, GapStatus, Recommendation, RecommendationTable};
use super::leads::{LeadClassification, LeadTier};
use super::scoring::{MaturityBand, ScoreResult};
use serde::Serialize;

/// Per-dimension line of the rendered report.
#[derive(Debug, Clone, Serialize)]
pub struct DimensionBreakdownEntry {
    pub dimension: &'static str,
    pub title: &'static str,
    pub phase: AssessmentPhase,
    pub phase_label: &'static str,
    pub score: u8,
    pub benchmark: f32,
    pub status: GapStatus,
    pub status_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_description: Option<&'static str>,
}

/// Gap line with the display title instead of the raw id.
#[derive(Debug, Clone, Serialize)]
pub struct GapHighlight {
    pub title: &'static str,
    pub score: u8,
}

/// Renderer-facing projection of a scored submission: titles and labels only,
/// gaps already capped and ordered.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReportSummary {
    pub assessment: AssessmentKind,
    pub assessment_label: &'static str,
    pub total_score: u16,
    pub max_score: u16,
    pub normalized_score: u8,
    pub band: MaturityBand,
    pub band_label: &'static str,
    pub weakest_title: &'static str,
    pub strongest_title: &'static str,
    pub is_partial: bool,
    pub dimension_breakdown: Vec<DimensionBreakdownEntry>,
    pub gaps: Vec<GapHighlight>,
    pub recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<LeadTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_reason: Option<String>,
}

/// Builds the report summary from computed values. Pure projection; nothing
/// here re-runs scoring math.
pub fn summarize(
    result: &ScoreResult,
    analysis: &GapAnalysis,
    catalog: &DimensionCatalog,
    recommendation_table: &RecommendationTable,
    classification: Option<&LeadClassification>,
) -> AssessmentReportSummary {
    let dimension_breakdown = analysis
        .breakdown
        .iter()
        .map(|standing| {
            let dimension = catalog.dimension(standing.dimension);
            let (phase, level_description) = match dimension {
                Some(dimension) => (dimension.phase, dimension.level_description(standing.score)),
                None => (AssessmentPhase::Align, None),
            };
            DimensionBreakdownEntry {
                dimension: standing.dimension,
                title: standing.title,
                phase,
                phase_label: phase.label(),
                score: standing.score,
                benchmark: standing.benchmark,
                status: standing.status,
                status_label: standing.status.label(),
                level_description,
            }
        })
        .collect();

    let gaps = analysis
        .gaps
        .iter()
        .map(|gap| GapHighlight {
            title: gap.title,
            score: gap.score,
        })
        .collect();

    AssessmentReportSummary {
        assessment: result.assessment,
        assessment_label: result.assessment.label(),
        total_score: result.total_score,
        max_score: result.max_score,
        normalized_score: result.normalized(),
        band: result.band,
        band_label: result.band.label(),
        weakest_title: title_for(catalog, analysis.weakest),
        strongest_title: title_for(catalog, analysis.strongest),
        is_partial: result.is_partial,
        dimension_breakdown,
        gaps,
        recommendations: recommendation_table.recommendations(analysis),
        tier: classification.map(|c| c.tier),
        tier_label: classification.map(|c| c.tier.label()),
        tier_reason: classification.map(|c| c.reason.clone()),
    }
}

fn title_for(catalog: &DimensionCatalog, id: &str) -> &'static str {
    catalog
        .dimension(id)
        .map(|dimension| dimension.title)
        .unwrap_or("")
}
