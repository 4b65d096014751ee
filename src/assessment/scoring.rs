use super::answers::AnswerSet;
use super::catalog::{AssessmentKind, DimensionCatalog};
use serde::{Deserialize, Serialize};

/// Coarse maturity tier derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturityBand {
    Early,
    Developing,
    Advanced,
}

impl MaturityBand {
    pub const fn label(self) -> &'static str {
        match self {
            MaturityBand::Early => "Early",
            MaturityBand::Developing => "Developing",
            MaturityBand::Advanced => "Advanced",
        }
    }

    /// Ordering used by the lead classifier: early < developing < advanced.
    pub const fn rank(self) -> u8 {
        match self {
            MaturityBand::Early => 0,
            MaturityBand::Developing => 1,
            MaturityBand::Advanced => 2,
        }
    }
}

/// Band boundaries expressed as fractions of the maximum possible score, so
/// the same cutoffs serve catalogs with any dimension count. On the
/// 10-dimension/50-point scale the defaults give early <= 24, developing
/// 25..=39, advanced >= 40.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandCutoffs {
    pub early_max_fraction: f32,
    pub developing_max_fraction: f32,
}

impl Default for BandCutoffs {
    fn default() -> Self {
        Self {
            early_max_fraction: 0.48,
            developing_max_fraction: 0.78,
        }
    }
}

impl BandCutoffs {
    pub fn band_for(&self, total_score: u16, max_score: u16) -> MaturityBand {
        let early_max = (self.early_max_fraction * f32::from(max_score)).floor() as u16;
        let developing_max = (self.developing_max_fraction * f32::from(max_score)).floor() as u16;

        if total_score <= early_max {
            MaturityBand::Early
        } else if total_score <= developing_max {
            MaturityBand::Developing
        } else {
            MaturityBand::Advanced
        }
    }
}

/// Whether missing answers abort aggregation or score as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringMode {
    /// In-progress session: missing dimensions contribute zero and the
    /// result is flagged partial.
    Preview,
    /// Completed submission: every dimension must be answered.
    Final,
}

/// Errors raised while turning raw answers into a score.
#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    #[error("answer for dimension '{dimension}' must be an integer between 1 and 5, got {value}")]
    AnswerOutOfRange { dimension: String, value: u8 },
    #[error("dimension '{dimension}' is not part of the {assessment} catalog")]
    UnknownDimension {
        dimension: String,
        assessment: &'static str,
    },
    #[error("final aggregation requires every dimension answered; missing: {}", missing.join(", "))]
    IncompleteAnswers { missing: Vec<String> },
}

/// Per-dimension score in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionScore {
    pub dimension: &'static str,
    pub score: u8,
}

/// Derived scoring outcome. Recomputed on demand from raw answers; never the
/// durable record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub assessment: AssessmentKind,
    pub total_score: u16,
    pub max_score: u16,
    pub band: MaturityBand,
    pub dimension_scores: Vec<DimensionScore>,
    pub is_partial: bool,
}

impl ScoreResult {
    /// 0-100 view of the total score. Derived from the canonical raw sum so
    /// the two representations can never disagree.
    pub fn normalized(&self) -> u8 {
        if self.max_score == 0 {
            return 0;
        }
        ((f32::from(self.total_score) / f32::from(self.max_score)) * 100.0).round() as u8
    }
}

/// Sums per-dimension answers into a total score and maturity band.
///
/// Deterministic and side-effect free: identical inputs always produce an
/// identical `ScoreResult`.
pub fn aggregate(
    answers: &AnswerSet,
    catalog: &DimensionCatalog,
    cutoffs: &BandCutoffs,
    mode: ScoringMode,
) -> Result<ScoreResult, AggregationError> {
    answers.validate_against(catalog)?;

    let missing = answers.missing_from(catalog);
    if mode == ScoringMode::Final && !missing.is_empty() {
        return Err(AggregationError::IncompleteAnswers { missing });
    }

    let dimension_scores: Vec<DimensionScore> = catalog
        .dimensions()
        .iter()
        .map(|dimension| DimensionScore {
            dimension: dimension.id,
            score: answers.get(dimension.id).unwrap_or(0),
        })
        .collect();

    let total_score: u16 = dimension_scores
        .iter()
        .map(|entry| u16::from(entry.score))
        .sum();
    let max_score = catalog.max_score();

    Ok(ScoreResult {
        assessment: catalog.kind(),
        total_score,
        max_score,
        band: cutoffs.band_for(total_score, max_score),
        dimension_scores,
        is_partial: !missing.is_empty(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> DimensionCatalog {
        DimensionCatalog::for_kind(AssessmentKind::AiReadiness)
    }

    fn uniform_answers(catalog: &DimensionCatalog, score: u8) -> AnswerSet {
        AnswerSet::from_pairs(catalog.ids().map(|id| (id, score))).expect("valid answers")
    }

    #[test]
    fn total_is_the_sum_of_answers() {
        let catalog = catalog();
        let answers = uniform_answers(&catalog, 3);

        let result = aggregate(&answers, &catalog, &BandCutoffs::default(), ScoringMode::Final)
            .expect("complete answers aggregate");

        assert_eq!(result.total_score, 30);
        assert_eq!(result.max_score, 50);
        assert!(!result.is_partial);
        assert_eq!(result.dimension_scores.len(), 10);
        assert_eq!(result.dimension_scores[0].dimension, "strategic");
    }

    #[test]
    fn band_boundaries_on_the_fifty_point_scale() {
        let cutoffs = BandCutoffs::default();
        assert_eq!(cutoffs.band_for(10, 50), MaturityBand::Early);
        assert_eq!(cutoffs.band_for(24, 50), MaturityBand::Early);
        assert_eq!(cutoffs.band_for(25, 50), MaturityBand::Developing);
        assert_eq!(cutoffs.band_for(39, 50), MaturityBand::Developing);
        assert_eq!(cutoffs.band_for(40, 50), MaturityBand::Advanced);
        assert_eq!(cutoffs.band_for(50, 50), MaturityBand::Advanced);
    }

    #[test]
    fn band_cutoffs_scale_with_dimension_count() {
        // Six-dimension career catalog: max 30, early <= 14, developing <= 23.
        let cutoffs = BandCutoffs::default();
        assert_eq!(cutoffs.band_for(14, 30), MaturityBand::Early);
        assert_eq!(cutoffs.band_for(15, 30), MaturityBand::Developing);
        assert_eq!(cutoffs.band_for(23, 30), MaturityBand::Developing);
        assert_eq!(cutoffs.band_for(24, 30), MaturityBand::Advanced);
    }

    #[test]
    fn final_mode_names_every_missing_dimension() {
        let catalog = catalog();
        let answers = AnswerSet::from_pairs([("strategic", 4), ("data", 5)]).expect("valid");

        match aggregate(&answers, &catalog, &BandCutoffs::default(), ScoringMode::Final) {
            Err(AggregationError::IncompleteAnswers { missing }) => {
                assert_eq!(missing.len(), 8);
                assert!(missing.contains(&"executive".to_string()));
                assert!(missing.contains(&"improvement".to_string()));
                assert!(!missing.contains(&"strategic".to_string()));
            }
            other => panic!("expected incomplete answers error, got {other:?}"),
        }
    }

    #[test]
    fn preview_mode_scores_missing_dimensions_as_zero() {
        let catalog = catalog();
        let answers = AnswerSet::from_pairs([("strategic", 4), ("data", 5)]).expect("valid");

        let result =
            aggregate(&answers, &catalog, &BandCutoffs::default(), ScoringMode::Preview)
                .expect("preview aggregates partial answers");

        assert!(result.is_partial);
        assert_eq!(result.total_score, 9);
        let executive = result
            .dimension_scores
            .iter()
            .find(|entry| entry.dimension == "executive")
            .expect("executive present");
        assert_eq!(executive.score, 0);
    }

    #[test]
    fn aggregate_rejects_foreign_dimensions() {
        let catalog = catalog();
        let mut answers = uniform_answers(&catalog, 3);
        answers.set("clarity", 4).expect("valid score");

        match aggregate(&answers, &catalog, &BandCutoffs::default(), ScoringMode::Final) {
            Err(AggregationError::UnknownDimension { dimension, .. }) => {
                assert_eq!(dimension, "clarity");
            }
            other => panic!("expected unknown dimension error, got {other:?}"),
        }
    }

    #[test]
    fn normalized_score_derives_from_the_raw_sum() {
        let catalog = catalog();
        let answers = uniform_answers(&catalog, 2);
        let result = aggregate(&answers, &catalog, &BandCutoffs::default(), ScoringMode::Final)
            .expect("aggregates");
        assert_eq!(result.total_score, 20);
        assert_eq!(result.normalized(), 40);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let catalog = catalog();
        let answers =
            AnswerSet::from_pairs(catalog.ids().zip([3u8, 3, 5, 1, 1, 4, 4, 4, 4, 4]))
                .expect("valid answers");

        let first = aggregate(&answers, &catalog, &BandCutoffs::default(), ScoringMode::Final)
            .expect("aggregates");
        let second = aggregate(&answers, &catalog, &BandCutoffs::default(), ScoringMode::Final)
            .expect("aggregates");
        assert_eq!(first, second);
    }
}
