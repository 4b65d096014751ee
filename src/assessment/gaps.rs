use super::catalog::DimensionCatalog;
use super::scoring::ScoreResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Benchmark-delta bucket for one dimension. Boundary values belong to the
/// lower-severity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapStatus {
    OnTrack,
    MinorGap,
    NeedsAttention,
    CriticalGap,
}

impl GapStatus {
    pub const fn label(self) -> &'static str {
        match self {
            GapStatus::OnTrack => "On Track",
            GapStatus::MinorGap => "Minor Gap",
            GapStatus::NeedsAttention => "Needs Attention",
            GapStatus::CriticalGap => "Critical Gap",
        }
    }

    /// Buckets `benchmark - score`: <=0 on track, (0,1] minor, (1,2] needs
    /// attention, >2 critical.
    pub fn from_delta(delta: f32) -> Self {
        if delta <= 0.0 {
            GapStatus::OnTrack
        } else if delta <= 1.0 {
            GapStatus::MinorGap
        } else if delta <= 2.0 {
            GapStatus::NeedsAttention
        } else {
            GapStatus::CriticalGap
        }
    }
}

/// Tunable gap selection. Consumers wanting a different "top N blockers"
/// count (report vs. summary card) adjust `max_gaps`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapPolicy {
    /// Scores below this value count as gaps.
    pub sufficient_score: u8,
    /// Cap on the returned gap list.
    pub max_gaps: usize,
}

impl Default for GapPolicy {
    fn default() -> Self {
        Self {
            sufficient_score: 4,
            max_gaps: 3,
        }
    }
}

/// One dimension scoring below the sufficiency cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GapEntry {
    pub dimension: &'static str,
    pub title: &'static str,
    pub score: u8,
}

/// Per-dimension standing against its benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionStanding {
    pub dimension: &'static str,
    pub title: &'static str,
    pub score: u8,
    pub benchmark: f32,
    pub status: GapStatus,
}

/// Gap analysis over one score result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapAnalysis {
    pub weakest: &'static str,
    pub strongest: &'static str,
    /// Dimensions below the sufficiency cutoff, ascending by score then
    /// catalog order, truncated to the policy cap.
    pub gaps: Vec<GapEntry>,
    /// Uncapped count of dimensions below the sufficiency cutoff.
    pub gap_count: usize,
    pub breakdown: Vec<DimensionStanding>,
}

/// Computes weakest/strongest dimensions, the capped gap list, and the
/// benchmark breakdown. Ties resolve to the first occurrence in catalog
/// order; an all-equal score set is a valid outcome, not an error.
pub fn analyze(
    result: &ScoreResult,
    catalog: &DimensionCatalog,
    policy: &GapPolicy,
) -> GapAnalysis {
    let mut weakest: Option<(&'static str, u8)> = None;
    let mut strongest: Option<(&'static str, u8)> = None;

    for entry in &result.dimension_scores {
        match weakest {
            Some((_, score)) if entry.score >= score => {}
            _ => weakest = Some((entry.dimension, entry.score)),
        }
        match strongest {
            Some((_, score)) if entry.score <= score => {}
            _ => strongest = Some((entry.dimension, entry.score)),
        }
    }

    let mut gaps: Vec<GapEntry> = result
        .dimension_scores
        .iter()
        .filter(|entry| entry.score < policy.sufficient_score)
        .map(|entry| GapEntry {
            dimension: entry.dimension,
            title: title_for(catalog, entry.dimension),
            score: entry.score,
        })
        .collect();
    let gap_count = gaps.len();
    // Stable sort keeps catalog order among equal scores.
    gaps.sort_by_key(|gap| gap.score);
    gaps.truncate(policy.max_gaps);

    let breakdown = result
        .dimension_scores
        .iter()
        .map(|entry| {
            let benchmark = catalog
                .dimension(entry.dimension)
                .map(|dimension| dimension.benchmark)
                .unwrap_or(0.0);
            DimensionStanding {
                dimension: entry.dimension,
                title: title_for(catalog, entry.dimension),
                score: entry.score,
                benchmark,
                status: GapStatus::from_delta(benchmark - f32::from(entry.score)),
            }
        })
        .collect();

    GapAnalysis {
        weakest: weakest.map(|(id, _)| id).unwrap_or(""),
        strongest: strongest.map(|(id, _)| id).unwrap_or(""),
        gaps,
        gap_count,
        breakdown,
    }
}

fn title_for(catalog: &DimensionCatalog, id: &str) -> &'static str {
    catalog
        .dimension(id)
        .map(|dimension| dimension.title)
        .unwrap_or("")
}

/// Recommended action tied to a gap dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub details: &'static str,
}

/// Dimension-to-action lookup, passed explicitly alongside the catalog and
/// gap policy so alternate content sets swap in without code changes.
#[derive(Debug, Clone)]
pub struct RecommendationTable {
    entries: HashMap<&'static str, Recommendation>,
    /// Offered when a gap dimension has no cataloged recommendation.
    generic: Recommendation,
    /// Offered when no dimension qualifies as a gap.
    no_gap: Recommendation,
}

impl RecommendationTable {
    pub fn new(
        entries: impl IntoIterator<Item = (&'static str, Recommendation)>,
        generic: Recommendation,
        no_gap: Recommendation,
    ) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            generic,
            no_gap,
        }
    }

    /// Looks up the recommendation for a gap dimension. Never fails: ids
    /// missing from the table get the generic fallback.
    pub fn recommendation_for(&self, dimension: &str) -> Recommendation {
        self.entries
            .get(dimension)
            .copied()
            .unwrap_or(self.generic)
    }

    /// Recommendation list for a gap analysis, in gap order. An empty gap
    /// list yields the designated fallback rather than an empty list.
    pub fn recommendations(&self, analysis: &GapAnalysis) -> Vec<Recommendation> {
        if analysis.gaps.is_empty() {
            return vec![self.no_gap];
        }
        analysis
            .gaps
            .iter()
            .map(|gap| self.recommendation_for(gap.dimension))
            .collect()
    }
}

impl Default for RecommendationTable {
    fn default() -> Self {
        const ENTRIES: &[(&str, Recommendation)] = &[
            ("strategic", Recommendation {
                title: "AI Strategy Workshop",
                details: "Facilitated working session producing a funded, outcome-linked AI roadmap for the next two quarters.",
            }),
            ("executive", Recommendation {
                title: "Executive AI Briefing",
                details: "Half-day leadership briefing that assigns AI ownership, budget, and a reporting cadence.",
            }),
            ("oversight", Recommendation {
                title: "Human-in-the-Loop Design",
                details: "Define review checkpoints and escalation paths so AI output never reaches customers unreviewed.",
            }),
            ("data", Recommendation {
                title: "Data Foundation Audit",
                details: "Inventory, quality-score, and prioritize the datasets your first AI use cases depend on.",
            }),
            ("security", Recommendation {
                title: "AI Security Review",
                details: "Classify the data entering AI tools and put enforceable controls around sensitive flows.",
            }),
            ("risk", Recommendation {
                title: "AI Risk Register Setup",
                details: "Stand up a living risk register with named owners, mitigations, and review dates.",
            }),
            ("governance", Recommendation {
                title: "AI Governance Charter",
                details: "Publish an acceptable-use policy and a cross-functional review body with real gating authority.",
            }),
            ("integration", Recommendation {
                title: "Workflow Integration Sprint",
                details: "Embed AI into one core workflow end to end instead of copy-pasting between tools.",
            }),
            ("workforce", Recommendation {
                title: "Role-Based AI Enablement",
                details: "Launch role-specific training paths with adoption tracking, starting with the highest-leverage teams.",
            }),
            ("improvement", Recommendation {
                title: "AI Measurement Framework",
                details: "Baseline every initiative and retire or scale on evidence rather than anecdote.",
            }),
            ("clarity", Recommendation {
                title: "Career Direction Session",
                details: "Turn competing options into one committed target role with a milestone plan.",
            }),
            ("skills", Recommendation {
                title: "Skill Gap Plan",
                details: "Map the target role's requirements against current skills and sequence the learning plan.",
            }),
            ("experience", Recommendation {
                title: "Portfolio Sprint",
                details: "Package existing work into outcome-led case studies a hiring manager can skim.",
            }),
            ("network", Recommendation {
                title: "Network Activation Plan",
                details: "Re-engage dormant contacts with a weekly, reciprocal outreach cadence.",
            }),
            ("visibility", Recommendation {
                title: "Visibility System",
                details: "Establish a sustainable publishing rhythm that makes your expertise findable.",
            }),
            ("resilience", Recommendation {
                title: "Transition Runway Review",
                details: "Size the financial and personal buffer the move needs and plan the contingencies.",
            }),
        ];

        Self::new(
            ENTRIES.iter().copied(),
            Recommendation {
                title: "AI Strategy Session",
                details: "Personalized guidance.",
            },
            Recommendation {
                title: "Scale Your Success",
                details: "Every dimension meets the sufficiency bar. Pick one high-leverage \
                          workflow and push it from established to optimized with an advanced \
                          adoption sprint.",
            },
        )
    }
}
