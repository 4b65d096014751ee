use super::gaps::{GapAnalysis, GapStatus};
use super::scoring::{MaturityBand, ScoreResult};
use serde::{Deserialize, Serialize};

/// Headcount bucket parsed from the intake form's free-text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    Micro,
    Small,
    Medium,
    Large,
    Enterprise,
}

impl CompanySize {
    pub const fn label(self) -> &'static str {
        match self {
            CompanySize::Micro => "1-10",
            CompanySize::Small => "11-50",
            CompanySize::Medium => "51-200",
            CompanySize::Large => "201-1000",
            CompanySize::Enterprise => "1000+",
        }
    }

    /// Lenient parse of the bucket strings the web form offers. Unknown
    /// values are simply absent signals, never errors.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized: String = value
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        match normalized.as_str() {
            "1-10" | "solo" | "self-employed" => Some(Self::Micro),
            "11-50" => Some(Self::Small),
            "51-200" => Some(Self::Medium),
            "201-500" | "501-1000" | "201-1000" => Some(Self::Large),
            "1000+" | "1001+" | "enterprise" => Some(Self::Enterprise),
            _ => None,
        }
    }
}

/// Seniority inferred from a self-reported role title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleSeniority {
    Contributor,
    Manager,
    Director,
    Executive,
}

impl RoleSeniority {
    pub const fn label(self) -> &'static str {
        match self {
            RoleSeniority::Contributor => "Individual Contributor",
            RoleSeniority::Manager => "Manager",
            RoleSeniority::Director => "Director",
            RoleSeniority::Executive => "Executive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let title = value.trim().to_ascii_lowercase();
        if title.is_empty() {
            return None;
        }
        const EXECUTIVE_MARKERS: &[&str] = &[
            "ceo", "cto", "cfo", "coo", "cio", "chief", "founder", "owner", "president",
            "partner",
        ];
        const DIRECTOR_MARKERS: &[&str] = &["vp", "vice president", "director", "head of"];
        // "vice president" would otherwise match the "president" marker.
        if DIRECTOR_MARKERS.iter().any(|marker| title.contains(marker)) {
            return Some(Self::Director);
        }
        if EXECUTIVE_MARKERS.iter().any(|marker| title.contains(marker)) {
            return Some(Self::Executive);
        }
        if title.contains("manager") || title.contains("lead") {
            return Some(Self::Manager);
        }
        Some(Self::Contributor)
    }

    const fn is_senior(self) -> bool {
        matches!(self, RoleSeniority::Director | RoleSeniority::Executive)
    }
}

/// Firmographic and engagement signals accompanying a score result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadContext {
    pub company_size: Option<CompanySize>,
    pub role: Option<RoleSeniority>,
    /// Abandoned sessions must never classify hot, whatever the numbers say.
    pub is_partial: bool,
}

/// Sales-qualification tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadTier {
    Cold,
    Warm,
    Hot,
}

impl LeadTier {
    pub const fn label(self) -> &'static str {
        match self {
            LeadTier::Cold => "Cold",
            LeadTier::Warm => "Warm",
            LeadTier::Hot => "Hot",
        }
    }

    pub const fn rank(self) -> u8 {
        match self {
            LeadTier::Cold => 0,
            LeadTier::Warm => 1,
            LeadTier::Hot => 2,
        }
    }

    const fn upgraded(self) -> Self {
        match self {
            LeadTier::Cold => LeadTier::Warm,
            LeadTier::Warm | LeadTier::Hot => LeadTier::Hot,
        }
    }
}

/// Classification handed verbatim to the sales/admin reviewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadClassification {
    pub tier: LeadTier,
    /// Names the dominant signals; a reviewer acts on this without
    /// re-deriving the math.
    pub reason: String,
}

/// Structural defects in a score result handed to the classifier. These are
/// upstream caller bugs (mismatched catalogs), not user input problems.
#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    #[error("total score {total} outside the valid range {min}..={max} for {dimensions} dimensions")]
    ScoreOutOfRange {
        total: u16,
        min: u16,
        max: u16,
        dimensions: usize,
    },
    #[error("score result reports max score {found} but {dimensions} dimensions imply {expected}")]
    MaxScoreMismatch {
        expected: u16,
        found: u16,
        dimensions: usize,
    },
}

/// Derives a hot/warm/cold tier from the maturity band, firmographic
/// signals, and the partial-submission flag.
///
/// Band sets the baseline (advanced -> hot, developing -> warm, early ->
/// cold). Senior roles and mid-size-or-larger companies upgrade one step and
/// never downgrade; gap counts inform the reason text only. A partial
/// submission is capped below hot regardless of score.
pub fn classify(
    result: &ScoreResult,
    analysis: &GapAnalysis,
    context: &LeadContext,
) -> Result<LeadClassification, ClassificationError> {
    let dimensions = result.dimension_scores.len();
    let expected_max = dimensions as u16 * 5;
    if result.max_score != expected_max {
        return Err(ClassificationError::MaxScoreMismatch {
            expected: expected_max,
            found: result.max_score,
            dimensions,
        });
    }

    let is_partial = context.is_partial || result.is_partial;
    // Preview results may legitimately sum below one point per dimension.
    let min_total = if is_partial { 0 } else { dimensions as u16 };
    if result.total_score < min_total || result.total_score > expected_max {
        return Err(ClassificationError::ScoreOutOfRange {
            total: result.total_score,
            min: min_total,
            max: expected_max,
            dimensions,
        });
    }

    let base = match result.band {
        MaturityBand::Advanced => LeadTier::Hot,
        MaturityBand::Developing => LeadTier::Warm,
        MaturityBand::Early => LeadTier::Cold,
    };

    let mut factors = vec![score_factor(result, analysis)];
    let mut tier = base;

    let firmographic = firmographic_factor(context);
    if let Some(signal) = firmographic {
        if tier.rank() < LeadTier::Hot.rank() {
            tier = tier.upgraded();
            factors.push(format!("{signal} lifts the tier one step"));
        } else {
            factors.push(signal);
        }
    }

    if is_partial && tier == LeadTier::Hot {
        tier = LeadTier::Warm;
        factors.push("incomplete submission capped below hot".to_string());
    } else if is_partial {
        factors.push("submission is incomplete".to_string());
    }

    Ok(LeadClassification {
        tier,
        reason: factors.join("; "),
    })
}

fn score_factor(result: &ScoreResult, analysis: &GapAnalysis) -> String {
    let band = result.band.label().to_ascii_lowercase();
    let critical = analysis
        .breakdown
        .iter()
        .filter(|standing| standing.status == GapStatus::CriticalGap)
        .count();

    let mut factor = format!(
        "scored {}/{} in the {band} band",
        result.total_score, result.max_score
    );
    if critical > 0 {
        factor.push_str(&format!(
            " with {critical} critical gap{} remaining",
            if critical == 1 { "" } else { "s" }
        ));
    } else if analysis.gap_count > 0 {
        factor.push_str(&format!(
            " with {} dimension{} below sufficiency",
            analysis.gap_count,
            if analysis.gap_count == 1 { "" } else { "s" }
        ));
    } else {
        factor.push_str(" with every dimension at or above sufficiency");
    }
    factor
}

fn firmographic_factor(context: &LeadContext) -> Option<String> {
    let large_company = context
        .company_size
        .filter(|size| *size >= CompanySize::Medium);
    let senior_role = context.role.filter(|role| role.is_senior());

    match (large_company, senior_role) {
        (Some(size), Some(role)) => Some(format!(
            "{} company size and {} role signal buying authority",
            size.label(),
            role.label().to_ascii_lowercase()
        )),
        (Some(size), None) => Some(format!("{} company size signals budget", size.label())),
        (None, Some(role)) => Some(format!(
            "{} role signals decision authority",
            role.label().to_ascii_lowercase()
        )),
        (None, None) => None,
    }
}
