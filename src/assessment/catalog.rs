use serde::{Deserialize, Serialize};

/// Selects which questionnaire's dimension catalog to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentKind {
    AiReadiness,
    Career,
}

impl AssessmentKind {
    pub const fn label(self) -> &'static str {
        match self {
            AssessmentKind::AiReadiness => "AI Readiness Assessment",
            AssessmentKind::Career => "Career Readiness Assessment",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            AssessmentKind::AiReadiness => "ai_readiness",
            AssessmentKind::Career => "career",
        }
    }

    /// Parses a caller-supplied selector. Unknown selectors are a caller bug
    /// and fail fast rather than defaulting.
    pub fn parse(value: &str) -> Result<Self, CatalogError> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "ai_readiness" | "ai" => Ok(Self::AiReadiness),
            "career" => Ok(Self::Career),
            other => Err(CatalogError::UnknownAssessmentKind(other.to_string())),
        }
    }
}

/// Configuration failures raised by catalog selection.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown assessment kind '{0}'; expected one of: ai_readiness, career")]
    UnknownAssessmentKind(String),
}

/// Methodology stage used to group dimensions in reports. Grouping only;
/// never consulted by scoring math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentPhase {
    Align,
    Govern,
    Enable,
    Scale,
}

impl AssessmentPhase {
    pub const fn label(self) -> &'static str {
        match self {
            AssessmentPhase::Align => "Align & Commit",
            AssessmentPhase::Govern => "Govern & Protect",
            AssessmentPhase::Enable => "Enable & Integrate",
            AssessmentPhase::Scale => "Scale & Sustain",
        }
    }

    pub fn ordered() -> Vec<AssessmentPhase> {
        vec![
            AssessmentPhase::Align,
            AssessmentPhase::Govern,
            AssessmentPhase::Enable,
            AssessmentPhase::Scale,
        ]
    }
}

/// One scored axis of organizational maturity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dimension {
    pub id: &'static str,
    pub title: &'static str,
    pub phase: AssessmentPhase,
    /// Target score considered "industry sufficient" for this dimension.
    pub benchmark: f32,
    /// What each integer score 1..=5 means for this dimension.
    pub level_descriptions: [&'static str; 5],
}

impl Dimension {
    pub fn level_description(&self, score: u8) -> Option<&'static str> {
        if (1..=5).contains(&score) {
            Some(self.level_descriptions[(score - 1) as usize])
        } else {
            None
        }
    }
}

/// Fixed, ordered dimension table for one assessment kind. Order is the
/// question-display order and the tie-break order downstream.
#[derive(Debug, Clone, Serialize)]
pub struct DimensionCatalog {
    kind: AssessmentKind,
    dimensions: Vec<Dimension>,
}

impl DimensionCatalog {
    pub fn for_kind(kind: AssessmentKind) -> Self {
        let dimensions = match kind {
            AssessmentKind::AiReadiness => ai_readiness_dimensions(),
            AssessmentKind::Career => career_dimensions(),
        };
        Self { kind, dimensions }
    }

    pub fn kind(&self) -> AssessmentKind {
        self.kind
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Maximum possible total score for a complete answer set.
    pub fn max_score(&self) -> u16 {
        self.dimensions.len() as u16 * 5
    }

    pub fn dimension(&self, id: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|dimension| dimension.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.dimension(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.dimensions.iter().map(|dimension| dimension.id)
    }
}

fn ai_readiness_dimensions() -> Vec<Dimension> {
    vec![
        Dimension {
            id: "strategic",
            title: "Strategic Vision",
            phase: AssessmentPhase::Align,
            benchmark: 3.8,
            level_descriptions: [
                "No articulated AI direction; initiatives are ad hoc experiments.",
                "Interest exists but AI is absent from the business strategy.",
                "A written AI ambition exists without funded initiatives behind it.",
                "AI priorities are funded and tied to measurable business outcomes.",
                "AI strategy drives the operating model and is reviewed quarterly.",
            ],
        },
        Dimension {
            id: "executive",
            title: "Executive Sponsorship",
            phase: AssessmentPhase::Align,
            benchmark: 3.6,
            level_descriptions: [
                "Leadership has not engaged with AI beyond awareness.",
                "A single champion advocates without budget authority.",
                "Executives sponsor pilots but ownership is unclear.",
                "A named executive owns AI outcomes with dedicated budget.",
                "The leadership team shares AI accountability in its scorecard.",
            ],
        },
        Dimension {
            id: "oversight",
            title: "Human Oversight",
            phase: AssessmentPhase::Govern,
            benchmark: 3.5,
            level_descriptions: [
                "AI outputs reach customers or decisions without review.",
                "Review happens informally and depends on individuals.",
                "Spot checks exist but escalation paths are undefined.",
                "Defined checkpoints put humans in the loop for material decisions.",
                "Oversight is tiered by risk with audited escalation and override.",
            ],
        },
        Dimension {
            id: "data",
            title: "Data Foundation",
            phase: AssessmentPhase::Enable,
            benchmark: 4.0,
            level_descriptions: [
                "Critical data is fragmented, undocumented, or inaccessible.",
                "Key datasets exist but quality and lineage are unknown.",
                "Core data is centralized though coverage and freshness vary.",
                "Governed, documented data pipelines feed analytics reliably.",
                "Production-grade data products serve AI use cases on demand.",
            ],
        },
        Dimension {
            id: "security",
            title: "Security & Privacy",
            phase: AssessmentPhase::Govern,
            benchmark: 3.9,
            level_descriptions: [
                "No controls govern what data enters AI tools.",
                "Policies are drafted but unenforced and unmonitored.",
                "Sensitive data handling rules exist for sanctioned tools only.",
                "Access controls and data classification cover AI workloads.",
                "AI usage is monitored against a tested security and privacy program.",
            ],
        },
        Dimension {
            id: "risk",
            title: "Risk Management",
            phase: AssessmentPhase::Govern,
            benchmark: 3.6,
            level_descriptions: [
                "AI risks are unidentified and unowned.",
                "Risks are acknowledged but not inventoried.",
                "An AI risk register exists without mitigation owners.",
                "Material AI risks carry owners, mitigations, and review dates.",
                "Risk appetite for AI is defined and informs go/no-go decisions.",
            ],
        },
        Dimension {
            id: "governance",
            title: "AI Governance",
            phase: AssessmentPhase::Govern,
            benchmark: 3.4,
            level_descriptions: [
                "No policy states how the organization may use AI.",
                "An acceptable-use note exists but is not socialized.",
                "A governance policy is published with no review cadence.",
                "A cross-functional body reviews AI usage against policy.",
                "Governance gates are embedded in delivery and procurement.",
            ],
        },
        Dimension {
            id: "integration",
            title: "Systems Integration",
            phase: AssessmentPhase::Enable,
            benchmark: 3.7,
            level_descriptions: [
                "AI tools run detached from the systems where work happens.",
                "Outputs are copied between tools by hand.",
                "Point integrations exist for isolated workflows.",
                "AI is embedded in core workflows through supported interfaces.",
                "Integration patterns are standardized and reused across teams.",
            ],
        },
        Dimension {
            id: "workforce",
            title: "Workforce Enablement",
            phase: AssessmentPhase::Scale,
            benchmark: 3.5,
            level_descriptions: [
                "Staff have had no AI training or guidance.",
                "A few self-taught enthusiasts experiment alone.",
                "One-off training has run without role-specific depth.",
                "Role-based enablement paths exist with adoption tracking.",
                "Continuous upskilling is budgeted and tied to job expectations.",
            ],
        },
        Dimension {
            id: "improvement",
            title: "Continuous Improvement",
            phase: AssessmentPhase::Scale,
            benchmark: 3.4,
            level_descriptions: [
                "Nothing measures whether AI efforts work.",
                "Anecdotes stand in for measurement.",
                "Usage is tracked but outcomes are not.",
                "Initiatives carry baselines and are retired or scaled on evidence.",
                "A feedback loop tunes models, prompts, and processes routinely.",
            ],
        },
    ]
}

fn career_dimensions() -> Vec<Dimension> {
    vec![
        Dimension {
            id: "clarity",
            title: "Career Clarity",
            phase: AssessmentPhase::Align,
            benchmark: 3.8,
            level_descriptions: [
                "No defined direction for the next career move.",
                "Several directions under consideration, none committed.",
                "A target role is named without a transition plan.",
                "A written plan with milestones guides the transition.",
                "The plan is in motion with regular progress checkpoints.",
            ],
        },
        Dimension {
            id: "skills",
            title: "Skill Currency",
            phase: AssessmentPhase::Enable,
            benchmark: 3.7,
            level_descriptions: [
                "Core skills have not been refreshed in years.",
                "Learning is sporadic and unfocused.",
                "Skill gaps for the target role are identified but unaddressed.",
                "A learning plan actively closes the identified gaps.",
                "Skills match the target role and are demonstrably current.",
            ],
        },
        Dimension {
            id: "experience",
            title: "Applied Experience",
            phase: AssessmentPhase::Enable,
            benchmark: 3.5,
            level_descriptions: [
                "No portfolio or evidence of relevant work.",
                "Relevant work exists but is undocumented.",
                "A few documented examples exist without outcomes.",
                "A curated portfolio shows outcomes for the target role.",
                "Recognized, referenceable work positions you as a practitioner.",
            ],
        },
        Dimension {
            id: "network",
            title: "Professional Network",
            phase: AssessmentPhase::Scale,
            benchmark: 3.5,
            level_descriptions: [
                "No active contacts in the target field.",
                "A handful of dormant connections.",
                "Occasional engagement with people in the field.",
                "Regular, reciprocal contact with practitioners and hirers.",
                "The network proactively surfaces opportunities.",
            ],
        },
        Dimension {
            id: "visibility",
            title: "Market Visibility",
            phase: AssessmentPhase::Scale,
            benchmark: 3.4,
            level_descriptions: [
                "No public professional presence.",
                "Profiles exist but are outdated.",
                "Profiles are current yet passive.",
                "Regular output makes expertise findable.",
                "Inbound interest arrives from published work.",
            ],
        },
        Dimension {
            id: "resilience",
            title: "Change Resilience",
            phase: AssessmentPhase::Govern,
            benchmark: 3.6,
            level_descriptions: [
                "No financial or personal runway for a transition.",
                "Change feels urgent but unplanned.",
                "Some buffer exists without a contingency plan.",
                "Runway and contingencies support a deliberate transition.",
                "Positioned to absorb setbacks and iterate on the plan.",
            ],
        },
    ]
}
