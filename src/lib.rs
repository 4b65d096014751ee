//! Scoring and lead-qualification engine for self-scoring readiness
//! assessments.
//!
//! The surrounding product (web forms, persistence, email, admin views) is
//! out of scope; this crate owns the deterministic computation from raw
//! questionnaire answers to score, band, gap analysis, recommendations, and
//! a hot/warm/cold lead tier.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
