use super::catalog::DimensionCatalog;
use super::scoring::AggregationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Respondent answers keyed by dimension id. May be partial while a session
/// is in progress; completeness is enforced at the aggregation boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAnswerSet")]
pub struct AnswerSet {
    scores: BTreeMap<String, u8>,
}

/// Unvalidated wire shape; conversion applies the 1..=5 range check, so a
/// deserialized set holds the same invariant as one built through `set`.
#[derive(Deserialize)]
struct RawAnswerSet {
    scores: BTreeMap<String, u8>,
}

impl TryFrom<RawAnswerSet> for AnswerSet {
    type Error = AggregationError;

    fn try_from(raw: RawAnswerSet) -> Result<Self, Self::Error> {
        Self::from_pairs(raw.scores)
    }
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer. Scores outside 1..=5 are rejected at the door so a
    /// malformed answer can never reach the aggregator.
    pub fn set(&mut self, dimension: impl Into<String>, score: u8) -> Result<(), AggregationError> {
        let dimension = dimension.into();
        if !(1..=5).contains(&score) {
            return Err(AggregationError::AnswerOutOfRange { dimension, value: score });
        }
        self.scores.insert(dimension, score);
        Ok(())
    }

    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, AggregationError>
    where
        I: IntoIterator<Item = (S, u8)>,
        S: Into<String>,
    {
        let mut answers = Self::new();
        for (dimension, score) in pairs {
            answers.set(dimension, score)?;
        }
        Ok(answers)
    }

    pub fn get(&self, dimension: &str) -> Option<u8> {
        self.scores.get(dimension).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> + '_ {
        self.scores.iter().map(|(id, score)| (id.as_str(), *score))
    }

    /// Catalog dimensions this set has not answered, in catalog order.
    pub fn missing_from(&self, catalog: &DimensionCatalog) -> Vec<String> {
        catalog
            .ids()
            .filter(|id| !self.scores.contains_key(*id))
            .map(str::to_string)
            .collect()
    }

    /// Rejects answers keyed by dimensions the catalog does not define.
    pub fn validate_against(&self, catalog: &DimensionCatalog) -> Result<(), AggregationError> {
        for dimension in self.scores.keys() {
            if !catalog.contains(dimension) {
                return Err(AggregationError::UnknownDimension {
                    dimension: dimension.clone(),
                    assessment: catalog.kind().key(),
                });
            }
        }
        Ok(())
    }

    pub fn is_complete_for(&self, catalog: &DimensionCatalog) -> bool {
        catalog.ids().all(|id| self.scores.contains_key(id))
    }
}
