use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::CriteriaCatalog;
use super::domain::{CriterionId, PriorityLevel};

/// Minimum rounded total that classifies as `High`.
pub const HIGH_THRESHOLD: f64 = 3.5;
/// Minimum rounded total that classifies as `Medium`.
pub const MEDIUM_THRESHOLD: f64 = 2.5;

/// Rejected rating input. Always recoverable; nothing is mutated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing rating for criterion '{0}'")]
    MissingCriterion(CriterionId),
    #[error("unknown criterion '{0}'")]
    UnknownCriterion(CriterionId),
    #[error("rating {rating} for criterion '{criterion}' is outside 1-5")]
    RatingOutOfRange { criterion: CriterionId, rating: u8 },
}

/// Derived score fields for one set of ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub weighted_scores: BTreeMap<CriterionId, f64>,
    pub total_weighted_score: f64,
    pub priority_level: PriorityLevel,
}

/// Stateless scorer bound to the immutable criteria catalog.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: CriteriaCatalog,
}

impl ScoringEngine {
    pub fn new(catalog: CriteriaCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CriteriaCatalog {
        &self.catalog
    }

    /// Validate the ratings and derive weighted scores, the 2-decimal total,
    /// and the priority level. Pure; no side effects.
    pub fn score(
        &self,
        criteria_scores: &BTreeMap<CriterionId, u8>,
    ) -> Result<ScoreBreakdown, ValidationError> {
        for id in criteria_scores.keys() {
            if self.catalog.get(id).is_none() {
                return Err(ValidationError::UnknownCriterion(id.clone()));
            }
        }

        let mut weighted_scores = BTreeMap::new();
        let mut total = 0.0_f64;

        for criterion in self.catalog.criteria() {
            let rating = *criteria_scores
                .get(&criterion.id)
                .ok_or_else(|| ValidationError::MissingCriterion(criterion.id.clone()))?;
            if !(1..=5).contains(&rating) {
                return Err(ValidationError::RatingOutOfRange {
                    criterion: criterion.id.clone(),
                    rating,
                });
            }

            let weighted = f64::from(rating) * f64::from(criterion.weight) / 100.0;
            weighted_scores.insert(criterion.id.clone(), round2(weighted));
            total += weighted;
        }

        // Thresholds compare the same rounded value the UI displays, so the
        // printed score and the printed level can never disagree.
        let total_weighted_score = round2(total);
        let priority_level = classify(total_weighted_score);

        Ok(ScoreBreakdown {
            weighted_scores,
            total_weighted_score,
            priority_level,
        })
    }
}

/// Map a rounded total onto the High/Medium/Low bands. Total over [1, 5]
/// with inclusive lower bounds at 3.5 and 2.5.
pub fn classify(total_weighted_score: f64) -> PriorityLevel {
    if total_weighted_score >= HIGH_THRESHOLD {
        PriorityLevel::High
    } else if total_weighted_score >= MEDIUM_THRESHOLD {
        PriorityLevel::Medium
    } else {
        PriorityLevel::Low
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
