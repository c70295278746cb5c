use super::domain::{Criterion, CriterionId};

/// The ordered set of weighted criteria active for the matrix. Built once at
/// startup; immutable afterwards.
#[derive(Debug, Clone)]
pub struct CriteriaCatalog {
    criteria: Vec<Criterion>,
}

/// Raised only when a hand-assembled catalog violates the weight invariant.
/// The standard catalog is checked by a unit test and cannot fail at runtime.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("criteria weights must sum to 100, got {0}")]
    WeightSum(u32),
    #[error("duplicate criterion id '{0}'")]
    DuplicateId(CriterionId),
}

impl CriteriaCatalog {
    pub fn new(criteria: Vec<Criterion>) -> Result<Self, CatalogError> {
        let sum: u32 = criteria.iter().map(|c| u32::from(c.weight)).sum();
        if sum != 100 {
            return Err(CatalogError::WeightSum(sum));
        }
        for (index, criterion) in criteria.iter().enumerate() {
            if criteria[..index].iter().any(|c| c.id == criterion.id) {
                return Err(CatalogError::DuplicateId(criterion.id.clone()));
            }
        }
        Ok(Self { criteria })
    }

    /// The catalog used by the university PMO matrix.
    pub fn standard() -> Self {
        let criteria = vec![
            Criterion {
                id: CriterionId::new("safety"),
                name: "Safety & Compliance",
                description: "Impact on campus safety, accessibility, and regulatory compliance.",
                weight: 25,
                rating_guide: [
                    "No safety or compliance implications",
                    "Minor safety improvement, no open findings",
                    "Addresses a documented safety concern",
                    "Resolves a recurring safety or compliance finding",
                    "Eliminates an immediate hazard or active violation",
                ],
            },
            Criterion {
                id: CriterionId::new("functionality"),
                name: "Functionality Restoration",
                description: "Degree to which the project restores or improves core operations.",
                weight: 20,
                rating_guide: [
                    "Cosmetic only",
                    "Improves convenience for a single unit",
                    "Restores degraded functionality",
                    "Restores a partially failed core function",
                    "Restores a fully failed core function",
                ],
            },
            Criterion {
                id: CriterionId::new("frequency"),
                name: "Frequency of Use",
                description: "How often the affected facility or system is used.",
                weight: 15,
                rating_guide: [
                    "Rarely used",
                    "Used a few times per term",
                    "Weekly use",
                    "Daily use",
                    "Continuous or round-the-clock use",
                ],
            },
            Criterion {
                id: CriterionId::new("beneficiaries"),
                name: "Number of Beneficiaries",
                description: "Size of the population served by the project outcome.",
                weight: 15,
                rating_guide: [
                    "A handful of individuals",
                    "A single office or lab",
                    "One department",
                    "One college or several departments",
                    "The whole campus community",
                ],
            },
            Criterion {
                id: CriterionId::new("cost"),
                name: "Cost Efficiency",
                description: "Expected value delivered relative to estimated cost.",
                weight: 10,
                rating_guide: [
                    "High cost, marginal benefit",
                    "Cost exceeds typical benchmarks",
                    "Cost in line with benchmarks",
                    "Below-benchmark cost for the benefit",
                    "Minimal cost, outsized benefit",
                ],
            },
            Criterion {
                id: CriterionId::new("strategic"),
                name: "Strategic Alignment",
                description: "Fit with the university's published strategic plan.",
                weight: 10,
                rating_guide: [
                    "No link to strategic objectives",
                    "Loosely related to an objective",
                    "Supports one strategic objective",
                    "Supports several strategic objectives",
                    "Directly mandated by the strategic plan",
                ],
            },
            Criterion {
                id: CriterionId::new("disaster"),
                name: "Disaster Mitigation",
                description: "Contribution to disaster preparedness or risk reduction.",
                weight: 5,
                rating_guide: [
                    "No mitigation value",
                    "Incidental mitigation value",
                    "Reduces exposure to a known risk",
                    "Mitigates a high-likelihood risk",
                    "Critical to disaster response capability",
                ],
            },
        ];

        Self::new(criteria).expect("standard catalog weights sum to 100")
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn get(&self, id: &CriterionId) -> Option<&Criterion> {
        self.criteria.iter().find(|criterion| &criterion.id == id)
    }
}
