//! Industry veteran: weighs experience, performance record and transferable
//! skills. Abstains for candidates with no BPO experience at all.

use crate::draft::DraftBoard;
use async_trait::async_trait;
use crossroad_core::{
    BlackboardView, CareerPath, Hypothesis, Interest, KnowledgeSource, PerformanceLevel,
    SourceError,
};

pub const SOURCE_ID: &str = "industry_veteran";

/// Advancement and market-value assessment grounded in years on the floor.
#[derive(Debug, Clone, Copy)]
pub struct IndustryVeteran;

impl IndustryVeteran {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IndustryVeteran {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KnowledgeSource for IndustryVeteran {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    fn name(&self) -> &str {
        "Industry Veteran"
    }

    fn precondition(&self, view: &BlackboardView<'_>) -> bool {
        view.profile.bpo_experience_years > 0
    }

    async fn contribute(&self, view: &BlackboardView<'_>) -> Result<Vec<Hypothesis>, SourceError> {
        let p = view.profile;
        let exp = p.bpo_experience_years;
        let mut board = DraftBoard::new();

        // Advancement trajectory: experience compounds up to year ten.
        board.bump(CareerPath::AdvanceBpo, 0.30 + 0.05 * f64::from(exp.min(10)));
        board.rationale(
            CareerPath::AdvanceBpo,
            "Tenure, performance and interest all feed the internal promotion track",
        );
        if exp >= 3 {
            board.pro(
                CareerPath::AdvanceBpo,
                "Existing tenure provides a strong foundation for advancement",
            );
        } else {
            board.bump(CareerPath::AdvanceBpo, -0.05);
            board.con(
                CareerPath::AdvanceBpo,
                "May need more tenure before promotion opportunities open up",
            );
        }
        match p.performance {
            PerformanceLevel::Excellent => {
                board.bump(CareerPath::AdvanceBpo, 0.30);
                board.pro(
                    CareerPath::AdvanceBpo,
                    "Excellent performance record signals high promotion potential",
                );
            }
            PerformanceLevel::Good => {
                board.bump(CareerPath::AdvanceBpo, 0.15);
                board.pro(
                    CareerPath::AdvanceBpo,
                    "Consistently good performance supports promotion prospects",
                );
            }
            PerformanceLevel::Average | PerformanceLevel::Poor => {}
        }
        if p.has_interest(Interest::Leadership) || p.has_interest(Interest::SpecializedBpo) {
            board.bump(CareerPath::AdvanceBpo, 0.20);
            board.pro(
                CareerPath::AdvanceBpo,
                "Interest in leadership or specialized functions fits internal tracks",
            );
        }
        if !p.has_degree {
            board.bump(CareerPath::AdvanceBpo, -0.05);
            board.con(
                CareerPath::AdvanceBpo,
                "Some higher management roles still ask for a degree",
            );
        }

        // Staying put is a real option, not a default.
        board.bump(CareerPath::StayBpo, 0.40 + 0.02 * f64::from(p.satisfaction));
        board.pro(
            CareerPath::StayBpo,
            "Stable income and familiar environment while options develop",
        );
        board.con(
            CareerPath::StayBpo,
            "Limited long-term growth ceiling on the agent track",
        );
        if p.satisfaction <= 3 {
            board.bump(CareerPath::StayBpo, -0.15);
            board.con(
                CareerPath::StayBpo,
                "Sustained dissatisfaction erodes performance over time",
            );
        }

        // Transferable skills after a few years on accounts.
        if exp >= 3 {
            board.bump(CareerPath::SwitchBusiness, 0.55);
            board.pro(
                CareerPath::SwitchBusiness,
                "Client-handling experience transfers directly to business operations roles",
            );
            if !p.has_degree {
                board.bump(CareerPath::SwitchBusiness, -0.10);
                board.con(
                    CareerPath::SwitchBusiness,
                    "Many business roles expect a degree at entry",
                );
            }
        }
        if p.has_interest(Interest::Technology) {
            board.bump(CareerPath::SwitchTech, 0.60);
            board.pro(
                CareerPath::SwitchTech,
                "Strong market demand for BPO-experienced technical support and QA talent",
            );
            board.con(
                CareerPath::SwitchTech,
                "Expect to start below current seniority while technical skills ramp up",
            );
        }

        // Deep dissatisfaction plus a named field: get out sooner.
        if p.satisfaction < 3 {
            if let Some(field) = p.identified_field() {
                let target = field.target_path();
                board.ensure(target, 0.55);
                board.bump(target, 0.15);
                board.pro(
                    target,
                    "Transition advisable while keeping BPO income until the new field pays",
                );
            }
        }

        Ok(board.into_hypotheses(
            SOURCE_ID,
            "Market value of the candidate's experience on this path",
        ))
    }
}
