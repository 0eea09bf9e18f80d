//! Education advisor: credential gaps and retraining routes. Fires only when
//! education is actually in play for the candidate.

use crate::draft::DraftBoard;
use async_trait::async_trait;
use crossroad_core::{
    AlternativeField, BlackboardView, CareerPath, FinancialPressure, Hypothesis, Interest,
    KnowledgeSource, SourceError,
};

pub const SOURCE_ID: &str = "education_advisor";

/// Credential-path assessment for candidates with an education question open.
#[derive(Debug, Clone, Copy)]
pub struct EducationAdvisor;

impl EducationAdvisor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EducationAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KnowledgeSource for EducationAdvisor {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    fn name(&self) -> &str {
        "Education Advisor"
    }

    /// Education is in play when a credential gap exists, a new field has
    /// been identified, or the candidate leans academic.
    fn precondition(&self, view: &BlackboardView<'_>) -> bool {
        let p = view.profile;
        !p.has_degree
            || p.identified_field().is_some()
            || p.has_interest(Interest::Learning)
            || p.has_interest(Interest::Academic)
    }

    async fn contribute(&self, view: &BlackboardView<'_>) -> Result<Vec<Hypothesis>, SourceError> {
        let p = view.profile;
        let mut board = DraftBoard::new();

        if let Some(field) = p.identified_field() {
            match field {
                AlternativeField::Tech => {
                    board.bump(CareerPath::SwitchTech, 0.75);
                    board.pro(
                        CareerPath::SwitchTech,
                        "Reachable through bootcamps and certifications rather than a full degree",
                    );
                    board.con(
                        CareerPath::SwitchTech,
                        "Certification costs and study time alongside work",
                    );
                    if p.researched_requirements {
                        board.bump(CareerPath::SwitchTech, 0.10);
                        board.pro(
                            CareerPath::SwitchTech,
                            "Requirements already researched, so the pathway is concrete",
                        );
                    }
                }
                AlternativeField::Business => {
                    if p.has_degree {
                        board.bump(CareerPath::SwitchBusiness, 0.70);
                        board.pro(
                            CareerPath::SwitchBusiness,
                            "Existing degree covers the usual credential requirement",
                        );
                    } else {
                        board.bump(CareerPath::FurtherEducation, 0.65);
                        board.pro(
                            CareerPath::FurtherEducation,
                            "Business coursework would close the credential gap",
                        );
                        board.bump(CareerPath::SwitchBusiness, 0.45);
                        board.con(
                            CareerPath::SwitchBusiness,
                            "Business roles often require formal education credentials",
                        );
                    }
                }
                AlternativeField::Education => {
                    board.bump(CareerPath::SwitchEducation, 0.70);
                    board.pro(
                        CareerPath::SwitchEducation,
                        "Teaching credentials are attainable part-time",
                    );
                    board.con(
                        CareerPath::SwitchEducation,
                        "Requires specific teaching certification",
                    );
                }
                AlternativeField::Healthcare => {
                    board.bump(CareerPath::SwitchHealthcare, 0.65);
                    board.pro(
                        CareerPath::SwitchHealthcare,
                        "Strong demand and job security once certified",
                    );
                    board.con(
                        CareerPath::SwitchHealthcare,
                        "Requires dedicated healthcare training or certification",
                    );
                }
                AlternativeField::Creative => {
                    board.bump(CareerPath::SwitchCreative, 0.60);
                    board.pro(
                        CareerPath::SwitchCreative,
                        "A portfolio built through freelance work can stand in for formal study",
                    );
                    board.con(
                        CareerPath::SwitchCreative,
                        "Formal design training helps in a crowded field",
                    );
                }
            }
        }

        if !p.has_degree {
            if p.financial_pressure == FinancialPressure::High {
                board.bump(CareerPath::FurtherEducation, 0.40);
                board.con(
                    CareerPath::FurtherEducation,
                    "Full-time study could cause financial strain right now",
                );
                for cert_path in [CareerPath::SwitchTech, CareerPath::SwitchBusiness] {
                    board.bump_if_present(cert_path, 0.05);
                    board.pro(
                        cert_path,
                        "Short certification tracks avoid the cost of a full degree",
                    );
                }
            } else {
                board.bump(CareerPath::FurtherEducation, 0.70);
                board.pro(
                    CareerPath::FurtherEducation,
                    "Finishing a degree removes the qualification ceiling on advancement",
                );
                board.con(
                    CareerPath::FurtherEducation,
                    "Years of combined work and study before it pays off",
                );
            }
        }

        if p.has_interest(Interest::Learning) || p.has_interest(Interest::Academic) {
            board.ensure(CareerPath::FurtherEducation, 0.55);
            board.bump(CareerPath::FurtherEducation, 0.10);
            board.pro(
                CareerPath::FurtherEducation,
                "Matches the expressed appetite for structured learning",
            );
        }

        Ok(board.into_hypotheses(
            SOURCE_ID,
            "Credential requirements and retraining routes for this path",
        ))
    }
}
