//! Candidate career paths considered by every reasoning pass.

use serde::{Deserialize, Serialize};

/// The fixed solution space: stay, advance, one of five field switches, or
/// formal further education.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerPath {
    StayBpo,
    AdvanceBpo,
    SwitchTech,
    SwitchBusiness,
    SwitchEducation,
    SwitchHealthcare,
    SwitchCreative,
    FurtherEducation,
}

/// Coarse grouping used by the simulator's revert model: BPO paths carry no
/// transition risk, the rest do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathCategory {
    Bpo,
    Transition,
    Education,
}

impl CareerPath {
    pub const ALL: [CareerPath; 8] = [
        CareerPath::StayBpo,
        CareerPath::AdvanceBpo,
        CareerPath::SwitchTech,
        CareerPath::SwitchBusiness,
        CareerPath::SwitchEducation,
        CareerPath::SwitchHealthcare,
        CareerPath::SwitchCreative,
        CareerPath::FurtherEducation,
    ];

    /// Stable wire identifier, also the lexical tie-break key when ranking.
    pub fn id(&self) -> &'static str {
        match self {
            CareerPath::StayBpo => "stay_bpo",
            CareerPath::AdvanceBpo => "advance_bpo",
            CareerPath::SwitchTech => "switch_tech",
            CareerPath::SwitchBusiness => "switch_business",
            CareerPath::SwitchEducation => "switch_education",
            CareerPath::SwitchHealthcare => "switch_healthcare",
            CareerPath::SwitchCreative => "switch_creative",
            CareerPath::FurtherEducation => "further_education",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CareerPath::StayBpo => "Stay in BPO",
            CareerPath::AdvanceBpo => "Advance in BPO (Team Lead/Specialist)",
            CareerPath::SwitchTech => "Switch to Tech/IT",
            CareerPath::SwitchBusiness => "Switch to Business Role",
            CareerPath::SwitchEducation => "Switch to Education/Training",
            CareerPath::SwitchHealthcare => "Switch to Healthcare",
            CareerPath::SwitchCreative => "Switch to Creative/Design",
            CareerPath::FurtherEducation => "Pursue Further Education",
        }
    }

    pub fn category(&self) -> PathCategory {
        match self {
            CareerPath::StayBpo | CareerPath::AdvanceBpo => PathCategory::Bpo,
            CareerPath::FurtherEducation => PathCategory::Education,
            _ => PathCategory::Transition,
        }
    }

    /// Whether a trial on this path can revert to the status quo mid-horizon.
    pub fn carries_transition_risk(&self) -> bool {
        !matches!(self.category(), PathCategory::Bpo)
    }
}

impl std::fmt::Display for CareerPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_stable() {
        let mut ids: Vec<&str> = CareerPath::ALL.iter().map(|p| p.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CareerPath::ALL.len());
    }

    #[test]
    fn test_transition_risk_follows_category() {
        assert!(!CareerPath::StayBpo.carries_transition_risk());
        assert!(!CareerPath::AdvanceBpo.carries_transition_risk());
        assert!(CareerPath::SwitchTech.carries_transition_risk());
        assert!(CareerPath::FurtherEducation.carries_transition_risk());
    }

    #[test]
    fn test_serde_round_trip_uses_snake_case_id() {
        let json = serde_json::to_string(&CareerPath::SwitchTech).unwrap();
        assert_eq!(json, "\"switch_tech\"");
        let back: CareerPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CareerPath::SwitchTech);
    }
}
