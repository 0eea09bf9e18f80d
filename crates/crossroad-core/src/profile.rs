//! Worker profile: the immutable input record, validated once at entry.

use crate::error::{FieldIssue, ProfileValidationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Age must fall in this range (inclusive).
pub const AGE_RANGE: std::ops::RangeInclusive<u32> = 18..=65;
/// Years of BPO experience (inclusive).
pub const EXPERIENCE_RANGE: std::ops::RangeInclusive<u32> = 0..=30;
/// Monthly salary band in PHP (inclusive).
pub const SALARY_RANGE: std::ops::RangeInclusive<f64> = 5_000.0..=500_000.0;
/// Self-reported satisfaction scale (inclusive).
pub const SATISFACTION_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// Three-level trait scale. Ordering is meaningful: simulation effects are
/// monotone in the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitLevel {
    Low,
    Medium,
    High,
}

impl TraitLevel {
    /// Levels above `Low` (0, 1 or 2), used for commitment credits.
    pub fn rank(&self) -> u8 {
        match self {
            TraitLevel::Low => 0,
            TraitLevel::Medium => 1,
            TraitLevel::High => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceLevel {
    Poor,
    Average,
    Good,
    Excellent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    #[serde(alias = "High School")]
    HighSchool,
    #[serde(alias = "Some college", alias = "Some College")]
    SomeCollege,
    #[serde(alias = "Vocational")]
    Vocational,
    #[serde(alias = "Bachelor's Degree")]
    BachelorsDegree,
    #[serde(alias = "Postgraduate Degree")]
    PostgraduateDegree,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrentRole {
    #[serde(alias = "Customer Service Representative")]
    CustomerServiceRepresentative,
    #[serde(alias = "Technical Support Representative")]
    TechnicalSupportRepresentative,
    #[serde(alias = "Team Lead")]
    TeamLead,
    #[serde(alias = "Quality Analyst")]
    QualityAnalyst,
    #[serde(alias = "Trainer")]
    Trainer,
}

/// Closed set of interest tags the knowledge sources understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interest {
    Technology,
    Leadership,
    Business,
    Management,
    Learning,
    Academic,
    Creative,
    Healthcare,
    SpecializedBpo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialPressure {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlternativeField {
    Tech,
    Business,
    Education,
    Healthcare,
    Creative,
}

impl AlternativeField {
    /// The career path a named alternative field maps to.
    pub fn target_path(&self) -> crate::path::CareerPath {
        use crate::path::CareerPath;
        match self {
            AlternativeField::Tech => CareerPath::SwitchTech,
            AlternativeField::Business => CareerPath::SwitchBusiness,
            AlternativeField::Education => CareerPath::SwitchEducation,
            AlternativeField::Healthcare => CareerPath::SwitchHealthcare,
            AlternativeField::Creative => CareerPath::SwitchCreative,
        }
    }
}

/// Big-Five-style trait triple carried by every profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityTraits {
    pub conscientiousness: TraitLevel,
    pub extroversion: TraitLevel,
    pub openness: TraitLevel,
}

/// Immutable input record for one reasoning pass. Validate with
/// [`Profile::validate`] before handing it to the advisor; an invalid
/// profile aborts before any knowledge source runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub age: u32,
    pub has_degree: bool,
    pub education: EducationLevel,
    #[serde(alias = "experience_years")]
    pub bpo_experience_years: u32,
    pub current_role: CurrentRole,
    pub monthly_salary: f64,
    pub satisfaction: u8,
    pub performance: PerformanceLevel,
    #[serde(alias = "traits")]
    pub personality_traits: PersonalityTraits,
    pub interests: BTreeSet<Interest>,
    pub financial_pressure: FinancialPressure,
    #[serde(alias = "work_life_balance_importance")]
    pub wlb_importance: TraitLevel,
    pub identified_alternative_field: bool,
    #[serde(default)]
    pub alternative_field: Option<AlternativeField>,
    pub researched_requirements: bool,
}

impl Profile {
    /// Checks every field range and returns all issues at once.
    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        let mut issues = Vec::new();

        if !AGE_RANGE.contains(&self.age) {
            issues.push(FieldIssue::new(
                "age",
                format!("must be between {} and {}", AGE_RANGE.start(), AGE_RANGE.end()),
            ));
        }
        if !EXPERIENCE_RANGE.contains(&self.bpo_experience_years) {
            issues.push(FieldIssue::new(
                "bpo_experience_years",
                format!("must be between {} and {}", EXPERIENCE_RANGE.start(), EXPERIENCE_RANGE.end()),
            ));
        }
        if !self.monthly_salary.is_finite() || !SALARY_RANGE.contains(&self.monthly_salary) {
            issues.push(FieldIssue::new(
                "monthly_salary",
                format!("must be between {} and {}", SALARY_RANGE.start(), SALARY_RANGE.end()),
            ));
        }
        if !SATISFACTION_RANGE.contains(&self.satisfaction) {
            issues.push(FieldIssue::new("satisfaction", "must be between 1 and 10"));
        }
        if self.identified_alternative_field && self.alternative_field.is_none() {
            issues.push(FieldIssue::new(
                "alternative_field",
                "required when identified_alternative_field is true",
            ));
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ProfileValidationError { issues })
        }
    }

    pub fn has_interest(&self, interest: Interest) -> bool {
        self.interests.contains(&interest)
    }

    /// The alternative field counts only when it was both identified and set.
    pub fn identified_field(&self) -> Option<AlternativeField> {
        if self.identified_alternative_field {
            self.alternative_field
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Profile {
        Profile {
            age: 25,
            has_degree: true,
            education: EducationLevel::BachelorsDegree,
            bpo_experience_years: 3,
            current_role: CurrentRole::CustomerServiceRepresentative,
            monthly_salary: 30_000.0,
            satisfaction: 6,
            performance: PerformanceLevel::Good,
            personality_traits: PersonalityTraits {
                conscientiousness: TraitLevel::Medium,
                extroversion: TraitLevel::Medium,
                openness: TraitLevel::High,
            },
            interests: [Interest::Technology, Interest::Leadership].into_iter().collect(),
            financial_pressure: FinancialPressure::Medium,
            wlb_importance: TraitLevel::High,
            identified_alternative_field: true,
            alternative_field: Some(AlternativeField::Tech),
            researched_requirements: true,
        }
    }

    #[test]
    fn test_valid_profile_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_underage_rejected() {
        let mut p = sample();
        p.age = 10;
        let err = p.validate().unwrap_err();
        assert_eq!(err.issues.len(), 1);
        assert_eq!(err.issues[0].field, "age");
    }

    #[test]
    fn test_all_issues_reported_at_once() {
        let mut p = sample();
        p.age = 10;
        p.satisfaction = 0;
        p.monthly_salary = -1.0;
        p.alternative_field = None;
        let err = p.validate().unwrap_err();
        let fields: Vec<&str> = err.issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["age", "monthly_salary", "satisfaction", "alternative_field"]
        );
    }

    #[test]
    fn test_human_readable_enum_aliases() {
        let level: EducationLevel = serde_json::from_str("\"Bachelor's Degree\"").unwrap();
        assert_eq!(level, EducationLevel::BachelorsDegree);
        let role: CurrentRole = serde_json::from_str("\"Customer Service Representative\"").unwrap();
        assert_eq!(role, CurrentRole::CustomerServiceRepresentative);
    }

    #[test]
    fn test_identified_field_requires_flag() {
        let mut p = sample();
        p.identified_alternative_field = false;
        assert_eq!(p.identified_field(), None);
    }
}
