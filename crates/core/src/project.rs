//! Project description input model and the closed assessment-category set.
//!
//! A [`ProjectDescription`] is the immutable form submission that seeds a
//! report generation. Its `assessment_type` field travels as a plain string
//! (matching the stored record format) and is resolved to an
//! [`AssessmentCategory`] at the prompt boundary, so an unrecognized value
//! surfaces as [`CoreError::UnsupportedCategory`] instead of a silent
//! fallback.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Assessment categories
// ---------------------------------------------------------------------------

/// The closed set of supported impact-assessment categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentCategory {
    /// Ecosystems, biodiversity, water, air quality, noise.
    Environmental,
    /// Community effects: displacement, employment, heritage, equity.
    Social,
    /// Community health impacts of pollution and access changes.
    Health,
    /// Emissions footprint and climate vulnerability/resilience.
    Climate,
    /// Additive and synergistic effects combined with other projects.
    Cumulative,
}

/// All supported categories, in display order.
pub const ALL_CATEGORIES: &[AssessmentCategory] = &[
    AssessmentCategory::Environmental,
    AssessmentCategory::Social,
    AssessmentCategory::Health,
    AssessmentCategory::Climate,
    AssessmentCategory::Cumulative,
];

impl AssessmentCategory {
    /// Canonical string form, as stored and as shown to users.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentCategory::Environmental => "Environmental",
            AssessmentCategory::Social => "Social",
            AssessmentCategory::Health => "Health",
            AssessmentCategory::Climate => "Climate",
            AssessmentCategory::Cumulative => "Cumulative",
        }
    }

    /// Resolve a stored category string to its enum value.
    ///
    /// The match is exact (no case folding): the set of valid inputs is the
    /// set of [`as_str`](Self::as_str) outputs. Anything else is
    /// [`CoreError::UnsupportedCategory`].
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "Environmental" => Ok(AssessmentCategory::Environmental),
            "Social" => Ok(AssessmentCategory::Social),
            "Health" => Ok(AssessmentCategory::Health),
            "Climate" => Ok(AssessmentCategory::Climate),
            "Cumulative" => Ok(AssessmentCategory::Cumulative),
            other => Err(CoreError::UnsupportedCategory(other.to_string())),
        }
    }
}

impl std::fmt::Display for AssessmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Project description
// ---------------------------------------------------------------------------

/// The structured form input describing the project under assessment.
///
/// Field names serialize in camelCase to match the stored record format.
/// All required fields must be non-empty before a generation request is
/// issued; [`validate`](Self::validate) enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescription {
    pub project_name: String,
    pub project_proponent: String,
    pub location: String,
    pub project_type: String,
    /// Free-text description of the proposed works.
    pub description: String,
    /// Stored category string; resolved via [`AssessmentCategory::parse`].
    pub assessment_type: String,
    /// Optional name of the person conducting the assessment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessor_name: Option<String>,
    /// Optional title/role of the assessor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessor_type: Option<String>,
}

impl ProjectDescription {
    /// Resolve the stored `assessment_type` string to a category.
    pub fn category(&self) -> Result<AssessmentCategory, CoreError> {
        AssessmentCategory::parse(&self.assessment_type)
    }

    /// Validate pre-conditions before a generation request is issued.
    ///
    /// - Every required field must be non-empty (whitespace-only counts as
    ///   empty).
    /// - The category string must resolve to a supported
    ///   [`AssessmentCategory`].
    pub fn validate(&self) -> Result<(), CoreError> {
        let required: &[(&str, &str)] = &[
            ("projectName", &self.project_name),
            ("projectProponent", &self.project_proponent),
            ("location", &self.location),
            ("projectType", &self.project_type),
            ("description", &self.description),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::Validation(format!(
                    "Field '{field}' must not be empty"
                )));
            }
        }
        self.category()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
