//! Assessment prompt construction.
//!
//! [`build_prompt`] deterministically interpolates a [`ProjectDescription`]
//! into a fixed instruction template. The template varies only by category
//! (one focus paragraph per [`AssessmentCategory`]) and always ends by
//! instructing the model to close with [`REPORT_SENTINEL`] on its own line.
//! That sentinel is the hand-off contract with [`crate::report::finalize`],
//! which strips it again and flags truncated output when it is missing.

use crate::error::CoreError;
use crate::project::{AssessmentCategory, ProjectDescription};

/// Exact phrase the model is instructed to emit as the last line of every
/// report. Chosen so it cannot plausibly occur mid-report.
pub const REPORT_SENTINEL: &str = "*** END OF REPORT ***";

/// Category-specific focus paragraph inserted into the prompt template.
pub fn focus_paragraph(category: AssessmentCategory) -> &'static str {
    match category {
        AssessmentCategory::Environmental => {
            "Focus on the project's impact on local ecosystems, biodiversity, water sources, \
             air quality, and noise levels."
        }
        AssessmentCategory::Social => {
            "Focus on the project's effects on the local community, including displacement, \
             employment, cultural heritage, public services, and social equity."
        }
        AssessmentCategory::Health => {
            "Focus on the potential health impacts on the community, such as those from air and \
             water pollution, noise, and changes to access to healthcare or food sources."
        }
        AssessmentCategory::Climate => {
            "Focus on the project's carbon footprint, greenhouse gas emissions, and its \
             vulnerability or resilience to climate change effects like flooding or drought."
        }
        AssessmentCategory::Cumulative => {
            "This is a \"Cumulative\" assessment. Your analysis MUST consider the incremental \
             impact of this project in combination with other past, present, and reasonably \
             foreseeable projects in the area. The discussion should focus on the total, \
             additive, and synergistic effects on environmental and social resources, not just \
             the impacts of this single project in isolation."
        }
    }
}

/// Build the full generation prompt for a project description.
///
/// Pure and deterministic: the same description always yields a
/// byte-identical string. The only error condition is an unrecognized
/// category ([`CoreError::UnsupportedCategory`]); field presence is the
/// caller's concern via [`ProjectDescription::validate`].
pub fn build_prompt(description: &ProjectDescription) -> Result<String, CoreError> {
    let category = description.category()?;
    let focus = focus_paragraph(category);

    Ok(format!(
        "As a senior Environmental Scientist registered with NEMA (National Environment \
         Management Authority) in Kenya, write a professional, comprehensive, and complete \
         \"{category}\" impact assessment report.\n\
         \n\
         Your report must be well-structured with clear sections formatted in Markdown. \
         It must be detailed, thorough, and based on the project details provided below.\n\
         \n\
         **Primary Focus for this Assessment Type:**\n\
         {focus}\n\
         \n\
         **Project Details:**\n\
         - **Project Name:** {project_name}\n\
         - **Project Proponent:** {project_proponent}\n\
         - **Location:** {location}, Kenya\n\
         - **Project Type:** {project_type}\n\
         - **Detailed Description:** {description}\n\
         \n\
         **Instructions:**\n\
         1. Create a standard report structure including sections like Introduction, Project \
         Description, Baseline Conditions, Impact Assessment, Mitigation Measures, and \
         Conclusion.\n\
         2. Write detailed content for each section based on the project details and your \
         expertise.\n\
         3. Do not repeat the project details list in the report body. Begin directly with the \
         first section.\n\
         4. Ensure the report is complete.\n\
         5. Conclude the entire report with the exact phrase on a new line: \"{sentinel}\"\n",
        category = category,
        focus = focus,
        project_name = description.project_name,
        project_proponent = description.project_proponent,
        location = description.location,
        project_type = description.project_type,
        description = description.description,
        sentinel = REPORT_SENTINEL,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
