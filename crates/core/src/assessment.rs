//! Saved assessment artifact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::project::ProjectDescription;
use crate::report::FinalReport;

/// A finished, saved impact assessment.
///
/// Embeds the originating [`ProjectDescription`] fields flat (the stored
/// record is a single flat camelCase object). The identifier is generated at
/// save time and never changes; the report text may be edited in place
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    /// Opaque unique identifier, assigned at save time.
    pub id: String,
    #[serde(flatten)]
    pub project: ProjectDescription,
    /// Final report body, Markdown, sentinel already stripped.
    pub report: String,
    pub created_at: DateTime<Utc>,
    /// Whether the generation finished cleanly (sentinel was present).
    pub complete: bool,
}

impl Assessment {
    /// Promote a finalized generation into a saved artifact.
    pub fn from_generation(project: ProjectDescription, report: FinalReport) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            project,
            report: report.text,
            created_at: Utc::now(),
            complete: report.complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> ProjectDescription {
        ProjectDescription {
            project_name: "Nyali Bypass".to_string(),
            project_proponent: "Coast Roads Authority".to_string(),
            location: "Mombasa County".to_string(),
            project_type: "Road construction".to_string(),
            description: "A 7km dual carriageway bypass.".to_string(),
            assessment_type: "Cumulative".to_string(),
            assessor_name: None,
            assessor_type: None,
        }
    }

    #[test]
    fn from_generation_assigns_unique_ids() {
        let report = FinalReport {
            text: "Body".to_string(),
            complete: true,
        };
        let a = Assessment::from_generation(project(), report.clone());
        let b = Assessment::from_generation(project(), report);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn record_serializes_flat_with_camel_case_keys() {
        let assessment = Assessment::from_generation(
            project(),
            FinalReport {
                text: "## Summary".to_string(),
                complete: false,
            },
        );
        let json = serde_json::to_value(&assessment).unwrap();
        // Project fields sit at the top level of the record, not nested.
        assert_eq!(json["projectName"], "Nyali Bypass");
        assert_eq!(json["assessmentType"], "Cumulative");
        assert_eq!(json["report"], "## Summary");
        assert_eq!(json["complete"], false);
        assert!(json["createdAt"].is_string());
        assert!(json.get("project").is_none());
    }

    #[test]
    fn record_round_trips_through_json() {
        let assessment = Assessment::from_generation(
            project(),
            FinalReport {
                text: "Body".to_string(),
                complete: true,
            },
        );
        let json = serde_json::to_string(&assessment).unwrap();
        let back: Assessment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, assessment);
    }
}
