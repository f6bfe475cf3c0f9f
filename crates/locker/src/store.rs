//! Storage contract for finished assessments.

use wajibika_core::Assessment;

use crate::error::LockerError;

/// Load/store boundary for the saved-assessment collection.
///
/// The collection is ordered most-recent-first. There is no partial-update
/// API: implementations provide the two snapshot operations, and every
/// lifecycle helper reads the full collection, modifies it in memory and
/// rewrites it whole.
pub trait AssessmentStore {
    /// Load the full collection, most-recent-first.
    fn load_all(&self) -> Result<Vec<Assessment>, LockerError>;

    /// Replace the stored collection with `assessments`.
    fn save_all(&self, assessments: &[Assessment]) -> Result<(), LockerError>;

    /// Insert a newly saved assessment at the front of the collection.
    fn add(&self, assessment: Assessment) -> Result<(), LockerError> {
        let mut all = self.load_all()?;
        all.insert(0, assessment);
        self.save_all(&all)
    }

    /// Replace the report text of the assessment with `id`, keeping its
    /// identity, timestamp and position. Returns the updated record if a
    /// matching one exists.
    fn update_report(&self, id: &str, report: &str) -> Result<Option<Assessment>, LockerError> {
        let mut all = self.load_all()?;
        let updated = match all.iter_mut().find(|a| a.id == id) {
            Some(record) => {
                record.report = report.to_string();
                record.clone()
            }
            None => return Ok(None),
        };
        self.save_all(&all)?;
        Ok(Some(updated))
    }

    /// Delete the assessment with `id`. Returns whether a record was removed.
    fn remove(&self, id: &str) -> Result<bool, LockerError> {
        let mut all = self.load_all()?;
        let before = all.len();
        all.retain(|a| a.id != id);
        if all.len() == before {
            return Ok(false);
        }
        self.save_all(&all)?;
        Ok(true)
    }
}
