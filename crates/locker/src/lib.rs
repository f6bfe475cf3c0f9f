//! Evidence locker: local persistence for saved assessments.
//!
//! Provides the [`AssessmentStore`] contract (`load_all`/`save_all` over one
//! ordered, most-recent-first collection of [`wajibika_core::Assessment`]
//! records, with `add`/`update_report`/`remove` lifecycle helpers composed
//! on top) and [`JsonFileStore`], the file-backed implementation holding the
//! whole collection as one JSON array on disk. No logging here; failures
//! surface as [`LockerError`].

pub mod error;
pub mod file;
pub mod store;

pub use error::LockerError;
pub use file::{JsonFileStore, COLLECTION_FILE};
pub use store::AssessmentStore;
