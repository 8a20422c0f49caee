//! ExperienceRepository port - abstraction for slot persistence
//!
//! This trait allows callers to patch and read back the experience value
//! without knowing about the slot binary layout.

use crate::domain::value_objects::Experience;
use crate::error::ExperResult;

/// Options controlling a save operation
#[derive(Debug, Clone, Copy)]
pub struct SaveOptions {
    /// Create a backup of the slot file before patching it
    pub backup: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self { backup: true }
    }
}

/// Abstract repository for serialising an [`Experience`] to a save slot
///
/// Implemented by the infrastructure layer; each call opens and closes the
/// slot file for the duration of that call only. No state is held between
/// calls, so concurrent writers to the same slot are the caller's problem.
pub trait ExperienceRepository {
    /// Save the EXP points to the slot
    ///
    /// The slot file must already exist. When `options.backup` is set, the
    /// slot is backed up before the patch; a backup failure aborts the save
    /// without mutating the file.
    fn save(&self, experience: &Experience, options: &SaveOptions) -> ExperResult<()>;

    /// Read the EXP points currently stored in the slot
    fn load(&self) -> ExperResult<Experience>;
}
