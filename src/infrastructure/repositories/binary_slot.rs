//! Binary Slot Repository
//!
//! Implements the ExperienceRepository port against the NieR:Automata
//! slot binary. The slot file is treated as an opaque byte blob except for
//! the 4 bytes holding the EXP value.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::PathBuf;

use uuid::Uuid;

use crate::domain::ports::{ExperienceRepository, SaveOptions};
use crate::domain::value_objects::{Experience, Slot};
use crate::error::{ExperError, ExperResult};

/// Experience repository backed by the slot binary on disk
///
/// Holds a non-owning reference to one [`Slot`]; each operation opens and
/// closes the slot file itself, so no handles live between calls.
#[derive(Debug, Clone, Copy)]
pub struct BinarySlotRepository<'a> {
    slot: &'a Slot,
}

impl<'a> BinarySlotRepository<'a> {
    /// Offset in the slot binary where the EXP value is stored.
    ///
    /// Reverse-engineered from the PC save layout. Opaque magic constant,
    /// never validated against the file size.
    pub const LEVEL_OFFSET: u64 = 0x3871C;

    /// Directory created next to the slot file to hold backups
    pub const BACKUP_DIR_NAME: &'static str = "NieR.EXPer";

    /// Create a repository for the given slot
    pub fn new(slot: &'a Slot) -> Self {
        Self { slot }
    }

    /// Copy the slot file into a freshly named backup directory
    ///
    /// The backup lands at `<slot-dir>/NieR.EXPer/<uuid>/<file-name>`; the
    /// UUID is generated anew on every call, so repeated saves never
    /// overwrite a prior backup.
    fn backup_slot(&self) -> ExperResult<PathBuf> {
        let file_name = self.slot.file_name().ok_or_else(|| ExperError::NoFileName {
            path: self.slot.path().to_path_buf(),
        })?;

        let source_dir = self.slot.directory().ok_or_else(|| ExperError::NoDirectory {
            path: self.slot.path().to_path_buf(),
        })?;

        let backup_dir = source_dir
            .join(Self::BACKUP_DIR_NAME)
            .join(Uuid::new_v4().to_string());

        fs::create_dir_all(&backup_dir)?;

        let destination = backup_dir.join(file_name);
        fs::copy(self.slot.path(), &destination)?;
        log::debug!("backed up slot to {}", destination.display());

        Ok(backup_dir)
    }

    /// Overwrite the 4 EXP bytes at the fixed offset
    ///
    /// The file is opened without truncation; bytes outside the write
    /// region are left untouched. A file shorter than the offset is
    /// extended by the seek, with the gap zero-filled by the OS.
    fn patch_value(&self, experience: &Experience) -> ExperResult<()> {
        let mut file = OpenOptions::new().write(true).open(self.slot.path())?;
        file.seek(SeekFrom::Start(Self::LEVEL_OFFSET))?;
        file.write_all(&experience.to_le_bytes())?;
        log::debug!(
            "patched EXP to {} at offset {:#x} in {}",
            experience,
            Self::LEVEL_OFFSET,
            self.slot
        );
        Ok(())
    }
}

impl ExperienceRepository for BinarySlotRepository<'_> {
    fn save(&self, experience: &Experience, options: &SaveOptions) -> ExperResult<()> {
        if !self.slot.exists() {
            return Err(ExperError::SlotNotFound {
                path: self.slot.path().to_path_buf(),
            });
        }

        if options.backup {
            self.backup_slot()?;
        }

        self.patch_value(experience)
    }

    fn load(&self) -> ExperResult<Experience> {
        if !self.slot.exists() {
            return Err(ExperError::SlotNotFound {
                path: self.slot.path().to_path_buf(),
            });
        }

        let mut file = File::open(self.slot.path())?;
        file.seek(SeekFrom::Start(Self::LEVEL_OFFSET))?;
        let mut bytes = [0u8; Experience::ENCODED_LEN];
        file.read_exact(&mut bytes)?;

        Ok(Experience::from_le_bytes(bytes))
    }
}
