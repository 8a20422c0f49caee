//! Slot Value Object
//!
//! A reference to a NieR:Automata save-slot file on disk.
//!
//! A `Slot` carries no validation of its own: existence is checked by the
//! repository at call time, not at construction, so a `Slot` may point at a
//! file that does not exist yet.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

/// Immutable reference to a save-slot file path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slot(PathBuf);

impl Slot {
    /// Create a new Slot for the given path
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self(path.as_ref().to_path_buf())
    }

    /// Get the slot file path
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Get the slot file's base name, if the path ends in one
    pub fn file_name(&self) -> Option<&OsStr> {
        self.0.file_name()
    }

    /// Get the directory containing the slot file, if any
    pub fn directory(&self) -> Option<&Path> {
        self.0.parent()
    }

    /// Check whether the slot file currently exists on disk
    pub fn exists(&self) -> bool {
        self.0.exists()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for Slot {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<PathBuf> for Slot {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&str> for Slot {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_preserved() {
        let slot = Slot::new("saves/SlotData_0.dat");
        assert_eq!(slot.path(), Path::new("saves/SlotData_0.dat"));
    }

    #[test]
    fn file_name_works() {
        let slot = Slot::new("saves/SlotData_0.dat");
        assert_eq!(slot.file_name().unwrap(), "SlotData_0.dat");
    }

    #[test]
    fn directory_works() {
        let slot = Slot::new("saves/SlotData_0.dat");
        assert_eq!(slot.directory().unwrap(), Path::new("saves"));
    }

    #[test]
    fn file_name_none_for_parent_dir_path() {
        let slot = Slot::new("saves/..");
        assert!(slot.file_name().is_none());
    }

    #[test]
    fn directory_none_for_root() {
        let slot = Slot::new("/");
        assert!(slot.directory().is_none());
    }

    #[test]
    fn exists_reflects_disk_state() {
        let slot = Slot::new("no/such/SlotData_0.dat");
        assert!(!slot.exists());
    }

    #[test]
    fn display_works() {
        let slot = Slot::new("saves/SlotData_0.dat");
        assert_eq!(format!("{}", slot), "saves/SlotData_0.dat");
    }

    #[test]
    fn from_pathbuf() {
        let slot: Slot = PathBuf::from("SlotData_1.dat").into();
        assert_eq!(slot.path(), Path::new("SlotData_1.dat"));
    }

    #[test]
    fn from_str() {
        let slot: Slot = "SlotData_2.dat".into();
        assert_eq!(slot.path(), Path::new("SlotData_2.dat"));
    }
}
