//! NieR.EXPer - save-slot EXP patcher for NieR:Automata
//!
//! Patches the experience-point count stored at a fixed offset inside a
//! NieR:Automata save-slot binary, backing up the slot file beforehand
//! unless told otherwise. The slot is treated as an opaque byte blob; no
//! other field is read, validated, or recomputed.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use config::Config;
pub use domain::ports::{Calculator, ExperienceRepository, SaveOptions};
pub use domain::value_objects::{Experience, Slot};
pub use error::{ExperError, ExperResult};
pub use infrastructure::repositories::BinarySlotRepository;
