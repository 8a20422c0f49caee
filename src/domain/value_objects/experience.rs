//! Experience Value Object
//!
//! The experience-point count to persist into a save slot.
//!
//! Any 32-bit signed value is accepted and written verbatim; the save format
//! stores it as 4 little-endian bytes.

use std::fmt;

/// Experience points value object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Experience(i32);

impl Experience {
    /// Width of the encoded value in the slot binary
    pub const ENCODED_LEN: usize = 4;

    /// Create a new Experience with the given point count
    pub fn new(points: i32) -> Self {
        Self(points)
    }

    /// Get the point count
    pub fn points(&self) -> i32 {
        self.0
    }

    /// Encode as the 4 little-endian bytes stored in the slot binary
    pub fn to_le_bytes(&self) -> [u8; Self::ENCODED_LEN] {
        self.0.to_le_bytes()
    }

    /// Decode from the 4 little-endian bytes stored in the slot binary
    pub fn from_le_bytes(bytes: [u8; Self::ENCODED_LEN]) -> Self {
        Self(i32::from_le_bytes(bytes))
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Experience {
    fn from(points: i32) -> Self {
        Self(points)
    }
}

impl From<Experience> for i32 {
    fn from(experience: Experience) -> Self {
        experience.0
    }
}
