//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod binary_slot;

pub use binary_slot::BinarySlotRepository;
