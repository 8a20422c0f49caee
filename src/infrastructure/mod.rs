//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. Everything that touches the
//! file system lives here.

pub mod repositories;
