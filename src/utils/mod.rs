//! Utility modules for tola-lang.

pub mod log;
pub mod xml;
