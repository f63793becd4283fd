//! Dataset and citation registry validators.

pub mod citations;
pub mod invariants;
