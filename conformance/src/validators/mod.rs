//! Validators, grouped by what they inspect.

pub mod dataset;
pub mod site;
