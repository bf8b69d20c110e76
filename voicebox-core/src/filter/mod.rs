//! Record filtering pipeline.
//!
//! This module provides the two narrowing stages that run before any text
//! analysis:
//! - **Period**: selects the subset whose timestamp falls in a named window
//! - **Location**: cascading top-level → leaf narrowing with ranked counts

pub mod location;
pub mod period;

pub use location::{LocationChoice, RankedValue};
pub use period::PeriodSelection;
