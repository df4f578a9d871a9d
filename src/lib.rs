//! gapfill: Missing Value Walkthrough Library
//!
//! Loads a tabular dataset and applies the common strategies for treating
//! missing values: dropping, constant/mean/median/mode imputation, and
//! row-order fills (forward, backward, linear interpolation).

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
