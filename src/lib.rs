//! Betting-market analytics over historical football match records.
//!
//! The pipeline is: raw table → [`services::normalize`] → [`services::enrich`]
//! → [`services::filter_cohort`] → ROI, distributions and goal timing.

pub mod config;
pub mod data;
pub mod models;
pub mod services;
pub mod utils;
