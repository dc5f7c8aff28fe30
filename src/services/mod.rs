pub mod averages;
pub mod cohort_filter;
pub mod derived_facts;
pub mod distribution;
pub mod goal_timing;
pub mod report;
pub mod roi_calculator;
pub mod schema_normalizer;

pub use averages::*;
pub use cohort_filter::*;
pub use derived_facts::*;
pub use distribution::*;
pub use goal_timing::*;
pub use report::*;
pub use roi_calculator::*;
pub use schema_normalizer::*;
