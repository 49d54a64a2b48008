//! Review dataset ingestion and aggregation.

pub mod reviews;

pub use reviews::{Recommendations, ReviewTable};
