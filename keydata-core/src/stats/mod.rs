//! Layout statistics.
//!
//! - `position`: finger and hand assignment of the 30 keys
//! - `metrics`: bigram, skipgram and trigram typing metrics
//! - `scorer`: metric frequencies of layouts over a corpus report
//! - `percentile`: percentile distributions of scored layouts

pub mod position;

pub mod metrics;

pub mod scorer;

pub mod percentile;

pub use metrics::Metric;
pub use percentile::PercentileReport;
pub use scorer::{StatsTable, score_layout, score_layouts};
