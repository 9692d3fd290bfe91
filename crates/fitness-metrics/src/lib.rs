mod metrics;
#[cfg(test)]
mod tests;

pub use metrics::{render, FeatureMetrics, MetricsError};
