mod adapter;
pub mod channels;
mod config;
mod features;

pub use adapter::{adapt, FeatureAdapter};
pub use config::AdapterConfig;
pub use features::AdaptedFeatures;
