pub mod error;
pub mod model;
pub mod params;
pub mod snapshot;

pub use error::*;
pub use model::*;
pub use params::*;
pub use snapshot::*;
