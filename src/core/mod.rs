pub mod config;
pub mod error;

pub use config::GridConfig;
pub use error::{ParseError, PlacementError, Result};
