pub mod error;
pub use error::{ConfigError, EventMatrixError, LoadError};
